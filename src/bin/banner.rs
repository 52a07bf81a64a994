use iridescent_logo::{generate_logo, IridescentGenerator, LogoConfig};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut config = LogoConfig::banner();
    if let Some(output_path) = std::env::args_os().nth(1) {
        config.output_path = PathBuf::from(output_path);
    }

    // Banner text is placed by hand; a tall font can overflow the 240px height.
    match generate_logo(&config, &IridescentGenerator::default()) {
        Ok(logo) => {
            println!(
                "Created banner at: {} ({}x{})",
                config.output_path.display(),
                logo.canvas.width(),
                logo.canvas.height()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Failed to generate banner: {}", e);
            ExitCode::FAILURE
        }
    }
}
