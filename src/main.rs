use iridescent_logo::{generate_logo, IridescentGenerator, LogoConfig, LogoError};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init(); // Initialize logger

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ {}", e);
            eprintln!("❌ Failed to generate logo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), LogoError> {
    let config = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => LogoConfig::load(path)?,
        None => {
            let default_path = LogoConfig::default_path();
            if default_path.exists() {
                LogoConfig::load(&default_path)?
            } else {
                log::info!("ℹ️ No config at {}, using built-in logo preset", default_path.display());
                LogoConfig::default()
            }
        }
    };

    let logo = generate_logo(&config, &IridescentGenerator::default())?;
    println!(
        "Created logo at: {} (text at {}, {})",
        config.output_path.display(),
        logo.placement.x,
        logo.placement.y
    );

    Ok(())
}
