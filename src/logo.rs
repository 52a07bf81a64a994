use crate::background::{BackgroundGenerator, Canvas};
use crate::config::LogoConfig;
use crate::error::LogoError;
use crate::font::{load_font, TextPainter};
use crate::persist::save_canvas;
use crate::placement::{resolve, Placement, PlacementMode, TextMetrics};

/// A finished canvas together with the layout that produced it.
#[derive(Debug, Clone)]
pub struct RenderedLogo {
    pub canvas: Canvas,
    pub metrics: TextMetrics,
    pub placement: Placement,
}

/// Builds the logo in memory: background, measurement, placement, text.
pub fn compose(
    config: &LogoConfig,
    generator: &dyn BackgroundGenerator,
    painter: &dyn TextPainter,
) -> Result<RenderedLogo, LogoError> {
    log::info!(
        "🎨 Generating {}x{} background (vibrancy: {})",
        config.width,
        config.height,
        config.enhance_vibrancy
    );
    let mut canvas = generator.generate(config.width, config.height, config.enhance_vibrancy)?;
    let (width, height) = canvas.dimensions();

    let metrics = painter.measure(&config.text);
    log::debug!("📏 Text {:?} measures {}x{}", config.text, metrics.width, metrics.height);

    let mode = config.placement_mode();
    let placement = resolve(mode, width, height, metrics);
    match mode {
        PlacementMode::Manual(_) => log::info!("📌 Using manual position ({}, {})", placement.x, placement.y),
        PlacementMode::Centered => log::info!("🎯 Centered text at ({}, {})", placement.x, placement.y),
    }

    // Left as-is: the text clips rather than being resized or moved.
    if !placement.fits(metrics, width, height) {
        log::warn!(
            "⚠ Text block {}x{} at ({}, {}) does not fit the {}x{} canvas and will be clipped",
            metrics.width,
            metrics.height,
            placement.x,
            placement.y,
            width,
            height
        );
    }

    painter.draw(&mut canvas, placement, &config.text, config.font_color.rgba());

    Ok(RenderedLogo {
        canvas,
        metrics,
        placement,
    })
}

/// Full run: validate, load the font, compose and write the output file.
/// Nothing is written unless every earlier step succeeds.
pub fn generate_logo(
    config: &LogoConfig,
    generator: &dyn BackgroundGenerator,
) -> Result<RenderedLogo, LogoError> {
    config.validate()?;

    let font = load_font(&config.font_path, config.font_size)?;
    log::info!("🔤 Using font {} at {}px", font.path().display(), config.font_size);

    let logo = compose(config, generator, &font)?;

    save_canvas(&logo.canvas, &config.output_path, config.dpi)?;
    log::info!("✅ Logo saved to {}", config.output_path.display());

    Ok(logo)
}
