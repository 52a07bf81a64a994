use crate::background::Canvas;
use crate::error::LogoError;
use crate::placement::{Placement, TextMetrics};
use ab_glyph::{Font, FontVec, PxScale};
use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs;
use std::path::{Path, PathBuf};

/// Measures and paints a single line of text.
pub trait TextPainter {
    fn measure(&self, text: &str) -> TextMetrics;

    fn draw(&self, canvas: &mut Canvas, at: Placement, text: &str, color: Rgba<u8>);
}

/// A TrueType/OpenType font loaded from disk at a fixed size.
pub struct LoadedFont {
    font: FontVec,
    scale: PxScale,
    path: PathBuf,
}

impl LoadedFont {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }
}

/// Loads `path` and prepares it for drawing at `size` pixels per em.
pub fn load_font<P: AsRef<Path>>(path: P, size: f32) -> Result<LoadedFont, LogoError> {
    let path = path.as_ref().to_path_buf();
    let not_found = |reason: String| LogoError::FontNotFound {
        path: path.clone(),
        reason,
    };

    if !size.is_finite() || size <= 0.0 {
        return Err(not_found(format!("invalid font size {}", size)));
    }

    let data = fs::read(&path).map_err(|e| not_found(e.to_string()))?;
    let font = FontVec::try_from_vec(data).map_err(|e| not_found(e.to_string()))?;

    let scale = em_scale(&font, size);
    log::debug!("🔤 Loaded font {} (px scale {:.1})", path.display(), scale.y);

    Ok(LoadedFont { font, scale, path })
}

// ab_glyph scales by ascent-to-descent height; config sizes are em sizes.
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(size * font.height_unscaled() / upem),
        _ => PxScale::from(size),
    }
}

impl TextPainter for LoadedFont {
    fn measure(&self, text: &str) -> TextMetrics {
        let (width, height) = text_size(self.scale, &self.font, text);
        TextMetrics::new(width, height)
    }

    fn draw(&self, canvas: &mut Canvas, at: Placement, text: &str, color: Rgba<u8>) {
        draw_text_mut(canvas, color, at.x, at.y, self.scale, &self.font, text);
    }
}
