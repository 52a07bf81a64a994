use crate::error::LogoError;
use image::{Rgba, RgbaImage};
use std::f32::consts::TAU;

/// In-memory raster the logo is drawn on.
pub type Canvas = RgbaImage;

/// Largest side length any generator will produce.
pub const MAX_DIMENSION: u32 = 16_384;

/// Produces the canvas the text is drawn onto.
pub trait BackgroundGenerator {
    fn generate(&self, width: u32, height: u32, enhance_vibrancy: bool) -> Result<Canvas, LogoError>;
}

fn check_dimensions(width: u32, height: u32) -> Result<(), LogoError> {
    let reason = if width == 0 || height == 0 {
        "canvas dimensions must be positive"
    } else if width > MAX_DIMENSION || height > MAX_DIMENSION {
        "canvas side exceeds the maximum supported size"
    } else {
        return Ok(());
    };

    Err(LogoError::GenerationFailure {
        width,
        height,
        reason: reason.to_string(),
    })
}

/// Shimmering, oil-on-water style gradient.
///
/// A few overlapping sine fields give a film "thickness" per pixel, which is
/// then mapped through a cosine palette the way thin-film interference shifts
/// hue with thickness. The same seed always yields the same image.
#[derive(Debug, Clone, Default)]
pub struct IridescentGenerator {
    pub seed: u64,
}

impl IridescentGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn waves(&self) -> [Wave; 3] {
        let mut state = self.seed;
        let mut next = || unit_float(splitmix64(&mut state));
        std::array::from_fn(|_| Wave {
            angle: next() * TAU,
            frequency: 1.5 + next() * 2.5,
            phase: next() * TAU,
        })
    }
}

struct Wave {
    angle: f32,
    frequency: f32,
    phase: f32,
}

impl BackgroundGenerator for IridescentGenerator {
    fn generate(&self, width: u32, height: u32, enhance_vibrancy: bool) -> Result<Canvas, LogoError> {
        check_dimensions(width, height)?;

        let waves = self.waves();
        let scale = width.max(height) as f32;

        let canvas = RgbaImage::from_fn(width, height, |x, y| {
            let u = x as f32 / scale;
            let v = y as f32 / scale;

            let thickness: f32 = waves
                .iter()
                .map(|w| {
                    let along = u * w.angle.cos() + v * w.angle.sin();
                    (along * w.frequency * TAU + w.phase).sin()
                })
                .sum::<f32>()
                / waves.len() as f32;

            let mut rgb = film_color(thickness * 0.5 + 0.5 + (u + v) * 0.25);
            if enhance_vibrancy {
                rgb = boost_saturation(rgb, 1.35);
            }

            Rgba([to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]), 255])
        });

        Ok(canvas)
    }
}

/// Flat single-colour background.
#[derive(Debug, Clone, Copy)]
pub struct SolidGenerator(pub Rgba<u8>);

impl BackgroundGenerator for SolidGenerator {
    fn generate(&self, width: u32, height: u32, _enhance_vibrancy: bool) -> Result<Canvas, LogoError> {
        check_dimensions(width, height)?;
        Ok(RgbaImage::from_pixel(width, height, self.0))
    }
}

// Cosine palette tuned toward pastel pinks, teals and golds.
fn film_color(t: f32) -> [f32; 3] {
    const BASE: [f32; 3] = [0.62, 0.58, 0.66];
    const AMPLITUDE: [f32; 3] = [0.38, 0.40, 0.34];
    const OFFSET: [f32; 3] = [0.00, 0.33, 0.67];

    std::array::from_fn(|i| BASE[i] + AMPLITUDE[i] * (TAU * (t + OFFSET[i])).cos())
}

fn boost_saturation(rgb: [f32; 3], factor: f32) -> [f32; 3] {
    let luma = 0.299 * rgb[0] + 0.587 * rgb[1] + 0.114 * rgb[2];
    rgb.map(|c| luma + (c - luma) * factor)
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit_float(bits: u64) -> f32 {
    (bits >> 40) as f32 / (1u64 << 24) as f32
}
