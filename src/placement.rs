//! Text placement over a canvas.
//!
//! Centering uses floor division, so an odd leftover pixel lands on the
//! bottom/right margin. Text larger than the canvas produces negative
//! coordinates; that is allowed and the text simply clips when drawn.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
}

impl TextMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when the text block is wider or taller than the canvas.
    pub fn overflows(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.width > canvas_width || self.height > canvas_height
    }
}

/// Top-left corner at which text is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether a block of `metrics` drawn here stays fully inside the canvas.
    pub fn fits(&self, metrics: TextMetrics, canvas_width: u32, canvas_height: u32) -> bool {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x >= 0
            && y >= 0
            && x + i64::from(metrics.width) <= i64::from(canvas_width)
            && y + i64::from(metrics.height) <= i64::from(canvas_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    #[default]
    Centered,
    Manual(Placement),
}

pub fn center(canvas_width: u32, canvas_height: u32, metrics: TextMetrics) -> Placement {
    Placement {
        x: centered_offset(canvas_width, metrics.width),
        y: centered_offset(canvas_height, metrics.height),
    }
}

/// Resolves the final draw position. A manual override is returned as-is,
/// without bounds checks.
pub fn resolve(
    mode: PlacementMode,
    canvas_width: u32,
    canvas_height: u32,
    metrics: TextMetrics,
) -> Placement {
    match mode {
        PlacementMode::Manual(placement) => placement,
        PlacementMode::Centered => center(canvas_width, canvas_height, metrics),
    }
}

fn centered_offset(outer: u32, inner: u32) -> i32 {
    let diff = i64::from(outer) - i64::from(inner);
    // Both inputs are u32, so half the difference always fits in i32.
    diff.div_euclid(2) as i32
}
