use crate::error::LogoError;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text fill colour as written in a config file: a CSS-style name or hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontColor {
    spec: String,
    rgba: Rgba<u8>,
}

impl FontColor {
    pub fn white() -> Self {
        Self {
            spec: "white".to_string(),
            rgba: Rgba([255, 255, 255, 255]),
        }
    }

    pub fn rgba(&self) -> Rgba<u8> {
        self.rgba
    }
}

impl Default for FontColor {
    fn default() -> Self {
        Self::white()
    }
}

impl FromStr for FontColor {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rgba = match trimmed.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => named_color(&trimmed.to_lowercase()),
        }
        .ok_or_else(|| LogoError::Config(format!("Unrecognised font color: {:?}", s)))?;

        Ok(Self {
            spec: trimmed.to_string(),
            rgba,
        })
    }
}

impl TryFrom<String> for FontColor {
    type Error = LogoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontColor> for String {
    fn from(color: FontColor) -> Self {
        color.spec
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

fn named_color(name: &str) -> Option<Rgba<u8>> {
    let rgb = match name {
        "white" => [255, 255, 255],
        "black" => [0, 0, 0],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" => [0, 255, 255],
        "magenta" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        _ => return None,
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let mut out = [255u8; 4];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17; // 0xf -> 0xff
            }
            Some(Rgba(out))
        }
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}
