use crate::color::FontColor;
use crate::error::LogoError;
use crate::placement::{Placement, PlacementMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "iridescent-logo";
const CONFIG_FILE_NAME: &str = "config.json";

/// Everything one logo render needs. Missing JSON fields fall back to the
/// square logo preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoConfig {
    pub width: u32,
    pub height: u32,
    pub enhance_vibrancy: bool,
    pub text: String,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub font_color: FontColor,
    pub output_path: PathBuf,
    pub dpi: Option<u32>,
    pub manual_position: Option<Placement>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self::square_logo()
    }
}

impl LogoConfig {
    /// 1080x1080 logo with centered text.
    pub fn square_logo() -> Self {
        Self {
            width: 1080,
            height: 1080,
            enhance_vibrancy: true,
            text: "looSTAAR".to_string(),
            font_path: PathBuf::from("/Library/Fonts/Arial Bold.ttf"),
            font_size: 160.0,
            font_color: FontColor::white(),
            output_path: PathBuf::from("logo.png"),
            dpi: Some(600),
            manual_position: None,
        }
    }

    /// Wide, short banner. Text is placed by hand rather than centered.
    pub fn banner() -> Self {
        Self {
            width: 1600,
            height: 240,
            font_size: 120.0,
            output_path: PathBuf::from("banner.png"),
            manual_position: Some(Placement::new(620, 70)),
            ..Self::square_logo()
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogoError> {
        let path = path.as_ref();
        log::info!("📄 Loading config from {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| LogoError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: LogoConfig = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LogoError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json).map_err(|source| LogoError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn placement_mode(&self) -> PlacementMode {
        match self.manual_position {
            Some(placement) => PlacementMode::Manual(placement),
            None => PlacementMode::Centered,
        }
    }

    pub fn validate(&self) -> Result<(), LogoError> {
        if self.text.trim().is_empty() {
            return Err(LogoError::Config("Text must not be empty".to_string()));
        }

        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(LogoError::Config(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_square_logo() {
        let config = LogoConfig::default();
        assert_eq!((config.width, config.height), (1080, 1080));
        assert_eq!(config.placement_mode(), PlacementMode::Centered);
        assert_eq!(config.dpi, Some(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_banner_uses_manual_position() {
        let config = LogoConfig::banner();
        assert_eq!((config.width, config.height), (1600, 240));
        assert_eq!(
            config.placement_mode(),
            PlacementMode::Manual(Placement::new(620, 70))
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(LogoConfig::banner()).unwrap();
        assert_eq!(json["enhanceVibrancy"], true);
        assert_eq!(json["fontSize"], 120.0);
        assert_eq!(json["fontColor"], "white");
        assert_eq!(json["manualPosition"]["x"], 620);
        assert_eq!(json["manualPosition"]["y"], 70);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: LogoConfig = serde_json::from_str(
            r##"{ "text": "Hello", "width": 400, "height": 200, "fontColor": "#ff0000" }"##,
        )
        .unwrap();

        assert_eq!(config.text, "Hello");
        assert_eq!((config.width, config.height), (400, 200));
        assert_eq!(config.font_color.rgba(), Rgba([255, 0, 0, 255]));
        assert_eq!(config.font_size, 160.0);
        assert!(config.manual_position.is_none());
    }

    #[test]
    fn test_bad_color_fails_to_parse() {
        let result = serde_json::from_str::<LogoConfig>(r#"{ "fontColor": "sparkly" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = LogoConfig::banner();
        config.text = "Banner".to_string();
        config.dpi = None;
        config.save(&path).unwrap();

        assert_eq!(LogoConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = LogoConfig::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(LogoError::Config(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(LogoConfig::load(&path), Err(LogoError::Json(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LogoConfig::default();
        config.text = "   ".to_string();
        assert!(matches!(config.validate(), Err(LogoError::Config(_))));

        let mut config = LogoConfig::default();
        config.font_size = -4.0;
        assert!(matches!(config.validate(), Err(LogoError::Config(_))));
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        let path = LogoConfig::default_path();
        assert!(path.ends_with("iridescent-logo/config.json"));
    }
}
