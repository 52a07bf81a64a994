use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Font not found: {} ({reason})", .path.display())]
    FontNotFound { path: PathBuf, reason: String },

    #[error("Background generation failed at {width}x{height}: {reason}")]
    GenerationFailure {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
