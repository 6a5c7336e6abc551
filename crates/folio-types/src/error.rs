//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("store error: {0}")]
    Store(String),

    #[error("locale error: {0}")]
    Locale(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("route error: {0}")]
    Route(String),

    #[error("post error: {0}")]
    Post(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
