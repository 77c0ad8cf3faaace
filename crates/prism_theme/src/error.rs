//! Theme resolution errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or loading themes
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Preset name outside the built-in catalog (and any registered themes)
    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme document: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
