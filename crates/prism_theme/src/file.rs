//! TOML theme documents
//!
//! ```toml
//! preset = "ocean"          # optional base, defaults to the default theme
//! name = "Harbor"
//! primary_color = "#00b4d8"
//! enable_haptics = false
//!
//! [spacing]
//! m = 18.0
//! ```
//!
//! Token group tables are partial: omitted keys keep their default values.

use crate::error::{Result, ThemeError};
use crate::presets::preset_by_name;
use crate::theme::{Theme, ThemeOverrides};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk theme description: an optional preset base plus overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(flatten)]
    pub overrides: ThemeOverrides,
}

impl ThemeFile {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve the base preset and apply the overrides
    pub fn into_theme(self) -> Result<Theme> {
        let base = match self.preset.as_deref() {
            Some(name) => preset_by_name(name)?,
            None => Theme::default(),
        };
        Ok(self.overrides.apply(base))
    }
}

impl Theme {
    /// Build a theme from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Theme> {
        ThemeFile::parse(source)?.into_theme()
    }

    /// Load a theme from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Theme> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!("loaded theme {:?} from {}", theme.name(), path.display());
        Ok(theme)
    }
}
