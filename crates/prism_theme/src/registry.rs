//! Named theme lookup
//!
//! A [`ThemeRegistry`] starts with the built-in presets and lets an app add
//! its own named themes (for example ones loaded from files). Names are
//! matched case-insensitively.

use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::theme::Theme;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in preset under its id
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for preset in ThemePreset::all() {
            registry.register(preset.id(), preset.theme());
        }
        registry
    }

    /// Add or replace a named theme. Returns the theme it replaced, if any.
    pub fn register(&mut self, name: &str, theme: Theme) -> Option<Theme> {
        tracing::debug!("registering theme {:?}", name);
        self.themes.insert(key(name), theme)
    }

    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(&key(name))
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&key(name))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Color;

    #[test]
    fn test_with_presets_contains_catalog() {
        let registry = ThemeRegistry::with_presets();
        assert_eq!(registry.len(), ThemePreset::all().len());
        assert!(registry.contains("Neon"));
        assert_eq!(registry.get("ocean").unwrap().name(), "Ocean");
    }

    #[test]
    fn test_register_custom_and_replace() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        let brand = Theme::default().with_name("Brand").with_primary_color(Color::RED);
        assert!(registry.register("Brand", brand.clone()).is_none());
        assert_eq!(registry.get("brand").unwrap(), &brand);
        assert!(registry.register("BRAND", Theme::default()).is_some());
        assert_eq!(registry.names(), vec!["brand"]);
    }

    #[test]
    fn test_missing_name_is_error() {
        let registry = ThemeRegistry::with_presets();
        assert!(matches!(
            registry.get("vaporwave"),
            Err(ThemeError::UnknownPreset(name)) if name == "vaporwave"
        ));
    }
}
