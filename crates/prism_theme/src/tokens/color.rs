//! Color tokens for theming

use prism_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,
    Accent,

    // Surface colors
    Background,
    Surface,

    // Text colors
    Text,
    TextSecondary,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,
}

impl ColorToken {
    /// Every role, in declaration order
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 11] = [
            ColorToken::Primary,
            ColorToken::Secondary,
            ColorToken::Accent,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::Text,
            ColorToken::TextSecondary,
            ColorToken::Success,
            ColorToken::Warning,
            ColorToken::Error,
            ColorToken::Info,
        ];
        &TOKENS
    }
}

/// Complete set of semantic color tokens
///
/// Every role always holds a value: partially specified documents fill the
/// missing roles from [`ColorTokens::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Text => self.text,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
        }
    }

    /// Copy with one role replaced
    pub fn with(mut self, token: ColorToken, color: Color) -> Self {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Accent => &mut self.accent,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::Text => &mut self.text,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
        };
        *slot = color;
        self
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            primary: Color::lerp(&from.primary, &to.primary, t),
            secondary: Color::lerp(&from.secondary, &to.secondary, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            background: Color::lerp(&from.background, &to.background, t),
            surface: Color::lerp(&from.surface, &to.surface, t),
            text: Color::lerp(&from.text, &to.text, t),
            text_secondary: Color::lerp(&from.text_secondary, &to.text_secondary, t),
            success: Color::lerp(&from.success, &to.success, t),
            warning: Color::lerp(&from.warning, &to.warning, t),
            error: Color::lerp(&from.error, &to.error, t),
            info: Color::lerp(&from.info, &to.info, t),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: Color::BLUE,
            secondary: Color::from_hex(0xAF52DE),
            accent: Color::from_hex(0x5E5CE6),
            background: Color::from_hex(0x0B0B0F),
            surface: Color::from_hex(0x1C1C22),
            text: Color::WHITE,
            text_secondary: Color::from_hex(0x9A9AA5),
            success: Color::from_hex(0x34C759),
            warning: Color::from_hex(0xFF9500),
            error: Color::from_hex(0xFF3B30),
            info: Color::from_hex(0x5AC8FA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_matches_fields() {
        let colors = ColorTokens::default();
        assert_eq!(colors.get(ColorToken::Primary), colors.primary);
        assert_eq!(colors.get(ColorToken::TextSecondary), colors.text_secondary);
        assert_eq!(colors.get(ColorToken::Info), colors.info);
    }

    #[test]
    fn test_with_replaces_single_role() {
        let base = ColorTokens::default();
        let changed = base.clone().with(ColorToken::Warning, Color::RED);
        for token in ColorToken::all() {
            if *token == ColorToken::Warning {
                assert_eq!(changed.get(*token), Color::RED);
            } else {
                assert_eq!(changed.get(*token), base.get(*token));
            }
        }
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let colors: ColorTokens = serde_json::from_str(r##"{ "accent": "#ff0000" }"##).unwrap();
        assert_eq!(colors.accent, Color::RED);
        assert_eq!(colors.primary, ColorTokens::default().primary);
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = ColorTokens::default();
        let to = from.clone().with(ColorToken::Primary, Color::RED);
        assert_eq!(ColorTokens::lerp(&from, &to, 0.0), from);
        assert_eq!(ColorTokens::lerp(&from, &to, 1.0), to);
    }
}
