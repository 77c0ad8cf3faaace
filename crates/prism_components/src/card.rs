//! Card configuration
//!
//! Cards are rounded, optionally translucent containers that lift on hover
//! and sink slightly while pressed.

use crate::interpolation::Interpolation;
use prism_core::{clamp_unit, Color};
use prism_theme::{EffectLevel, FromTheme, SpacingToken, Theme};
use serde::{Deserialize, Serialize};

/// Card configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub corner_radius: f32,
    pub padding: f32,
    /// Background blur behind the card
    pub blur_radius: f32,
    pub background: Color,
    pub background_opacity: f32,
    /// Shadow radius at rest and fully hovered
    pub shadow_radius: Interpolation,
    /// Scale at rest and fully hovered
    pub hover_scale: Interpolation,
    pub pressed_scale: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub border_opacity: f32,
    pub haptics_enabled: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            padding: 16.0,
            blur_radius: 16.0,
            background: Color::from_hex(0x1C1C22),
            background_opacity: 0.8,
            shadow_radius: Interpolation::new(8.0, 16.0),
            hover_scale: Interpolation::new(1.0, 1.02),
            pressed_scale: 0.98,
            border_width: 1.0,
            border_color: Color::WHITE,
            border_opacity: 0.1,
            haptics_enabled: true,
        }
    }
}

impl FromTheme for CardConfig {
    fn from_theme(theme: &Theme) -> Self {
        let effects = theme.effects();
        Self {
            corner_radius: theme.corner_radius(),
            padding: theme.spacing().get(SpacingToken::M),
            blur_radius: effects.blur(EffectLevel::Medium),
            background: theme.surface_color(),
            shadow_radius: Interpolation::new(
                effects.shadow_radius(EffectLevel::Medium),
                effects.shadow_radius(EffectLevel::Large),
            ),
            border_color: theme.text_color(),
            haptics_enabled: theme.enable_haptics(),
            ..Self::default()
        }
    }
}

impl CardConfig {
    /// Tight padding, small radius, no hover lift
    pub fn compact() -> Self {
        Self {
            corner_radius: 10.0,
            padding: 8.0,
            shadow_radius: Interpolation::new(4.0, 6.0),
            hover_scale: Interpolation::constant(1.0),
            ..Self::default()
        }
    }

    /// Large radius, deep shadow, pronounced hover
    pub fn prominent() -> Self {
        Self {
            corner_radius: 24.0,
            padding: 24.0,
            shadow_radius: Interpolation::new(16.0, 28.0),
            hover_scale: Interpolation::new(1.0, 1.05),
            border_opacity: 0.2,
            ..Self::default()
        }
    }

    /// Flat and quiet
    pub fn subtle() -> Self {
        Self {
            background_opacity: 0.4,
            shadow_radius: Interpolation::constant(0.0),
            hover_scale: Interpolation::new(1.0, 1.01),
            border_opacity: 0.05,
            ..Self::default()
        }
    }

    /// Mostly transparent over a heavy blur
    pub fn glass() -> Self {
        Self {
            blur_radius: 30.0,
            background_opacity: 0.25,
            border_opacity: 0.3,
            ..Self::default()
        }
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn background(mut self, color: Color, opacity: f32) -> Self {
        self.background = color;
        self.background_opacity = clamp_unit(opacity);
        self
    }

    pub fn shadow_radius(mut self, rest: f32, hovered: f32) -> Self {
        self.shadow_radius = Interpolation::new(rest, hovered);
        self
    }

    pub fn hover_scale(mut self, scale: f32) -> Self {
        self.hover_scale = Interpolation::new(1.0, scale);
        self
    }

    pub fn pressed_scale(mut self, scale: f32) -> Self {
        self.pressed_scale = scale;
        self
    }

    pub fn border(mut self, width: f32, color: Color, opacity: f32) -> Self {
        self.border_width = width;
        self.border_color = color;
        self.border_opacity = clamp_unit(opacity);
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Resolve visuals for hover progress and press progress (both `[0, 1]`)
    pub fn appearance(&self, hover: f32, press: f32) -> CardAppearance {
        let press_scale = Interpolation::new(1.0, self.pressed_scale).at(press);
        CardAppearance {
            scale: self.hover_scale.at(hover) * press_scale,
            shadow_radius: self.shadow_radius.at(hover),
            background: self.background.with_alpha(self.background_opacity),
            border: self.border_color.with_alpha(self.border_opacity),
            corner_radius: self.corner_radius,
        }
    }
}

/// Resolved card visuals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardAppearance {
    pub scale: f32,
    pub shadow_radius: f32,
    pub background: Color,
    pub border: Color,
    pub corner_radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_theme::ThemePreset;

    #[test]
    fn test_default_matches_default_theme_radius() {
        assert_eq!(CardConfig::default().corner_radius, Theme::default().corner_radius());
    }

    #[test]
    fn test_from_theme() {
        let theme = ThemePreset::Monochrome.theme();
        let card = CardConfig::from_theme(&theme);
        assert_eq!(card.corner_radius, 8.0);
        assert_eq!(card.background, theme.surface_color());
        assert_eq!(card.padding, 16.0);
    }

    #[test]
    fn test_modifiers_return_new_values() {
        let base = CardConfig::default();
        let tweaked = base.clone().corner_radius(4.0).hover_scale(1.1);
        assert_eq!(base.corner_radius, 16.0);
        assert_eq!(tweaked.corner_radius, 4.0);
        assert_eq!(tweaked.hover_scale.active, 1.1);
    }

    #[test]
    fn test_appearance_hover_and_press() {
        let card = CardConfig::default();
        let rest = card.appearance(0.0, 0.0);
        let hovered = card.appearance(1.0, 0.0);
        let pressed = card.appearance(1.0, 1.0);
        assert_eq!(rest.scale, 1.0);
        assert_eq!(hovered.scale, 1.02);
        assert!(pressed.scale < hovered.scale);
        assert!(hovered.shadow_radius > rest.shadow_radius);
    }

    #[test]
    fn test_compact_does_not_lift() {
        let card = CardConfig::compact();
        assert_eq!(card.appearance(1.0, 0.0).scale, 1.0);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let card: CardConfig =
            serde_json::from_str(r##"{"corner_radius": 4.0, "border_color": "#ff0000"}"##)
                .unwrap();
        assert_eq!(card.corner_radius, 4.0);
        assert_eq!(card.border_color, Color::RED);
        assert_eq!(card.padding, CardConfig::default().padding);
        assert_eq!(card.hover_scale, Interpolation::new(1.0, 1.02));
    }

    #[test]
    fn test_background_opacity_clamped() {
        let card = CardConfig::default().background(Color::RED, 3.0);
        assert_eq!(card.background_opacity, 1.0);
    }
}
