//! The theme aggregate
//!
//! A [`Theme`] owns one instance of every token group. The flat accessors
//! (`primary_color`, `corner_radius`, ...) read through to the nested groups,
//! so there is a single source of truth and `with_*` builders can never leave
//! the two views disagreeing.

use crate::tokens::*;
use prism_core::Color;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

/// Light or dark appearance of a theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// A complete, immutable set of design tokens
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    effects: EffectTokens,
    enable_haptics: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            scheme: ColorScheme::Dark,
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            effects: EffectTokens::default(),
            enable_haptics: true,
        }
    }
}

impl Theme {
    /// Assemble a theme from fully specified token groups
    pub fn new(
        name: impl Into<String>,
        scheme: ColorScheme,
        colors: ColorTokens,
        typography: TypographyTokens,
        spacing: SpacingTokens,
        radii: RadiusTokens,
        effects: EffectTokens,
    ) -> Self {
        Self {
            name: name.into(),
            scheme,
            colors,
            typography,
            spacing,
            radii,
            effects,
            enable_haptics: true,
        }
    }

    /// Build a theme from partial overrides on top of [`Theme::default`]
    pub fn from_overrides(overrides: ThemeOverrides) -> Self {
        overrides.apply(Theme::default())
    }

    /// Process-wide default theme, used when no scope binds one
    pub fn default_ref() -> &'static Theme {
        DEFAULT_THEME.get_or_init(Theme::default)
    }

    // ========== Token groups ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn effects(&self) -> &EffectTokens {
        &self.effects
    }

    pub fn enable_haptics(&self) -> bool {
        self.enable_haptics
    }

    // ========== Flat accessors ==========

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn primary_color(&self) -> Color {
        self.colors.primary
    }

    pub fn secondary_color(&self) -> Color {
        self.colors.secondary
    }

    pub fn accent_color(&self) -> Color {
        self.colors.accent
    }

    pub fn background_color(&self) -> Color {
        self.colors.background
    }

    pub fn surface_color(&self) -> Color {
        self.colors.surface
    }

    pub fn text_color(&self) -> Color {
        self.colors.text
    }

    pub fn text_secondary_color(&self) -> Color {
        self.colors.text_secondary
    }

    /// Default component corner radius (the `lg` radius)
    pub fn corner_radius(&self) -> f32 {
        self.radii.radius_lg
    }

    /// Default card/container shadow radius (the `medium` shadow)
    pub fn shadow_radius(&self) -> f32 {
        self.effects.shadow_medium
    }

    /// Default transition length (the `normal` duration)
    pub fn animation_duration_ms(&self) -> u32 {
        self.effects.duration_normal_ms
    }

    // ========== Builders ==========

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_primary_color(self, color: Color) -> Self {
        self.with_color(ColorToken::Primary, color)
    }

    pub fn with_secondary_color(self, color: Color) -> Self {
        self.with_color(ColorToken::Secondary, color)
    }

    pub fn with_accent_color(self, color: Color) -> Self {
        self.with_color(ColorToken::Accent, color)
    }

    pub fn with_background_color(self, color: Color) -> Self {
        self.with_color(ColorToken::Background, color)
    }

    /// Replace a single color role
    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors = self.colors.with(token, color);
        self
    }

    pub fn with_colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.radii.radius_lg = radius;
        self
    }

    pub fn with_effects(mut self, effects: EffectTokens) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.enable_haptics = enabled;
        self
    }
}

/// Partial theme description
///
/// Every field is optional. When `colors` is absent, the flat color fields
/// are layered onto the base palette; when it is present it wins outright
/// and the flat fields are ignored. `corner_radius` follows the same rule
/// with respect to `radii`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub name: Option<String>,
    pub scheme: Option<ColorScheme>,

    pub primary_color: Option<Color>,
    pub secondary_color: Option<Color>,
    pub accent_color: Option<Color>,
    pub background_color: Option<Color>,
    pub surface_color: Option<Color>,
    pub text_color: Option<Color>,
    pub text_secondary_color: Option<Color>,
    pub corner_radius: Option<f32>,
    pub enable_haptics: Option<bool>,

    pub colors: Option<ColorTokens>,
    pub typography: Option<TypographyTokens>,
    pub spacing: Option<SpacingTokens>,
    pub radii: Option<RadiusTokens>,
    pub effects: Option<EffectTokens>,
}

impl ThemeOverrides {
    /// Layer these overrides onto `base`
    pub fn apply(self, base: Theme) -> Theme {
        let colors = match self.colors {
            Some(colors) => colors,
            None => {
                let flat = [
                    (ColorToken::Primary, self.primary_color),
                    (ColorToken::Secondary, self.secondary_color),
                    (ColorToken::Accent, self.accent_color),
                    (ColorToken::Background, self.background_color),
                    (ColorToken::Surface, self.surface_color),
                    (ColorToken::Text, self.text_color),
                    (ColorToken::TextSecondary, self.text_secondary_color),
                ];
                flat.into_iter()
                    .fold(base.colors, |colors, (token, color)| match color {
                        Some(color) => colors.with(token, color),
                        None => colors,
                    })
            }
        };

        let radii = match (self.radii, self.corner_radius) {
            (Some(radii), _) => radii,
            (None, Some(radius)) => RadiusTokens {
                radius_lg: radius,
                ..base.radii
            },
            (None, None) => base.radii,
        };

        Theme {
            name: self.name.unwrap_or(base.name),
            scheme: self.scheme.unwrap_or(base.scheme),
            colors,
            typography: self.typography.unwrap_or(base.typography),
            spacing: self.spacing.unwrap_or(base.spacing),
            radii,
            effects: self.effects.unwrap_or(base.effects),
            enable_haptics: self.enable_haptics.unwrap_or(base.enable_haptics),
        }
    }
}

impl From<&Theme> for ThemeOverrides {
    /// Fully specified overrides that reproduce `theme` exactly
    fn from(theme: &Theme) -> Self {
        Self {
            name: Some(theme.name.clone()),
            scheme: Some(theme.scheme),
            enable_haptics: Some(theme.enable_haptics),
            colors: Some(theme.colors.clone()),
            typography: Some(theme.typography.clone()),
            spacing: Some(theme.spacing.clone()),
            radii: Some(theme.radii.clone()),
            effects: Some(theme.effects.clone()),
            ..Default::default()
        }
    }
}
