//! Badge configuration

use prism_core::{clamp_unit, Color};
use prism_theme::{FontSizeToken, FromTheme, SpacingToken, Theme, RADIUS_FULL};
use serde::{Deserialize, Serialize};

/// Semantic role of a badge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub kind: BadgeKind,
    /// Text and dot color
    pub color: Color,
    /// Fill opacity of `color` behind the label
    pub background_opacity: f32,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub font_size: f32,
    /// Draws a pulsing dot before the label
    pub pulse: bool,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self::for_kind(BadgeKind::Neutral, Theme::default_ref())
    }
}

impl FromTheme for BadgeConfig {
    fn from_theme(theme: &Theme) -> Self {
        Self::for_kind(BadgeKind::Neutral, theme)
    }
}

impl BadgeConfig {
    pub fn for_kind(kind: BadgeKind, theme: &Theme) -> Self {
        let colors = theme.colors();
        let color = match kind {
            BadgeKind::Neutral => colors.text_secondary,
            BadgeKind::Info => colors.info,
            BadgeKind::Success => colors.success,
            BadgeKind::Warning => colors.warning,
            BadgeKind::Error => colors.error,
        };
        Self {
            kind,
            color,
            background_opacity: 0.15,
            corner_radius: theme.radii().radius_sm,
            horizontal_padding: theme.spacing().get(SpacingToken::Xs),
            vertical_padding: theme.spacing().get(SpacingToken::Xxs),
            font_size: theme.typography().size(FontSizeToken::S),
            pulse: false,
        }
    }

    pub fn info(theme: &Theme) -> Self {
        Self::for_kind(BadgeKind::Info, theme)
    }

    pub fn success(theme: &Theme) -> Self {
        Self::for_kind(BadgeKind::Success, theme)
    }

    pub fn warning(theme: &Theme) -> Self {
        Self::for_kind(BadgeKind::Warning, theme)
    }

    pub fn error(theme: &Theme) -> Self {
        Self::for_kind(BadgeKind::Error, theme)
    }

    /// Smaller type and tighter padding
    pub fn compact(mut self) -> Self {
        self.horizontal_padding /= 2.0;
        self.vertical_padding /= 2.0;
        self.font_size = (self.font_size - 2.0).max(9.0);
        self
    }

    /// Capsule shape
    pub fn pill(mut self) -> Self {
        self.corner_radius = RADIUS_FULL;
        self
    }

    pub fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn background_opacity(mut self, opacity: f32) -> Self {
        self.background_opacity = clamp_unit(opacity);
        self
    }

    /// Resolved fill color
    pub fn background(&self) -> Color {
        self.color.with_alpha(self.color.a * self.background_opacity)
    }
}
