//! Probability-driven layout adaptation
//!
//! A view that is "likely to be needed next" is drawn more prominently:
//! brighter, slightly larger, lifted, with a deeper shadow. Glow only
//! switches on past `probability_threshold`.

use crate::error::{check_range, Result};
use crate::interpolation::{threshold_gate, ColorBand, Interpolation};
use prism_core::{clamp_unit, Color, HapticFeedback, HapticSink, ThresholdTrigger};
use prism_theme::{EffectLevel, FromTheme, Theme};
use serde::{Deserialize, Serialize};

/// Tunables for probability-driven emphasis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveLayoutConfig {
    pub opacity: Interpolation,
    pub scale: Interpolation,
    pub shadow_radius: Interpolation,
    /// Upward offset in points
    pub lift: Interpolation,
    pub probability_threshold: f32,
    pub glow_radius: f32,
    pub inactive_color: Color,
    pub active_color: Color,
    pub low_cutoff: f32,
    pub high_cutoff: f32,
    pub haptics_enabled: bool,
}

impl Default for AdaptiveLayoutConfig {
    fn default() -> Self {
        Self {
            opacity: Interpolation::new(0.6, 1.0),
            scale: Interpolation::new(0.97, 1.03),
            shadow_radius: Interpolation::new(2.0, 16.0),
            lift: Interpolation::new(0.0, 4.0),
            probability_threshold: 0.7,
            glow_radius: 20.0,
            inactive_color: Color::from_hex(0x1C1C22),
            active_color: Color::BLUE,
            low_cutoff: 0.3,
            high_cutoff: 0.7,
            haptics_enabled: true,
        }
    }
}

impl FromTheme for AdaptiveLayoutConfig {
    fn from_theme(theme: &Theme) -> Self {
        let effects = theme.effects();
        Self {
            shadow_radius: Interpolation::new(
                effects.shadow_radius(EffectLevel::Small) / 2.0,
                effects.shadow_radius(EffectLevel::Large),
            ),
            glow_radius: effects.glow(EffectLevel::Large),
            inactive_color: theme.surface_color(),
            active_color: theme.primary_color(),
            haptics_enabled: theme.enable_haptics(),
            ..Self::default()
        }
    }
}

impl AdaptiveLayoutConfig {
    /// Barely-there emphasis for dense lists
    pub fn subtle() -> Self {
        Self {
            opacity: Interpolation::new(0.85, 1.0),
            scale: Interpolation::new(1.0, 1.01),
            shadow_radius: Interpolation::new(0.0, 6.0),
            lift: Interpolation::new(0.0, 1.0),
            glow_radius: 0.0,
            ..Self::default()
        }
    }

    /// Strong emphasis for a single predicted action
    pub fn dramatic() -> Self {
        Self {
            opacity: Interpolation::new(0.4, 1.0),
            scale: Interpolation::new(0.92, 1.08),
            shadow_radius: Interpolation::new(0.0, 28.0),
            lift: Interpolation::new(0.0, 10.0),
            probability_threshold: 0.5,
            glow_radius: 32.0,
            ..Self::default()
        }
    }

    pub fn opacity(mut self, base: f32, active: f32) -> Self {
        self.opacity = Interpolation::new(base, active);
        self
    }

    pub fn scale(mut self, base: f32, active: f32) -> Self {
        self.scale = Interpolation::new(base, active);
        self
    }

    pub fn shadow_radius(mut self, base: f32, active: f32) -> Self {
        self.shadow_radius = Interpolation::new(base, active);
        self
    }

    pub fn lift(mut self, base: f32, active: f32) -> Self {
        self.lift = Interpolation::new(base, active);
        self
    }

    pub fn probability_threshold(mut self, threshold: f32) -> Self {
        self.probability_threshold = clamp_unit(threshold);
        self
    }

    pub fn glow_radius(mut self, radius: f32) -> Self {
        self.glow_radius = radius;
        self
    }

    pub fn colors(mut self, inactive: Color, active: Color) -> Self {
        self.inactive_color = inactive;
        self.active_color = active;
        self
    }

    /// Set the cross-fade band. Fails when `low > high`.
    pub fn color_cutoffs(mut self, low: f32, high: f32) -> Result<Self> {
        check_range(low, high)?;
        self.low_cutoff = clamp_unit(low);
        self.high_cutoff = clamp_unit(high);
        Ok(self)
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    pub fn color_band(&self) -> ColorBand {
        ColorBand::new(
            self.inactive_color,
            self.active_color,
            self.low_cutoff,
            self.high_cutoff,
        )
    }

    /// Visual parameters for `probability`
    pub fn resolve(&self, probability: f32) -> AdaptiveAppearance {
        let p = clamp_unit(probability);
        let threshold = clamp_unit(self.probability_threshold);
        AdaptiveAppearance {
            probability: p,
            opacity: self.opacity.at(p),
            scale: self.scale.at(p),
            shadow_radius: self.shadow_radius.at(p),
            lift: self.lift.at(p),
            glow_radius: threshold_gate(p, threshold, self.glow_radius),
            tint: self.color_band().resolve(p),
            emphasized: p >= threshold,
        }
    }
}

/// Resolved output of [`AdaptiveLayoutConfig::resolve`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveAppearance {
    pub probability: f32,
    pub opacity: f32,
    pub scale: f32,
    pub shadow_radius: f32,
    pub lift: f32,
    pub glow_radius: f32,
    pub tint: Color,
    pub emphasized: bool,
}

/// Per-view adaptation state
///
/// Tracks the last probability and fires a single medium haptic when the
/// view becomes emphasized.
#[derive(Clone, Debug)]
pub struct AdaptiveState {
    config: AdaptiveLayoutConfig,
    probability: f32,
    emphasis: ThresholdTrigger,
}

impl AdaptiveState {
    pub fn new(config: AdaptiveLayoutConfig) -> Self {
        let emphasis = ThresholdTrigger::new(config.probability_threshold);
        Self {
            config,
            probability: 0.0,
            emphasis,
        }
    }

    pub fn config(&self) -> &AdaptiveLayoutConfig {
        &self.config
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }

    pub fn update(&mut self, probability: f32, haptics: &mut impl HapticSink) -> AdaptiveAppearance {
        self.probability = clamp_unit(probability);
        if self.emphasis.update(self.probability) && self.config.haptics_enabled {
            haptics.emit(HapticFeedback::Medium);
        }
        tracing::trace!(probability = self.probability, "adaptive layout updated");
        self.appearance()
    }

    pub fn appearance(&self) -> AdaptiveAppearance {
        self.config.resolve(self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::RecordingHaptics;

    #[test]
    fn test_resolve_endpoints() {
        let config = AdaptiveLayoutConfig::default();
        let low = config.resolve(0.0);
        let high = config.resolve(1.0);
        assert_eq!(low.opacity, 0.6);
        assert_eq!(high.opacity, 1.0);
        assert_eq!(low.glow_radius, 0.0);
        assert_eq!(high.glow_radius, config.glow_radius);
        assert_eq!(low.tint, config.inactive_color);
        assert_eq!(high.tint, config.active_color);
        assert!(!low.emphasized);
        assert!(high.emphasized);
    }

    #[test]
    fn test_out_of_domain_probability_is_clamped() {
        let config = AdaptiveLayoutConfig::default();
        assert_eq!(config.resolve(-3.0), config.resolve(0.0));
        assert_eq!(config.resolve(42.0), config.resolve(1.0));
    }

    #[test]
    fn test_glow_gated_below_threshold() {
        let config = AdaptiveLayoutConfig::default().probability_threshold(0.8);
        assert_eq!(config.resolve(0.79).glow_radius, 0.0);
        assert!(config.resolve(0.8).glow_radius > 0.0);
    }

    #[test]
    fn test_out_of_range_threshold_is_clamped() {
        let config = AdaptiveLayoutConfig {
            probability_threshold: 1.5,
            ..AdaptiveLayoutConfig::default()
        };
        let mut haptics = RecordingHaptics::new();
        let mut state = AdaptiveState::new(config);
        let appearance = state.update(1.0, &mut haptics);
        assert!(appearance.emphasized);
        assert_eq!(appearance.glow_radius, state.config().glow_radius);
        assert_eq!(haptics.count(HapticFeedback::Medium), 1);
    }

    #[test]
    fn test_color_cutoffs_validate_order() {
        assert!(AdaptiveLayoutConfig::default().color_cutoffs(0.2, 0.9).is_ok());
        assert_eq!(
            AdaptiveLayoutConfig::default().color_cutoffs(0.9, 0.2),
            Err(crate::ConfigError::InvalidRange { min: 0.9, max: 0.2 })
        );
    }

    #[test]
    fn test_state_emphasis_haptic_is_edge_triggered() {
        let mut haptics = RecordingHaptics::new();
        let mut state = AdaptiveState::new(AdaptiveLayoutConfig::default());
        state.update(0.5, &mut haptics);
        state.update(0.75, &mut haptics);
        state.update(0.9, &mut haptics);
        assert_eq!(haptics.count(HapticFeedback::Medium), 1);
        state.update(0.1, &mut haptics);
        state.update(0.8, &mut haptics);
        assert_eq!(haptics.count(HapticFeedback::Medium), 2);
    }

    #[test]
    fn test_state_respects_disabled_haptics() {
        let mut haptics = RecordingHaptics::new();
        let mut state = AdaptiveState::new(AdaptiveLayoutConfig::default().haptics(false));
        state.update(1.0, &mut haptics);
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn test_from_theme_seeds_colors() {
        let theme = prism_theme::ThemePreset::Forest.theme();
        let config = AdaptiveLayoutConfig::from_theme(&theme);
        assert_eq!(config.active_color, theme.primary_color());
        assert_eq!(config.inactive_color, theme.surface_color());
    }
}
