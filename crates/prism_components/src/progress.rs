//! Progress indicators
//!
//! A ring or bar whose fill follows the progress value through a spring.
//! Two edge-triggered thresholds drive feedback: passing the completion
//! threshold gives a light tap and switches on the glow, reaching the
//! success threshold plays the success haptic once per crossing.

use crate::interpolation::threshold_gate;
use prism_animation::{Spring, SpringConfig};
use prism_core::{clamp_unit, Color, HapticFeedback, HapticSink, ThresholdTrigger};
use prism_theme::{EffectLevel, FromTheme, Theme};
use serde::{Deserialize, Serialize};

/// Progress indicator shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStyle {
    /// Circular ring
    #[default]
    Ring,
    /// Horizontal bar
    Bar,
}

/// Progress configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub style: ProgressStyle,
    /// Stroke width of the ring, or height of the bar
    pub line_width: f32,
    /// Ring diameter, or bar width
    pub size: f32,
    pub progress_color: Color,
    pub track_color: Color,
    pub track_opacity: f32,
    pub success_color: Color,
    pub glow_radius: f32,
    pub completion_threshold: f32,
    pub success_threshold: f32,
    pub spring: SpringConfig,
    pub haptics_enabled: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            style: ProgressStyle::Ring,
            line_width: 8.0,
            size: 80.0,
            progress_color: Color::BLUE,
            track_color: Color::WHITE,
            track_opacity: 0.15,
            success_color: Color::from_hex(0x34C759),
            glow_radius: 10.0,
            completion_threshold: 0.3,
            success_threshold: 0.95,
            spring: SpringConfig::gentle(),
            haptics_enabled: true,
        }
    }
}

impl FromTheme for ProgressConfig {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            progress_color: theme.primary_color(),
            track_color: theme.text_color(),
            success_color: theme.colors().success,
            glow_radius: theme.effects().glow(EffectLevel::Medium),
            haptics_enabled: theme.enable_haptics(),
            ..Self::default()
        }
    }
}

impl ProgressConfig {
    /// Thin horizontal bar
    pub fn bar() -> Self {
        Self {
            style: ProgressStyle::Bar,
            line_width: 6.0,
            size: 240.0,
            ..Self::default()
        }
    }

    /// Small ring for inline use
    pub fn compact_ring() -> Self {
        Self {
            line_width: 4.0,
            size: 32.0,
            glow_radius: 0.0,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: ProgressStyle) -> Self {
        self.style = style;
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn colors(mut self, progress: Color, track: Color) -> Self {
        self.progress_color = progress;
        self.track_color = track;
        self
    }

    pub fn success_color(mut self, color: Color) -> Self {
        self.success_color = color;
        self
    }

    pub fn thresholds(mut self, completion: f32, success: f32) -> Self {
        self.completion_threshold = clamp_unit(completion);
        self.success_threshold = clamp_unit(success);
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Visuals for a (displayed) progress value
    pub fn resolve(&self, progress: f32) -> ProgressAppearance {
        let p = clamp_unit(progress);
        let fill = if p >= clamp_unit(self.success_threshold) {
            self.success_color
        } else {
            self.progress_color
        };
        ProgressAppearance {
            progress: p,
            fill,
            track: self
                .track_color
                .with_alpha(self.track_color.a * self.track_opacity),
            glow_radius: threshold_gate(p, self.completion_threshold, self.glow_radius),
        }
    }
}

/// Resolved progress visuals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressAppearance {
    /// Fraction of the ring or bar to fill
    pub progress: f32,
    pub fill: Color,
    pub track: Color,
    pub glow_radius: f32,
}

/// Animated progress owned by one indicator
#[derive(Clone, Debug)]
pub struct ProgressState {
    config: ProgressConfig,
    target: f32,
    display: Spring,
    completion: ThresholdTrigger,
    success: ThresholdTrigger,
}

impl ProgressState {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            display: Spring::new(config.spring, 0.0),
            completion: ThresholdTrigger::new(config.completion_threshold),
            success: ThresholdTrigger::new(config.success_threshold),
            target: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Latest requested progress
    pub fn progress(&self) -> f32 {
        self.target
    }

    /// Animated progress, clamped to `[0, 1]`
    pub fn displayed(&self) -> f32 {
        clamp_unit(self.display.value())
    }

    pub fn is_settled(&self) -> bool {
        self.display.is_settled()
    }

    /// Set a new progress value (clamped). Feedback fires on rising edges
    /// of the requested value, not of the animation.
    pub fn set_progress(&mut self, progress: f32, haptics: &mut impl HapticSink) {
        self.target = clamp_unit(progress);
        self.display.set_target(self.target);

        let completed = self.completion.update(self.target);
        let succeeded = self.success.update(self.target);
        if !self.config.haptics_enabled {
            return;
        }
        if succeeded {
            tracing::debug!(progress = self.target, "progress reached success");
            haptics.emit(HapticFeedback::Success);
        } else if completed {
            haptics.emit(HapticFeedback::Light);
        }
    }

    /// Advance the spring (call each frame)
    pub fn tick(&mut self, dt: f32) {
        self.display.step(dt);
        tracing::trace!(displayed = self.display.value(), "progress tick");
    }

    /// Jump straight to the target without animating
    pub fn finish(&mut self) {
        self.display.snap_to(self.target);
    }

    pub fn appearance(&self) -> ProgressAppearance {
        self.config.resolve(self.displayed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::RecordingHaptics;

    #[test]
    fn test_progress_clamped() {
        let mut state = ProgressState::new(ProgressConfig::default());
        let mut haptics = RecordingHaptics::new();
        state.set_progress(1.7, &mut haptics);
        assert_eq!(state.progress(), 1.0);
        state.set_progress(-0.2, &mut haptics);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_success_fires_once_per_crossing() {
        let mut state = ProgressState::new(ProgressConfig::default());
        let mut haptics = RecordingHaptics::new();
        for p in [0.5, 0.9, 0.96, 0.97, 1.0, 0.99] {
            state.set_progress(p, &mut haptics);
        }
        assert_eq!(haptics.count(HapticFeedback::Success), 1);
        state.set_progress(0.2, &mut haptics);
        state.set_progress(1.0, &mut haptics);
        assert_eq!(haptics.count(HapticFeedback::Success), 2);
    }

    #[test]
    fn test_completion_tap() {
        let mut state = ProgressState::new(ProgressConfig::default());
        let mut haptics = RecordingHaptics::new();
        state.set_progress(0.1, &mut haptics);
        assert!(haptics.events().is_empty());
        state.set_progress(0.4, &mut haptics);
        state.set_progress(0.6, &mut haptics);
        assert_eq!(haptics.events(), &[HapticFeedback::Light]);
    }

    #[test]
    fn test_display_springs_toward_target() {
        let mut state = ProgressState::new(ProgressConfig::default().haptics(false));
        state.set_progress(0.8, &mut prism_core::NoopHaptics);
        assert_eq!(state.displayed(), 0.0);
        for _ in 0..600 {
            state.tick(1.0 / 60.0);
        }
        assert!((state.displayed() - 0.8).abs() < 0.01);
        assert!(state.is_settled());
    }

    #[test]
    fn test_out_of_range_threshold_agrees_with_feedback() {
        let config = ProgressConfig {
            success_threshold: 1.5,
            ..ProgressConfig::default()
        };
        let mut state = ProgressState::new(config);
        let mut haptics = RecordingHaptics::new();
        state.set_progress(1.0, &mut haptics);
        state.finish();
        assert_eq!(haptics.count(HapticFeedback::Success), 1);
        assert_eq!(state.appearance().fill, state.config().success_color);
    }

    #[test]
    fn test_resolve_switches_to_success_color() {
        let config = ProgressConfig::default();
        assert_eq!(config.resolve(0.5).fill, config.progress_color);
        assert_eq!(config.resolve(0.95).fill, config.success_color);
        assert_eq!(config.resolve(0.1).glow_radius, 0.0);
        assert!(config.resolve(0.5).glow_radius > 0.0);
    }
}
