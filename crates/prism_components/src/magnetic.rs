//! Magnetic pull toward a nearby pointer
//!
//! Inside `radius` a view is drawn toward the pointer. The pull is
//! strongest near the centre and fades linearly to zero at the radius.

use prism_animation::{Spring, SpringConfig};
use prism_core::{clamp_unit, HapticFeedback, HapticSink};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticPullConfig {
    /// Activation radius in points
    pub radius: f32,
    /// Fraction of the pointer offset applied at the centre
    pub strength: f32,
    /// Cap on the resulting offset length
    pub max_offset: f32,
    pub spring: SpringConfig,
    pub haptics_enabled: bool,
}

impl Default for MagneticPullConfig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            strength: 0.3,
            max_offset: 12.0,
            spring: SpringConfig::snappy(),
            haptics_enabled: true,
        }
    }
}

impl MagneticPullConfig {
    pub fn subtle() -> Self {
        Self {
            radius: 60.0,
            strength: 0.15,
            max_offset: 6.0,
            ..Self::default()
        }
    }

    pub fn strong() -> Self {
        Self {
            radius: 120.0,
            strength: 0.5,
            max_offset: 24.0,
            spring: SpringConfig::wobbly(),
            ..Self::default()
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = clamp_unit(strength);
        self
    }

    pub fn max_offset(mut self, offset: f32) -> Self {
        self.max_offset = offset.max(0.0);
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Offset toward a pointer at `(dx, dy)` from the view centre
    pub fn offset(&self, dx: f32, dy: f32) -> (f32, f32) {
        let distance = (dx * dx + dy * dy).sqrt();
        if !distance.is_finite() || distance == 0.0 || distance >= self.radius {
            return (0.0, 0.0);
        }
        let falloff = self.strength * (1.0 - distance / self.radius);
        let (mut x, mut y) = (dx * falloff, dy * falloff);
        let length = distance * falloff;
        if length > self.max_offset {
            let k = self.max_offset / length;
            x *= k;
            y *= k;
        }
        (x, y)
    }

    pub fn in_range(&self, dx: f32, dy: f32) -> bool {
        (dx * dx + dy * dy).sqrt() < self.radius
    }
}

/// Spring-smoothed magnetic offset of one view
#[derive(Clone, Debug)]
pub struct MagneticState {
    config: MagneticPullConfig,
    x: Spring,
    y: Spring,
    engaged: bool,
}

impl MagneticState {
    pub fn new(config: MagneticPullConfig) -> Self {
        Self {
            x: Spring::new(config.spring, 0.0),
            y: Spring::new(config.spring, 0.0),
            config,
            engaged: false,
        }
    }

    /// Pointer moved to `(dx, dy)` from the view centre. A light haptic is
    /// emitted when the pointer enters the radius.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32, haptics: &mut impl HapticSink) {
        let inside = self.config.in_range(dx, dy);
        if inside && !self.engaged && self.config.haptics_enabled {
            haptics.emit(HapticFeedback::Light);
        }
        self.engaged = inside;
        let (x, y) = self.config.offset(dx, dy);
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn pointer_left(&mut self) {
        self.engaged = false;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::RecordingHaptics;

    #[test]
    fn test_offset_zero_outside_and_at_centre() {
        let config = MagneticPullConfig::default();
        assert_eq!(config.offset(0.0, 0.0), (0.0, 0.0));
        assert_eq!(config.offset(80.0, 0.0), (0.0, 0.0));
        assert_eq!(config.offset(100.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_offset_falloff() {
        let config = MagneticPullConfig::default();
        // strength 0.3 * (1 - 20 / 80) = 0.225
        let (x, y) = config.offset(20.0, 0.0);
        assert!((x - 4.5).abs() < 1e-5);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_offset_capped() {
        let config = MagneticPullConfig::default().strength(1.0).max_offset(5.0);
        let (x, y) = config.offset(30.0, 40.0);
        assert!(((x * x + y * y).sqrt() - 5.0).abs() < 1e-4);
        assert!(x > 0.0 && y > 0.0);
    }

    #[test]
    fn test_state_haptic_on_entry_only() {
        let mut state = MagneticState::new(MagneticPullConfig::default());
        let mut haptics = RecordingHaptics::new();
        state.pointer_moved(200.0, 0.0, &mut haptics);
        state.pointer_moved(50.0, 0.0, &mut haptics);
        state.pointer_moved(30.0, 0.0, &mut haptics);
        assert_eq!(haptics.count(HapticFeedback::Light), 1);
        assert!(state.is_engaged());

        for _ in 0..120 {
            state.tick(1.0 / 60.0);
        }
        assert!(state.offset().0 > 0.0);

        state.pointer_left();
        for _ in 0..300 {
            state.tick(1.0 / 60.0);
        }
        assert!(state.offset().0.abs() < 0.01);
    }
}
