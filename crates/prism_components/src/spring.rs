//! Velocity-aware spring modifier
//!
//! While a view is being dragged it stretches in proportion to pointer
//! speed. On release the stretch springs back to rest.

use prism_animation::{Spring, SpringConfig};
use prism_core::clamp_unit;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringModifierConfig {
    /// Seconds per oscillation
    pub response: f32,
    /// `1.0` is critically damped
    pub damping_fraction: f32,
    /// Stretch per point/second of pointer speed
    pub velocity_scale: f32,
    /// Upper bound on stretch above `1.0`
    pub max_stretch: f32,
    pub press_scale: f32,
}

impl Default for SpringModifierConfig {
    fn default() -> Self {
        Self {
            response: 0.35,
            damping_fraction: 0.7,
            velocity_scale: 0.0001,
            max_stretch: 0.15,
            press_scale: 0.95,
        }
    }
}

impl SpringModifierConfig {
    pub fn snappy() -> Self {
        Self {
            response: 0.2,
            damping_fraction: 0.85,
            max_stretch: 0.08,
            ..Self::default()
        }
    }

    pub fn bouncy() -> Self {
        Self {
            response: 0.5,
            damping_fraction: 0.45,
            velocity_scale: 0.0002,
            max_stretch: 0.25,
            ..Self::default()
        }
    }

    pub fn smooth() -> Self {
        Self {
            response: 0.45,
            damping_fraction: 1.0,
            max_stretch: 0.1,
            press_scale: 0.98,
            ..Self::default()
        }
    }

    pub fn response(mut self, response: f32, damping_fraction: f32) -> Self {
        self.response = response;
        self.damping_fraction = damping_fraction;
        self
    }

    pub fn velocity_scale(mut self, scale: f32) -> Self {
        self.velocity_scale = scale.max(0.0);
        self
    }

    pub fn max_stretch(mut self, stretch: f32) -> Self {
        self.max_stretch = stretch.max(0.0);
        self
    }

    pub fn press_scale(mut self, scale: f32) -> Self {
        self.press_scale = scale;
        self
    }

    /// Scale factor for a pointer velocity: `1 + min(|v| * scale, max)`
    pub fn stretch(&self, velocity: f32) -> f32 {
        if velocity.is_nan() {
            return 1.0;
        }
        1.0 + (velocity.abs() * self.velocity_scale).min(self.max_stretch)
    }

    pub fn spring(&self) -> SpringConfig {
        SpringConfig::from_response(self.response, self.damping_fraction)
    }
}

/// Animated stretch of one dragged view
#[derive(Clone, Debug)]
pub struct VelocityScale {
    config: SpringModifierConfig,
    scale: Spring,
    pressed: bool,
}

impl VelocityScale {
    pub fn new(config: SpringModifierConfig) -> Self {
        Self {
            scale: Spring::new(config.spring(), 1.0),
            config,
            pressed: false,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        let rest = if pressed { self.config.press_scale } else { 1.0 };
        self.scale.set_target(rest);
    }

    /// Follow the current pointer velocity while dragging
    pub fn track(&mut self, velocity: f32) {
        self.scale.snap_to(self.config.stretch(velocity));
    }

    /// Let go with the last pointer velocity; the stretch springs back
    pub fn release(&mut self, velocity: f32) {
        self.pressed = false;
        self.scale.set_target(1.0);
        let fling = clamp_unit(velocity.abs() * self.config.velocity_scale);
        self.scale.impulse(-fling);
    }

    pub fn tick(&mut self, dt: f32) {
        self.scale.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        !self.pressed && self.scale.is_settled()
    }
}
