//! Damped spring physics
//!
//! Springs drive every continuous value a component owns (animated
//! progress, hover scale, magnetic offset). Retargeting keeps the current
//! velocity so interrupted motion stays smooth.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Position and velocity thresholds for considering a spring at rest
const REST_EPSILON: f32 = 0.01;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Build from a perceptual response time (seconds per oscillation) and a
    /// damping fraction (`1.0` = critically damped).
    pub fn from_response(response: f32, damping_fraction: f32) -> Self {
        let response = response.max(0.01);
        let omega = 2.0 * PI / response;
        Self::new(omega * omega, 2.0 * damping_fraction.max(0.0) * omega, 1.0)
    }

    /// Slow, soft settle
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Visible overshoot
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Fast with little overshoot
    pub const fn stiff() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    /// Press and hover feedback
    pub const fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Playful overshoot for celebratory states
    pub const fn bouncy() -> Self {
        Self::new(300.0, 10.0, 1.0)
    }

    /// `damping / (2 * sqrt(stiffness * mass))`
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A single animated scalar following a damped spring
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the rest point. Velocity is preserved.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Add velocity, e.g. from a fling gesture
    pub fn impulse(&mut self, velocity: f32) {
        self.velocity += velocity;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advance the simulation by `dt` seconds (RK4)
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.is_settled() {
            if self.value != self.target || self.velocity != 0.0 {
                tracing::trace!(rest = self.target, "spring settled");
            }
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let accel = |x: f32, v: f32| -> f32 {
            let spring_force = -self.config.stiffness * (x - self.target);
            let damping_force = -self.config.damping * v;
            (spring_force + damping_force) / self.config.mass
        };

        let (x, v) = (self.value, self.velocity);

        let k1_x = v;
        let k1_v = accel(x, v);

        let k2_x = v + 0.5 * dt * k1_v;
        let k2_v = accel(x + 0.5 * dt * k1_x, k2_x);

        let k3_x = v + 0.5 * dt * k2_v;
        let k3_v = accel(x + 0.5 * dt * k2_x, k3_x);

        let k4_x = v + dt * k3_v;
        let k4_v = accel(x + dt * k3_x, k4_x);

        self.value = x + dt / 6.0 * (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x);
        self.velocity = v + dt / 6.0 * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_reaches_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 240);
        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_preserves_velocity() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 10);
        let mid_velocity = spring.velocity();
        assert!(mid_velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), mid_velocity);

        run(&mut spring, 240);
        assert!((spring.value() - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_wobbly_overshoots() {
        let mut spring = Spring::new(SpringConfig::wobbly(), 0.0);
        spring.set_target(1.0);
        let mut peak: f32 = 0.0;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0);
    }

    #[test]
    fn test_from_response_critical_damping() {
        let config = SpringConfig::from_response(0.5, 1.0);
        assert!((config.damping_ratio() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_impulse_and_snap() {
        let mut spring = Spring::new(SpringConfig::snappy(), 1.0);
        spring.impulse(5.0);
        assert!(!spring.is_settled());
        spring.snap_to(2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 2.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(10.0);
        spring.step(0.0);
        assert_eq!(spring.value(), 0.0);
    }
}
