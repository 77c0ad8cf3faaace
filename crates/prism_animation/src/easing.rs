//! Easing curves for timed transitions

use prism_core::clamp_unit;
use serde::{Deserialize, Serialize};

/// Timing curve mapping linear progress to eased progress
///
/// The named curves use the CSS keyword control points so durations from
/// the effect tokens read the same on every host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Quick start with a long settle, used for hover and press feedback
    EaseOutCubic,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points of the equivalent cubic bezier
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match *self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::EaseOutCubic => (0.33, 1.0, 0.68, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        }
    }

    /// Apply the curve to progress `t`, clamped to `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        match *self {
            Easing::Linear => t,
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                cubic_bezier_ease(t, x1, y1, x2, y2)
            }
        }
    }

    /// Eased value between `from` and `to`
    pub fn sample(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}

/// One axis of a cubic bezier anchored at `(0, 0)` and `(1, 1)`
///
/// Expanding `3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3` gives the polynomial
/// `a s^3 + b s^2 + c s`, kept in Horner form for evaluation.
#[derive(Clone, Copy)]
struct BezierAxis {
    a: f64,
    b: f64,
    c: f64,
}

impl BezierAxis {
    fn new(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (p1 as f64, p2 as f64);
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn at(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    /// d/ds of [`BezierAxis::at`]
    fn derivative(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Curve parameter `s` with `at(s) == x`, for `x` in `(0, 1)`
    fn solve(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton converges in a handful of steps on well-behaved curves
        let mut s = x;
        for _ in 0..8 {
            let err = self.at(s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let d = self.derivative(s);
            if d.abs() < EPSILON {
                break;
            }
            s -= err / d;
        }

        // Flat tangent: x(s) is monotonic on [0, 1], so bisect
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..24 {
            let value = self.at(s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }
}

/// Eased `y` for progress `t` on the curve `(x1, y1, x2, y2)`
///
/// Solved in f64 so consecutive frames don't jitter.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = BezierAxis::new(x1, x2).solve(t as f64);
    BezierAxis::new(y1, y2).at(s) as f32
}
