//! Scalar helpers for progress and probability driven values

/// Clamp a scalar into `[0, 1]`.
///
/// Out-of-domain inputs are clamped rather than rejected. `NaN` maps to `0.0`
/// so a bad upstream value renders as the inactive state.
pub fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Linear interpolation from `base` to `active` by a clamped `t`.
pub fn lerp(base: f32, active: f32, t: f32) -> f32 {
    base + (active - base) * clamp_unit(t)
}

/// Position of `value` within `[start, end]` as a clamped fraction.
///
/// A degenerate range (`start == end`) yields `0.0`.
pub fn inverse_lerp(start: f32, end: f32, value: f32) -> f32 {
    let span = end - start;
    if span == 0.0 {
        return 0.0;
    }
    clamp_unit((value - start) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(7.0), 1.0);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(f32::INFINITY), 1.0);
        assert_eq!(clamp_unit(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_unit_idempotent() {
        for x in [-10.0, -0.0001, 0.0, 0.3, 0.999, 1.0, 1.5, 1e9] {
            let once = clamp_unit(x);
            assert_eq!(clamp_unit(once), once, "x={x}");
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(1.0, 1.05, 0.0), 1.0);
        assert_eq!(lerp(1.0, 1.05, 1.0), 1.05);
        assert!((lerp(1.0, 1.05, 0.5) - 1.025).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(lerp(2.0, 4.0, -1.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 3.0), 4.0);
    }

    #[test]
    fn test_lerp_constant_range() {
        for t in [-1.0, 0.0, 0.4, 1.0, 2.0] {
            assert_eq!(lerp(0.7, 0.7, t), 0.7);
        }
    }

    #[test]
    fn test_lerp_monotonic_in_t() {
        let mut previous = lerp(0.2, 0.9, 0.0);
        for step in 1..=100 {
            let value = lerp(0.2, 0.9, step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 200.0, 50.0), 0.25);
        assert_eq!(inverse_lerp(0.0, 200.0, -50.0), 0.0);
        assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 0.0);
    }
}
