//! Mapping a progress or probability scalar to visual parameters
//!
//! Every function here clamps its scalar to `[0, 1]` first. For any pair
//! whose `active >= base`, increasing `t` never decreases the output.

use prism_core::{clamp_unit, lerp, Color};
use serde::{Deserialize, Serialize};

/// A base/active pair interpolated linearly by `t`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    pub base: f32,
    pub active: f32,
}

impl Interpolation {
    pub const fn new(base: f32, active: f32) -> Self {
        Self { base, active }
    }

    /// Same value regardless of `t`
    pub const fn constant(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn at(&self, t: f32) -> f32 {
        lerp(self.base, self.active, t)
    }

    pub fn is_increasing(&self) -> bool {
        self.active >= self.base
    }
}

/// Effect that contributes nothing until `t` reaches `threshold`, then
/// `magnitude * t`.
pub fn threshold_gate(t: f32, threshold: f32, magnitude: f32) -> f32 {
    let t = clamp_unit(t);
    if t >= clamp_unit(threshold) {
        magnitude * t
    } else {
        0.0
    }
}

/// Two-palette blend over probability bands
///
/// Below `low_cutoff` the inactive color is used, above `high_cutoff` the
/// active one. In between the active color is cross-faded over the inactive
/// one at opacity `t`. Because the overlay opacity is `t` rather than the
/// position inside the band, the output jumps at both cutoffs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub inactive: Color,
    pub active: Color,
    pub low_cutoff: f32,
    pub high_cutoff: f32,
}

impl ColorBand {
    pub fn new(inactive: Color, active: Color, low_cutoff: f32, high_cutoff: f32) -> Self {
        Self {
            inactive,
            active,
            low_cutoff: clamp_unit(low_cutoff),
            high_cutoff: clamp_unit(high_cutoff),
        }
    }

    /// Overlay opacity of the active palette at `t`
    pub fn active_opacity(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        if t < self.low_cutoff {
            0.0
        } else if t > self.high_cutoff {
            1.0
        } else {
            t
        }
    }

    pub fn resolve(&self, t: f32) -> Color {
        Color::crossfade(&self.inactive, &self.active, self.active_opacity(t))
    }
}
