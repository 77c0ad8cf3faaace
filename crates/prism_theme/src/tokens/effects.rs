//! Effect tokens: shadows, blur, glow and animation timing

use prism_animation::Easing;
use prism_core::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Magnitude tiers shared by the shadow, blur and glow families
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectLevel {
    Small,
    Medium,
    Large,
    Xl,
}

impl EffectLevel {
    pub fn all() -> &'static [EffectLevel] {
        const LEVELS: [EffectLevel; 4] = [
            EffectLevel::Small,
            EffectLevel::Medium,
            EffectLevel::Large,
            EffectLevel::Xl,
        ];
        &LEVELS
    }
}

/// Animation duration tiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
}

/// A resolved drop shadow, ready for the host renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Linear interpolation between two shadows
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = prism_core::clamp_unit(t);
        Self {
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            blur: from.blur + (to.blur - from.blur) * t,
            color: Color::lerp(&from.color, &to.color, t),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of effect tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTokens {
    pub shadow_small: f32,
    pub shadow_medium: f32,
    pub shadow_large: f32,
    pub shadow_xl: f32,
    pub shadow_color: Color,
    pub shadow_opacity: f32,

    pub blur_small: f32,
    pub blur_medium: f32,
    pub blur_large: f32,
    pub blur_xl: f32,

    pub glow_small: f32,
    pub glow_medium: f32,
    pub glow_large: f32,
    pub glow_xl: f32,

    pub duration_fast_ms: u32,
    pub duration_normal_ms: u32,
    pub duration_slow_ms: u32,
    pub easing: Easing,
}

impl EffectTokens {
    /// Shadow blur radius for a tier
    pub fn shadow_radius(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Small => self.shadow_small,
            EffectLevel::Medium => self.shadow_medium,
            EffectLevel::Large => self.shadow_large,
            EffectLevel::Xl => self.shadow_xl,
        }
    }

    /// Background blur radius for a tier
    pub fn blur(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Small => self.blur_small,
            EffectLevel::Medium => self.blur_medium,
            EffectLevel::Large => self.blur_large,
            EffectLevel::Xl => self.blur_xl,
        }
    }

    /// Glow radius for a tier
    pub fn glow(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Small => self.glow_small,
            EffectLevel::Medium => self.glow_medium,
            EffectLevel::Large => self.glow_large,
            EffectLevel::Xl => self.glow_xl,
        }
    }

    pub fn duration_ms(&self, token: DurationToken) -> u32 {
        match token {
            DurationToken::Fast => self.duration_fast_ms,
            DurationToken::Normal => self.duration_normal_ms,
            DurationToken::Slow => self.duration_slow_ms,
        }
    }

    pub fn duration(&self, token: DurationToken) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms(token)))
    }

    /// Drop shadow for a tier: falls straight down by half its radius
    pub fn shadow(&self, level: EffectLevel) -> Shadow {
        let radius = self.shadow_radius(level);
        Shadow::new(
            0.0,
            radius / 2.0,
            radius,
            self.shadow_color.with_alpha(self.shadow_opacity),
        )
    }

    pub fn ordered_shadows(&self) -> [f32; 4] {
        [
            self.shadow_small,
            self.shadow_medium,
            self.shadow_large,
            self.shadow_xl,
        ]
    }

    pub fn ordered_blurs(&self) -> [f32; 4] {
        [self.blur_small, self.blur_medium, self.blur_large, self.blur_xl]
    }

    pub fn ordered_glows(&self) -> [f32; 4] {
        [self.glow_small, self.glow_medium, self.glow_large, self.glow_xl]
    }

    pub fn ordered_durations(&self) -> [u32; 3] {
        [
            self.duration_fast_ms,
            self.duration_normal_ms,
            self.duration_slow_ms,
        ]
    }
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self {
            shadow_small: 4.0,
            shadow_medium: 8.0,
            shadow_large: 16.0,
            shadow_xl: 24.0,
            shadow_color: Color::BLACK,
            shadow_opacity: 0.2,
            blur_small: 8.0,
            blur_medium: 16.0,
            blur_large: 30.0,
            blur_xl: 50.0,
            glow_small: 4.0,
            glow_medium: 10.0,
            glow_large: 20.0,
            glow_xl: 32.0,
            duration_fast_ms: 150,
            duration_normal_ms: 300,
            duration_slow_ms: 500,
            easing: Easing::EaseInOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_for_level() {
        let effects = EffectTokens::default();
        let shadow = effects.shadow(EffectLevel::Large);
        assert_eq!(shadow.blur, 16.0);
        assert_eq!(shadow.offset_y, 8.0);
        assert_eq!(shadow.color.a, 0.2);
    }

    #[test]
    fn test_shadow_lerp_endpoints() {
        let from = Shadow::none();
        let to = Shadow::new(0.0, 4.0, 8.0, Color::BLACK);
        assert_eq!(Shadow::lerp(&from, &to, 1.0), to);
        assert_eq!(Shadow::lerp(&from, &to, -1.0), from);
    }

    #[test]
    fn test_duration() {
        let effects = EffectTokens::default();
        assert_eq!(effects.duration(DurationToken::Normal), Duration::from_millis(300));
    }
}
