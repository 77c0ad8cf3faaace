//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Radius sentinel that renders as a pill/capsule
pub const RADIUS_FULL: f32 = 9999.0;

/// Radius scale keys, smallest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusTokens {
    pub radius_none: f32,
    pub radius_xs: f32,
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_xxl: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Xs => self.radius_xs,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Xxl => self.radius_xxl,
            RadiusToken::Full => self.radius_full,
        }
    }

    /// Values in scale order (none .. full)
    pub fn ordered(&self) -> [f32; 8] {
        [
            self.radius_none,
            self.radius_xs,
            self.radius_sm,
            self.radius_md,
            self.radius_lg,
            self.radius_xl,
            self.radius_xxl,
            self.radius_full,
        ]
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_xs: 4.0,
            radius_sm: 8.0,
            radius_md: 12.0,
            radius_lg: 16.0,
            radius_xl: 24.0,
            radius_xxl: 32.0,
            radius_full: RADIUS_FULL,
        }
    }
}
