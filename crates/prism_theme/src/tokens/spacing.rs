//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Spacing scale keys, smallest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingToken {
    Xxxs,
    Xxs,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

/// Complete set of spacing tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingTokens {
    pub xxxs: f32,
    pub xxs: f32,
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl SpacingTokens {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxxs => self.xxxs,
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::S => self.s,
            SpacingToken::M => self.m,
            SpacingToken::L => self.l,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    /// Values in scale order (xxxs .. xxxl)
    pub fn ordered(&self) -> [f32; 9] {
        [
            self.xxxs, self.xxs, self.xs, self.s, self.m, self.l, self.xl, self.xxl, self.xxxl,
        ]
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxxs: 2.0,
            xxs: 4.0,
            xs: 8.0,
            s: 12.0,
            m: 16.0,
            l: 24.0,
            xl: 32.0,
            xxl: 48.0,
            xxxl: 64.0,
        }
    }
}
