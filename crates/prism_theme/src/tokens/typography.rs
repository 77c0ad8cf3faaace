//! Typography tokens for theming

use serde::{Deserialize, Serialize};

/// Font size scale keys, smallest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSizeToken {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Display,
}

/// Named font weights
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

/// Line height multipliers, tightest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineHeightToken {
    Tight,
    Normal,
    Relaxed,
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub font_family: String,

    pub size_xs: f32,
    pub size_s: f32,
    pub size_m: f32,
    pub size_l: f32,
    pub size_xl: f32,
    pub size_xxl: f32,
    pub size_display: f32,

    pub weight_regular: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,
    pub weight_bold: u16,
    pub weight_heavy: u16,

    pub line_height_tight: f32,
    pub line_height_normal: f32,
    pub line_height_relaxed: f32,
}

impl TypographyTokens {
    /// Font size by token key
    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.size_xs,
            FontSizeToken::S => self.size_s,
            FontSizeToken::M => self.size_m,
            FontSizeToken::L => self.size_l,
            FontSizeToken::Xl => self.size_xl,
            FontSizeToken::Xxl => self.size_xxl,
            FontSizeToken::Display => self.size_display,
        }
    }

    /// Numeric (CSS-style) weight
    pub fn weight(&self, weight: FontWeight) -> u16 {
        match weight {
            FontWeight::Regular => self.weight_regular,
            FontWeight::Medium => self.weight_medium,
            FontWeight::Semibold => self.weight_semibold,
            FontWeight::Bold => self.weight_bold,
            FontWeight::Heavy => self.weight_heavy,
        }
    }

    pub fn line_height(&self, token: LineHeightToken) -> f32 {
        match token {
            LineHeightToken::Tight => self.line_height_tight,
            LineHeightToken::Normal => self.line_height_normal,
            LineHeightToken::Relaxed => self.line_height_relaxed,
        }
    }

    /// Font sizes in scale order (xs .. display)
    pub fn ordered_sizes(&self) -> [f32; 7] {
        [
            self.size_xs,
            self.size_s,
            self.size_m,
            self.size_l,
            self.size_xl,
            self.size_xxl,
            self.size_display,
        ]
    }

    /// Line height multipliers in order (tight, normal, relaxed)
    pub fn ordered_line_heights(&self) -> [f32; 3] {
        [
            self.line_height_tight,
            self.line_height_normal,
            self.line_height_relaxed,
        ]
    }

    /// Copy with every size multiplied by `factor` (accessibility scaling)
    pub fn scaled(&self, factor: f32) -> Self {
        let factor = factor.max(0.0);
        Self {
            size_xs: self.size_xs * factor,
            size_s: self.size_s * factor,
            size_m: self.size_m * factor,
            size_l: self.size_l * factor,
            size_xl: self.size_xl * factor,
            size_xxl: self.size_xxl * factor,
            size_display: self.size_display * factor,
            ..self.clone()
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "system-ui".to_string(),
            size_xs: 11.0,
            size_s: 13.0,
            size_m: 15.0,
            size_l: 17.0,
            size_xl: 20.0,
            size_xxl: 28.0,
            size_display: 34.0,
            weight_regular: 400,
            weight_medium: 500,
            weight_semibold: 600,
            weight_bold: 700,
            weight_heavy: 800,
            line_height_tight: 1.15,
            line_height_normal: 1.4,
            line_height_relaxed: 1.65,
        }
    }
}
