//! Refractive glass material
//!
//! Glass is drawn by the host renderer as a stack of translucent layers
//! over a blurred backdrop. This module only resolves the per-layer
//! parameters; it does no drawing.

use prism_core::{clamp_unit, lerp, Color};
use prism_theme::{EffectLevel, FromTheme, Theme};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    pub blur_radius: f32,
    pub tint: Color,
    pub tint_opacity: f32,
    /// Opacity of the specular highlight on the top layer
    pub highlight_opacity: f32,
    /// Refraction strength in `[0, 1]`
    pub refraction: f32,
    pub layer_count: u8,
    pub border_opacity: f32,
    /// Horizontal RGB split in points at full refraction
    pub chromatic_offset: f32,
    pub corner_radius: f32,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            blur_radius: 20.0,
            tint: Color::WHITE,
            tint_opacity: 0.15,
            highlight_opacity: 0.3,
            refraction: 0.5,
            layer_count: 3,
            border_opacity: 0.2,
            chromatic_offset: 1.5,
            corner_radius: 16.0,
        }
    }
}

impl FromTheme for GlassConfig {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            blur_radius: theme.effects().blur(EffectLevel::Medium),
            tint: theme.text_color(),
            corner_radius: theme.corner_radius(),
            ..Self::default()
        }
    }
}

impl GlassConfig {
    /// Light touch, single layer
    pub fn subtle() -> Self {
        Self {
            blur_radius: 10.0,
            tint_opacity: 0.08,
            highlight_opacity: 0.15,
            refraction: 0.2,
            layer_count: 1,
            chromatic_offset: 0.0,
            ..Self::default()
        }
    }

    pub fn regular() -> Self {
        Self::default()
    }

    /// Heavy blur, milky tint
    pub fn frosted() -> Self {
        Self {
            blur_radius: 40.0,
            tint_opacity: 0.35,
            highlight_opacity: 0.2,
            refraction: 0.3,
            layer_count: 2,
            chromatic_offset: 0.5,
            ..Self::default()
        }
    }

    /// Strong refraction with visible colour fringes
    pub fn liquid() -> Self {
        Self {
            blur_radius: 24.0,
            tint_opacity: 0.1,
            highlight_opacity: 0.45,
            refraction: 0.9,
            layer_count: 4,
            chromatic_offset: 3.0,
            ..Self::default()
        }
    }

    pub fn blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn tint(mut self, color: Color, opacity: f32) -> Self {
        self.tint = color;
        self.tint_opacity = clamp_unit(opacity);
        self
    }

    pub fn refraction(mut self, refraction: f32) -> Self {
        self.refraction = clamp_unit(refraction);
        self
    }

    pub fn layer_count(mut self, count: u8) -> Self {
        self.layer_count = count.max(1);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Layers from bottom (index 0) to top
    ///
    /// Deeper layers carry more of the tint and refract further; only the
    /// top layer carries the highlight.
    pub fn layers(&self) -> Vec<GlassLayer> {
        let count = self.layer_count.max(1) as usize;
        (0..count)
            .map(|i| {
                // 1.0 at the bottom layer, falling toward the top
                let depth = (count - i) as f32 / count as f32;
                let refraction = self.refraction * depth;
                GlassLayer {
                    index: i,
                    tint: self.tint.with_alpha(self.tint_opacity * depth),
                    highlight_opacity: if i + 1 == count {
                        self.highlight_opacity
                    } else {
                        0.0
                    },
                    refraction_offset: refraction * self.chromatic_offset,
                    opacity: lerp(0.5, 1.0, depth),
                }
            })
            .collect()
    }

    /// Copy with every effect magnitude scaled by `t` (clamped)
    pub fn intensity(&self, t: f32) -> Self {
        let t = clamp_unit(t);
        Self {
            blur_radius: self.blur_radius * t,
            tint_opacity: self.tint_opacity * t,
            highlight_opacity: self.highlight_opacity * t,
            refraction: self.refraction * t,
            border_opacity: self.border_opacity * t,
            chromatic_offset: self.chromatic_offset * t,
            ..self.clone()
        }
    }
}

/// One resolved glass layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassLayer {
    pub index: usize,
    pub tint: Color,
    pub highlight_opacity: f32,
    /// Per-channel displacement applied to the backdrop sample
    pub refraction_offset: f32,
    pub opacity: f32,
}
