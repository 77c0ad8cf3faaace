//! RGBA colors

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::math::clamp_unit;

/// RGBA color with channels in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid hex color `{0}`: expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        Self::from_hex(hex >> 8).with_alpha((hex & 0xFF) as f32 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Per-channel linear interpolation (alpha included)
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = clamp_unit(t);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Composite `over`, drawn at `opacity`, on top of `under` (source-over).
    ///
    /// This is a straight alpha cross-fade in the stored color space, the
    /// same result a renderer produces when stacking two layers. It is not
    /// a perceptual interpolation.
    pub fn crossfade(under: &Self, over: &Self, opacity: f32) -> Self {
        let src_a = over.a * clamp_unit(opacity);
        let out_a = src_a + under.a * (1.0 - src_a);
        if out_a <= f32::EPSILON {
            return Color::TRANSPARENT;
        }
        let channel = |src: f32, dst: f32| (src * src_a + dst * under.a * (1.0 - src_a)) / out_a;
        Self {
            r: channel(over.r, under.r),
            g: channel(over.g, under.g),
            b: channel(over.b, under.b),
            a: out_a,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    ///
    /// Channels are quantized to 8 bits, so an alpha that rounds to `0xff`
    /// (anything above roughly `0.998`) is written as opaque and parses back
    /// as `a == 1.0`.
    pub fn to_hex_string(&self) -> String {
        let byte = |c: f32| (clamp_unit(c) * 255.0).round() as u8;
        if byte(self.a) == 0xFF {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let err = || ParseColorError(s.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        match digits.len() {
            6 => Ok(Color::from_hex(value)),
            8 => Ok(Color::from_hex_rgba(value)),
            _ => Err(err()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff5500".parse::<Color>().unwrap(), Color::from_hex(0xFF5500));
        let translucent: Color = "#0000FF80".parse().unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("#+12345".parse::<Color>().is_err());
        assert!("##ff0000".parse::<Color>().is_err());
        assert_eq!("ff0000".parse::<Color>().unwrap(), Color::RED);
    }

    #[test]
    fn test_hex_string_round_trip() {
        assert_eq!(Color::from_hex(0x1E66F5).to_hex_string(), "#1e66f5");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_hex_string(), "#00000000");
    }

    #[test]
    fn test_near_opaque_alpha_formats_as_opaque() {
        let nearly = Color::WHITE.with_alpha(0.999);
        assert_eq!(nearly.to_hex_string(), "#ffffff");
        assert_eq!(nearly.to_hex_string().parse::<Color>().unwrap().a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(0.99).to_hex_string(), "#fffffffc");
    }

    #[test]
    fn test_lerp_endpoints() {
        assert!(approx(Color::lerp(&Color::BLACK, &Color::WHITE, 0.0), Color::BLACK));
        assert!(approx(Color::lerp(&Color::BLACK, &Color::WHITE, 1.0), Color::WHITE));
        assert!(approx(
            Color::lerp(&Color::BLACK, &Color::WHITE, 0.5),
            Color::rgb(0.5, 0.5, 0.5)
        ));
    }

    #[test]
    fn test_crossfade_opaque_layers_matches_lerp() {
        let under = Color::RED;
        let over = Color::BLUE;
        let blended = Color::crossfade(&under, &over, 0.25);
        assert!(approx(blended, Color::lerp(&under, &over, 0.25)));
    }

    #[test]
    fn test_crossfade_translucent_overlay() {
        let under = Color::WHITE;
        let over = Color::BLACK.with_alpha(0.5);
        let blended = Color::crossfade(&under, &over, 1.0);
        assert!(approx(blended, Color::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_crossfade_transparent_layers() {
        let blended = Color::crossfade(&Color::TRANSPARENT, &Color::TRANSPARENT, 0.5);
        assert_eq!(blended, Color::TRANSPARENT);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x40A02B)).unwrap();
        assert_eq!(json, "\"#40a02b\"");
        let back: Color = serde_json::from_str("\"#40A02B\"").unwrap();
        assert_eq!(back, Color::from_hex(0x40A02B));
    }
}
