//! Built-in theme presets

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, Theme};
use crate::tokens::*;
use prism_core::Color;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Library default: dark glass with a pure blue primary.
    Default,
    /// Deep indigo night palette.
    Midnight,
    /// Warm orange and magenta.
    Sunset,
    /// Teal and cyan on navy.
    Ocean,
    /// Greens on dark moss.
    Forest,
    /// Saturated neon on near-black with strong glow.
    Neon,
    /// Greyscale only.
    Monochrome,
    /// Light appearance of the default palette.
    Light,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Neon => "neon",
            Self::Monochrome => "monochrome",
            Self::Light => "light",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Midnight => "Midnight",
            Self::Sunset => "Sunset",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Neon => "Neon",
            Self::Monochrome => "Monochrome",
            Self::Light => "Light",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 8] = [
            ThemePreset::Default,
            ThemePreset::Midnight,
            ThemePreset::Sunset,
            ThemePreset::Ocean,
            ThemePreset::Forest,
            ThemePreset::Neon,
            ThemePreset::Monochrome,
            ThemePreset::Light,
        ];
        &PRESETS
    }

    /// Build the fully populated theme for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => Theme::default(),
            Self::Midnight => build(self, ColorScheme::Dark, midnight()),
            Self::Sunset => build(self, ColorScheme::Dark, sunset()),
            Self::Ocean => build(self, ColorScheme::Dark, ocean()),
            Self::Forest => build(self, ColorScheme::Dark, forest()),
            Self::Neon => build(self, ColorScheme::Dark, neon()).with_effects(EffectTokens {
                glow_small: 8.0,
                glow_medium: 16.0,
                glow_large: 28.0,
                glow_xl: 44.0,
                shadow_color: Color::from_hex(0xFF00FF),
                shadow_opacity: 0.35,
                ..EffectTokens::default()
            }),
            Self::Monochrome => {
                build(self, ColorScheme::Dark, monochrome()).with_radii(RadiusTokens {
                    radius_xs: 2.0,
                    radius_sm: 4.0,
                    radius_md: 6.0,
                    radius_lg: 8.0,
                    radius_xl: 12.0,
                    radius_xxl: 16.0,
                    ..RadiusTokens::default()
                })
            }
            Self::Light => build(self, ColorScheme::Light, light()).with_effects(EffectTokens {
                shadow_opacity: 0.1,
                ..EffectTokens::default()
            }),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    /// Case-insensitive match on the preset id.
    fn from_str(name: &str) -> Result<Self> {
        let wanted = name.trim();
        ThemePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))
    }
}

/// Resolve a preset by name into its theme.
pub fn preset_by_name(name: &str) -> Result<Theme> {
    match name.parse::<ThemePreset>() {
        Ok(preset) => {
            tracing::debug!("resolved theme preset {}", preset.id());
            Ok(preset.theme())
        }
        Err(err) => {
            tracing::warn!("no theme preset named {:?}", name);
            Err(err)
        }
    }
}

#[derive(Clone, Copy)]
struct Palette {
    primary: Color,
    secondary: Color,
    accent: Color,
    background: Color,
    surface: Color,
    text: Color,
    text_secondary: Color,
}

fn build(preset: ThemePreset, scheme: ColorScheme, palette: Palette) -> Theme {
    let semantic = ColorTokens::default();
    let colors = ColorTokens {
        primary: palette.primary,
        secondary: palette.secondary,
        accent: palette.accent,
        background: palette.background,
        surface: palette.surface,
        text: palette.text,
        text_secondary: palette.text_secondary,
        ..semantic
    };
    Theme::new(
        preset.display_name(),
        scheme,
        colors,
        TypographyTokens::default(),
        SpacingTokens::default(),
        RadiusTokens::default(),
        EffectTokens::default(),
    )
}

fn midnight() -> Palette {
    Palette {
        primary: Color::from_hex(0x7C83FD),
        secondary: Color::from_hex(0x96BAFF),
        accent: Color::from_hex(0xC084FC),
        background: Color::from_hex(0x0A0E27),
        surface: Color::from_hex(0x161B3D),
        text: Color::from_hex(0xE8EAFF),
        text_secondary: Color::from_hex(0x8A8FB8),
    }
}

fn sunset() -> Palette {
    Palette {
        primary: Color::from_hex(0xFF6B35),
        secondary: Color::from_hex(0xF7931E),
        accent: Color::from_hex(0xE63E6D),
        background: Color::from_hex(0x1A0F1E),
        surface: Color::from_hex(0x2D1B2E),
        text: Color::from_hex(0xFFF1E6),
        text_secondary: Color::from_hex(0xC9A9A6),
    }
}

fn ocean() -> Palette {
    Palette {
        primary: Color::from_hex(0x00B4D8),
        secondary: Color::from_hex(0x0077B6),
        accent: Color::from_hex(0x90E0EF),
        background: Color::from_hex(0x03045E),
        surface: Color::from_hex(0x023E8A),
        text: Color::from_hex(0xCAF0F8),
        text_secondary: Color::from_hex(0x8ECAE6),
    }
}

fn forest() -> Palette {
    Palette {
        primary: Color::from_hex(0x52B788),
        secondary: Color::from_hex(0x40916C),
        accent: Color::from_hex(0xB7E4C7),
        background: Color::from_hex(0x081C15),
        surface: Color::from_hex(0x1B4332),
        text: Color::from_hex(0xD8F3DC),
        text_secondary: Color::from_hex(0x95D5B2),
    }
}

fn neon() -> Palette {
    Palette {
        primary: Color::from_hex(0x00FFF0),
        secondary: Color::from_hex(0xFF00FF),
        accent: Color::from_hex(0xFFFF00),
        background: Color::from_hex(0x050505),
        surface: Color::from_hex(0x121212),
        text: Color::WHITE,
        text_secondary: Color::from_hex(0xB3B3B3),
    }
}

fn monochrome() -> Palette {
    Palette {
        primary: Color::WHITE,
        secondary: Color::from_hex(0xBDBDBD),
        accent: Color::from_hex(0x9E9E9E),
        background: Color::BLACK,
        surface: Color::from_hex(0x1A1A1A),
        text: Color::WHITE,
        text_secondary: Color::from_hex(0x8C8C8C),
    }
}

fn light() -> Palette {
    Palette {
        primary: Color::BLUE,
        secondary: Color::from_hex(0xAF52DE),
        accent: Color::from_hex(0x5E5CE6),
        background: Color::from_hex(0xF2F2F7),
        surface: Color::WHITE,
        text: Color::BLACK,
        text_secondary: Color::from_hex(0x6C6C70),
    }
}
