//! Prism Theme System
//!
//! Design tokens, built-in presets and scoped theme propagation.
//!
//! # Overview
//!
//! - **Design tokens**: colors, typography, spacing, radii, effects
//! - **Themes**: an immutable aggregate of token groups with `with_*` builders
//! - **Presets**: a fixed catalog of ready-made themes, resolvable by name
//! - **Context**: a read-only, stack-scoped theme binding handed down a tree
//! - **Files**: partial TOML documents layered on a preset
//!
//! # Quick Start
//!
//! ```rust
//! use prism_core::Color;
//! use prism_theme::{preset_by_name, Theme, ThemeContext};
//!
//! let brand = preset_by_name("midnight")
//!     .unwrap()
//!     .with_primary_color(Color::from_hex(0xFF2D55));
//!
//! let root = ThemeContext::root();
//! let themed = root.provide(&brand);
//! assert_eq!(themed.current().primary_color(), Color::from_hex(0xFF2D55));
//! assert_eq!(root.current(), Theme::default_ref());
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: semantic colors (primary, surface, text, success, ...)
//! - [`TypographyTokens`]: font sizes, weights, line heights
//! - [`SpacingTokens`]: spacing scale
//! - [`RadiusTokens`]: border radii
//! - [`EffectTokens`]: shadow, blur and glow magnitudes plus animation timing

pub mod context;
pub mod error;
pub mod file;
pub mod presets;
pub mod registry;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use context::{ContextState, FromTheme, ThemeContext};
pub use error::{Result, ThemeError};
pub use file::ThemeFile;
pub use presets::{preset_by_name, ThemePreset};
pub use registry::ThemeRegistry;
pub use theme::{ColorScheme, Theme, ThemeOverrides};
pub use tokens::*;
