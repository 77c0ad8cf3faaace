//! Prism Components
//!
//! Per-component configuration values and the small amount of interaction
//! state each component owns.
//!
//! Every configuration family follows the same contract:
//!
//! - `Default` gives the stock look
//! - named presets (`CardConfig::compact()`, `GlassConfig::liquid()`, ...)
//! - `from_theme(&Theme)` seeds colors and metrics from the active theme
//! - builder modifiers consume `self` and return the changed value
//!
//! Scalars in a bounded domain (progress, probability, opacity) are clamped
//! to `[0, 1]` rather than rejected. The only failures are inverted ranges
//! and thumb-less sliders, reported as [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use prism_components::{CardConfig, SliderConfig, SliderState};
//! use prism_core::{NoopHaptics, PointerEvent};
//! use prism_theme::{FromTheme, ThemeContext, ThemePreset};
//!
//! let ocean = ThemePreset::Ocean.theme();
//! let root = ThemeContext::root();
//! let ctx = root.provide(&ocean);
//!
//! let card = CardConfig::from_context(&ctx).corner_radius(20.0);
//! assert_eq!(card.background, ocean.surface_color());
//!
//! let mut slider = SliderState::new(SliderConfig::percent(), &[50.0], 200.0).unwrap();
//! slider.handle(PointerEvent::Down { x: 100.0, y: 0.0 }, &mut NoopHaptics);
//! slider.handle(PointerEvent::Move { x: 150.0, y: 0.0 }, &mut NoopHaptics);
//! assert_eq!(slider.value(), 75.0);
//! ```

pub mod adaptive;
pub mod badge;
pub mod button;
pub mod card;
pub mod error;
pub mod glass;
pub mod interpolation;
pub mod magnetic;
pub mod progress;
pub mod slider;
pub mod spring;

pub use adaptive::{AdaptiveAppearance, AdaptiveLayoutConfig, AdaptiveState};
pub use badge::{BadgeConfig, BadgeKind};
pub use button::{ButtonConfig, ButtonPhase, ButtonSize, ButtonState, ButtonVariant};
pub use card::{CardAppearance, CardConfig};
pub use error::{ConfigError, Result};
pub use glass::{GlassConfig, GlassLayer};
pub use interpolation::{threshold_gate, ColorBand, Interpolation};
pub use magnetic::{MagneticPullConfig, MagneticState};
pub use progress::{ProgressAppearance, ProgressConfig, ProgressState, ProgressStyle};
pub use slider::{DragPhase, SliderConfig, SliderState};
pub use spring::{SpringModifierConfig, VelocityScale};
