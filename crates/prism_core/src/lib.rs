//! Prism Core
//!
//! Foundational primitives shared by the Prism theme and component crates:
//!
//! - **Colors**: RGBA colors with hex parsing, interpolation and alpha compositing
//! - **Scalar math**: unit clamping and linear interpolation
//! - **Pointer events**: the minimal input vocabulary interactive components consume
//! - **Feedback**: symbolic haptic intensities and edge-triggered threshold detection
//!
//! # Example
//!
//! ```rust
//! use prism_core::{lerp, Color, ThresholdTrigger};
//!
//! assert_eq!(lerp(1.0, 1.05, 0.0), 1.0);
//!
//! let mut trigger = ThresholdTrigger::new(0.95);
//! assert!(!trigger.update(0.5));
//! assert!(trigger.update(0.96));
//! assert!(!trigger.update(0.99));
//!
//! let accent = Color::from_hex(0xFF5500).with_alpha(0.5);
//! assert_eq!(accent.a, 0.5);
//! ```

pub mod color;
pub mod events;
pub mod haptics;
pub mod math;
pub mod trigger;

pub use color::{Color, ParseColorError};
pub use events::PointerEvent;
pub use haptics::{HapticFeedback, HapticSink, NoopHaptics, RecordingHaptics};
pub use math::{clamp_unit, inverse_lerp, lerp};
pub use trigger::{ThresholdTrigger, TriggerState};
