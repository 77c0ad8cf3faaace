//! Prism Animation
//!
//! Easing curves and spring physics used to turn discrete configuration
//! changes into continuous motion.
//!
//! - **Easing**: CSS-compatible timing curves, including cubic bezier
//! - **Springs**: RK4-integrated damped springs with stiffness, damping, mass
//! - **Interruptible**: retargeting a spring keeps its velocity

pub mod easing;
pub mod spring;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
