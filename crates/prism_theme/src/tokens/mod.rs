//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Typography (sizes, weights, line heights)
//! - Spacing
//! - Border radii
//! - Effects (shadows, blur, glow, animation durations)

mod color;
mod effects;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use effects::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
