//! Configuration errors

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A numeric range whose lower bound exceeds its upper bound
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f32, max: f32 },

    /// A multi-thumb control was created without any thumbs
    #[error("a slider needs at least one thumb, got {0}")]
    InvalidThumbCount(usize),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reject `min > max` (and NaN bounds)
pub(crate) fn check_range(min: f32, max: f32) -> Result<()> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { min, max })
    }
}
