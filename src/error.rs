//! Error types
//!
//! Sampling has no error path: a saturated reading is a normal value.
//! Only construction and configuration can fail.

use core::fmt;

use crate::pin::Pin;

/// Failure while claiming hardware during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError<E> {
    /// The provider refused to hand over a pin
    Claim { pin: Pin, source: E },
}

impl<E> SetupError<E> {
    /// Pin that could not be set up
    pub const fn pin(&self) -> Pin {
        match self {
            Self::Claim { pin, .. } => *pin,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for SetupError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Claim { pin, source } => write!(f, "cannot claim {}: {:?}", pin, source),
        }
    }
}

/// Rejected configuration value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Filter weights must lie in `[0, 1]` and sum to one
    InvalidCoefficients { a: f64, b: f64 },
    /// Threshold bands must be strictly ascending
    BandsNotAscending { previous: u32, next: u32 },
    /// The policy has no room for another band
    TooManyBands,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoefficients { a, b } => {
                write!(f, "filter coefficients {} and {} do not form a convex pair", a, b)
            }
            Self::BandsNotAscending { previous, next } => {
                write!(f, "band threshold {} does not follow {}", next, previous)
            }
            Self::TooManyBands => f.write_str("threshold policy is full"),
        }
    }
}
