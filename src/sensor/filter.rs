//! Single-pole exponential smoothing
//!
//! `filtered = trunc(a * raw + b * previous)`, with the first reading passed
//! through untouched.

use crate::error::ConfigError;

/// Allowed drift of `a + b` away from one, a few ulps around 1.0
const SUM_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Convex pair of filter weights
///
/// `a` weighs the new raw reading, `b` the previous filtered one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCoefficients {
    a: f64,
    b: f64,
}

impl FilterCoefficients {
    /// Create a coefficient pair, checking that it is convex
    pub fn new(a: f64, b: f64) -> Result<Self, ConfigError> {
        let in_range = (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b);
        if !in_range || libm::fabs(a + b - 1.0) > SUM_TOLERANCE {
            return Err(ConfigError::InvalidCoefficients { a, b });
        }
        Ok(Self { a, b })
    }

    /// Build the pair from the weight of the new reading alone
    pub fn from_weight(a: f64) -> Result<Self, ConfigError> {
        Self::new(a, 1.0 - a)
    }

    pub const fn a(&self) -> f64 {
        self.a
    }

    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Blend a raw reading into the previous filtered value
    pub fn blend(&self, raw: u32, previous: u32) -> u32 {
        libm::trunc(self.a * f64::from(raw) + self.b * f64::from(previous)) as u32
    }
}

impl Default for FilterCoefficients {
    fn default() -> Self {
        Self { a: 0.25, b: 0.75 }
    }
}

/// Low-pass filter over consecutive readings
#[derive(Debug, Clone)]
pub struct SmoothingFilter {
    coefficients: FilterCoefficients,
    previous: Option<u32>,
}

impl SmoothingFilter {
    pub const fn new(coefficients: FilterCoefficients) -> Self {
        Self {
            coefficients,
            previous: None,
        }
    }

    /// Feed a raw reading and return the filtered value
    pub fn apply(&mut self, raw: u32) -> u32 {
        let filtered = match self.previous {
            Some(previous) => self.coefficients.blend(raw, previous),
            None => raw,
        };
        self.previous = Some(filtered);
        filtered
    }

    /// Last filtered value, if any reading was taken
    pub const fn previous(&self) -> Option<u32> {
        self.previous
    }

    pub const fn coefficients(&self) -> FilterCoefficients {
        self.coefficients
    }
}
