//! Floating-point comparison tolerance

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;

/// Absolute comparison threshold for scalars
///
/// Two values are equal when their difference is strictly below the threshold.
/// Serialized as a bare number; deserializing goes through [`Tolerance::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Tolerance(f32);

impl Tolerance {
    /// The kernel-wide tolerance every predicate uses
    pub const DEFAULT: Self = Self(EPSILON);

    /// Create a tolerance with a custom threshold (absolute value is taken)
    pub fn new(threshold: f32) -> Self {
        Self(threshold.abs())
    }

    /// The raw threshold
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.0
    }

    /// Whether `a` and `b` compare equal
    #[inline]
    pub fn equal(&self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.0
    }

    /// Whether `value` compares equal to zero
    #[inline]
    pub fn is_zero(&self, value: f32) -> bool {
        self.equal(value, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for Tolerance {
    fn from(threshold: f32) -> Self {
        Self::new(threshold)
    }
}

impl From<Tolerance> for f32 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}
