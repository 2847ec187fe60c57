//! 1D interval algebra for separating-axis tests

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// Closed interval `[minimum, maximum]`
///
/// Ranges may be built unsorted; call [`Range::sort`] before comparing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Range {
    pub minimum: f32,
    pub maximum: f32,
}

impl Range {
    #[inline]
    pub const fn new(minimum: f32, maximum: f32) -> Self {
        Self { minimum, maximum }
    }

    /// Swap the bounds if they are out of order
    #[inline]
    pub fn sort(self) -> Self {
        if self.minimum > self.maximum {
            Self::new(self.maximum, self.minimum)
        } else {
            self
        }
    }

    /// Closed-interval overlap of two sorted ranges (touching counts)
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        overlapping(self.minimum, self.maximum, other.minimum, other.maximum)
    }

    /// Smallest range containing both
    #[inline]
    pub fn hull(self, other: Self) -> Self {
        Self::new(
            self.minimum.min(other.minimum),
            self.maximum.max(other.maximum),
        )
    }

    /// Project two points onto the unit vector of `onto`, sorted
    pub fn from_projection(a: Vector2D, b: Vector2D, onto: Vector2D) -> Self {
        let onto_unit = onto.unit();
        Self::new(onto_unit.dot(a), onto_unit.dot(b)).sort()
    }

    /// Whether `value` lies inside the sorted range (closed bounds)
    #[inline]
    pub fn contains(self, value: f32) -> bool {
        self.minimum <= value && value <= self.maximum
    }
}

/// Closed-interval overlap of `[min_a, max_a]` and `[min_b, max_b]`
#[inline]
pub fn overlapping(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> bool {
    min_b <= max_a && min_a <= max_b
}

/// Clamp `x` into `[minimum, maximum]`
///
/// Unlike `f32::clamp` this never panics on inverted bounds: the lower bound
/// is applied first, then the upper.
#[inline]
pub fn clamp_on_range(x: f32, minimum: f32, maximum: f32) -> f32 {
    if x < minimum {
        minimum
    } else if maximum < x {
        maximum
    } else {
        x
    }
}
