//! Infinite lines and finite segments

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::{Range, Vector2D};

/// Infinite line through `base` along `direction`
///
/// A zero `direction` is not rejected; it is parallel to everything.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Line {
    pub base: Vector2D,
    pub direction: Vector2D,
}

impl Line {
    #[inline]
    pub const fn new(base: Vector2D, direction: Vector2D) -> Self {
        Self { base, direction }
    }

    /// Normal of the line (direction turned a quarter)
    #[inline]
    pub fn normal(&self) -> Vector2D {
        self.direction.rotate_90()
    }

    /// Signed offset of `point` along the line normal, scaled by |direction|
    #[inline]
    pub fn side_of(&self, point: Vector2D) -> f32 {
        self.normal().dot(point - self.base)
    }
}

/// Finite segment between two endpoints
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct LineSegment {
    pub point1: Vector2D,
    pub point2: Vector2D,
}

impl LineSegment {
    #[inline]
    pub const fn new(point1: Vector2D, point2: Vector2D) -> Self {
        Self { point1, point2 }
    }

    /// Vector from `point1` to `point2`
    #[inline]
    pub fn direction(&self) -> Vector2D {
        self.point2 - self.point1
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// The infinite line this segment lies on
    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.point1, self.direction())
    }

    /// Project both endpoints onto `onto`, giving a sorted range
    #[inline]
    pub fn project(&self, onto: Vector2D) -> Range {
        Range::from_projection(self.point1, self.point2, onto)
    }
}
