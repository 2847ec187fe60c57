//! Rotated rectangles and their local frame
//!
//! Predicates against an oriented rectangle never do rotated-box math
//! directly. They move the other shape into the rectangle's local frame
//! (origin at the bottom-left corner, axes aligned with the edges) and test
//! against [`OrientedRectangle::local_bounds`] instead.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::line::{Line, LineSegment};
use super::rectangle::Rectangle;
use crate::math::Vector2D;

/// Rectangle of half-size `half_extend` centered at `center`, rotated by
/// `rotation` radians about the center
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct OrientedRectangle {
    pub center: Vector2D,
    pub half_extend: Vector2D,
    pub rotation: f32,
}

impl OrientedRectangle {
    #[inline]
    pub const fn new(center: Vector2D, half_extend: Vector2D, rotation: f32) -> Self {
        Self {
            center,
            half_extend,
            rotation,
        }
    }

    /// World-space corner `index % 4`
    pub fn corner(&self, index: usize) -> Vector2D {
        let h = self.half_extend;
        let local = match index % 4 {
            0 => Vector2D::new(-h.x, h.y),
            1 => h,
            2 => Vector2D::new(h.x, -h.y),
            _ => -h,
        };
        local.rotate(self.rotation) + self.center
    }

    /// World-space edge `index % 4` (top, right, bottom, left)
    #[inline]
    pub fn edge(&self, index: usize) -> LineSegment {
        LineSegment::new(self.corner(index), self.corner(index + 1))
    }

    /// Tightest axis-aligned rectangle containing all four corners
    pub fn hull(&self) -> Rectangle {
        (0..4).fold(Rectangle::new(self.center, Vector2D::ZERO), |hull, i| {
            hull.enlarge(self.corner(i))
        })
    }

    /// The rectangle itself, expressed in its own local frame
    #[inline]
    pub fn local_bounds(&self) -> Rectangle {
        Rectangle::new(Vector2D::ZERO, self.half_extend * 2.0)
    }

    /// Move a world-space point into the local frame
    #[inline]
    pub fn to_local(&self, point: Vector2D) -> Vector2D {
        (point - self.center).rotate(-self.rotation) + self.half_extend
    }

    /// Rotate a world-space direction into the local frame (no translation)
    #[inline]
    pub fn to_local_direction(&self, direction: Vector2D) -> Vector2D {
        direction.rotate(-self.rotation)
    }

    pub fn to_local_line(&self, line: Line) -> Line {
        Line::new(self.to_local(line.base), self.to_local_direction(line.direction))
    }

    pub fn to_local_segment(&self, segment: LineSegment) -> LineSegment {
        LineSegment::new(self.to_local(segment.point1), self.to_local(segment.point2))
    }
}
