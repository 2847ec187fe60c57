//! Axis-aligned rectangles

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::{Range, Vector2D};

/// Axis-aligned box spanning `[origin, origin + size]` on both axes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Rectangle {
    pub origin: Vector2D,
    pub size: Vector2D,
}

impl Rectangle {
    #[inline]
    pub const fn new(origin: Vector2D, size: Vector2D) -> Self {
        Self { origin, size }
    }

    /// Horizontal extent `[origin.x, origin.x + size.x]`
    #[inline]
    pub fn x_range(&self) -> Range {
        Range::new(self.origin.x, self.origin.x + self.size.x)
    }

    /// Vertical extent `[origin.y, origin.y + size.y]`
    #[inline]
    pub fn y_range(&self) -> Range {
        Range::new(self.origin.y, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(&self) -> Vector2D {
        self.origin + self.size / 2.0
    }

    /// Corner `index % 4`: bottom-right, top-right, top-left, origin
    pub fn corner(&self, index: usize) -> Vector2D {
        match index % 4 {
            0 => Vector2D::new(self.origin.x + self.size.x, self.origin.y),
            1 => self.origin + self.size,
            2 => Vector2D::new(self.origin.x, self.origin.y + self.size.y),
            _ => self.origin,
        }
    }

    /// All four corners in winding order
    #[inline]
    pub fn corners(&self) -> [Vector2D; 4] {
        [self.corner(0), self.corner(1), self.corner(2), self.corner(3)]
    }

    /// Grow the box just enough to contain `point`
    pub fn enlarge(&self, point: Vector2D) -> Self {
        let origin = Vector2D::new(self.origin.x.min(point.x), self.origin.y.min(point.y));
        let far = Vector2D::new(
            (self.origin.x + self.size.x).max(point.x),
            (self.origin.y + self.size.y).max(point.y),
        );
        Self::new(origin, far - origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rectangle {
        Rectangle::new(Vector2D::new(1.0, 2.0), Vector2D::new(4.0, 3.0))
    }

    #[test]
    fn test_corners_winding() {
        let r = rect();
        assert_eq!(r.corner(0), Vector2D::new(5.0, 2.0));
        assert_eq!(r.corner(1), Vector2D::new(5.0, 5.0));
        assert_eq!(r.corner(2), Vector2D::new(1.0, 5.0));
        assert_eq!(r.corner(3), Vector2D::new(1.0, 2.0));
        assert_eq!(r.corner(5), r.corner(1));
    }

    #[test]
    fn test_center_and_ranges() {
        let r = rect();
        assert_eq!(r.center(), Vector2D::new(3.0, 3.5));
        assert_eq!(r.x_range(), Range::new(1.0, 5.0));
        assert_eq!(r.y_range(), Range::new(2.0, 5.0));
    }

    #[test]
    fn test_enlarge() {
        let r = rect().enlarge(Vector2D::new(-1.0, 7.0));
        assert_eq!(r, Rectangle::new(Vector2D::new(-1.0, 2.0), Vector2D::new(6.0, 5.0)));

        // A point already inside changes nothing
        assert_eq!(rect().enlarge(Vector2D::new(2.0, 3.0)), rect());
    }
}
