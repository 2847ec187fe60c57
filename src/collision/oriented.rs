//! Rotated rectangle predicates

use super::rectangle::point_rectangle_collide;
use crate::math::Vector2D;
use crate::shapes::{LineSegment, OrientedRectangle};

/// Whether the direction of `axis` separates the segment from `rect`
///
/// The rectangle projects onto the axis as the hull of its top and bottom
/// edges; opposite edges together cover all four corners.
pub fn separating_axis_for_oriented_rectangle(axis: LineSegment, rect: OrientedRectangle) -> bool {
    let n = axis.point1 - axis.point2;
    let rect_range = rect.edge(0).project(n).hull(rect.edge(2).project(n));
    let axis_range = axis.project(n);
    !axis_range.overlaps(rect_range)
}

/// Separating axis test between two rotated rectangles
///
/// Opposite edges share a direction, so edges 0 and 1 of each rectangle are
/// the only candidate axes. Projecting an edge onto its own direction spans
/// its rectangle's full extent along that axis.
pub fn oriented_rectangles_collide(a: OrientedRectangle, b: OrientedRectangle) -> bool {
    for (axis_owner, other) in [(a, b), (b, a)] {
        for index in 0..2 {
            let edge = axis_owner.edge(index);
            if separating_axis_for_oriented_rectangle(edge, other) {
                log::trace!("edge {index} of {axis_owner:?} separates it from {other:?}");
                return false;
            }
        }
    }
    true
}

/// Point inside a rotated rectangle, tested in its local frame
#[inline]
pub fn oriented_rectangle_point_collide(rect: OrientedRectangle, point: Vector2D) -> bool {
    point_rectangle_collide(rect.to_local(point), rect.local_bounds())
}
