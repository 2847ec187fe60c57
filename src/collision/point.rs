//! Point predicates

use crate::math::Vector2D;
use crate::shapes::LineSegment;

/// Two points collide when they coincide within tolerance
#[inline]
pub fn points_collide(a: Vector2D, b: Vector2D) -> bool {
    a.approx_eq(b)
}

/// Point lies on the segment
///
/// The offset from `point1` must equal its own projection onto the segment
/// (so it is on the line), be no longer than the segment, and point the same
/// way as the segment.
pub fn point_segment_collide(point: Vector2D, segment: LineSegment) -> bool {
    let d = segment.direction();
    let lp = point - segment.point1;
    let pr = lp.project(d);
    lp.approx_eq(pr) && pr.length() <= d.length() && 0.0 <= pr.dot(d)
}
