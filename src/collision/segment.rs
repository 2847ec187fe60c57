//! Line segment predicates

use super::line::{line_rectangle_collide, segment_on_one_side};
use crate::math::Range;
use crate::shapes::{LineSegment, OrientedRectangle, Rectangle};

/// Segment against segment
///
/// Either segment lying wholly on one side of the other's line rules out a
/// hit. Past that, non-parallel segments are reported as colliding; parallel
/// (hence collinear) ones collide when their projections onto the shared
/// direction overlap.
pub fn segments_collide(a: LineSegment, b: LineSegment) -> bool {
    let axis_a = a.line();
    if segment_on_one_side(axis_a, b) {
        return false;
    }
    let axis_b = b.line();
    if segment_on_one_side(axis_b, a) {
        return false;
    }

    if axis_a.direction.is_parallel(axis_b.direction) {
        let range_a = a.project(axis_a.direction);
        let range_b = b.project(axis_a.direction);
        range_a.overlaps(range_b)
    } else {
        true
    }
}

/// The segment's line crosses the box and its extent overlaps the box on both axes
pub fn rectangle_segment_collide(rect: Rectangle, segment: LineSegment) -> bool {
    if !line_rectangle_collide(segment.line(), rect) {
        return false;
    }

    let segment_x = Range::new(segment.point1.x, segment.point2.x).sort();
    if !rect.x_range().sort().overlaps(segment_x) {
        return false;
    }

    let segment_y = Range::new(segment.point1.y, segment.point2.y).sort();
    rect.y_range().sort().overlaps(segment_y)
}

/// Segment against a rotated box, tested in the box's local frame
pub fn oriented_rectangle_segment_collide(rect: OrientedRectangle, segment: LineSegment) -> bool {
    rectangle_segment_collide(rect.local_bounds(), rect.to_local_segment(segment))
}
