//! Axis-aligned rectangle predicates

use crate::math::Vector2D;
use crate::shapes::{LineSegment, OrientedRectangle, Rectangle};

/// Overlap on both world axes (edges touching counts)
#[inline]
pub fn rectangles_collide(a: Rectangle, b: Rectangle) -> bool {
    a.x_range().overlaps(b.x_range()) && a.y_range().overlaps(b.y_range())
}

/// Point inside the rectangle, bounds included
#[inline]
pub fn point_rectangle_collide(point: Vector2D, rect: Rectangle) -> bool {
    rect.x_range().contains(point.x) && rect.y_range().contains(point.y)
}

/// Whether the direction of `axis` separates the segment from the rectangle
///
/// Both are projected onto the axis direction; the rectangle's projection is
/// the hull of its two vertical edges, which together hold all four corners.
pub fn separating_axis_for_rectangle(axis: LineSegment, rect: Rectangle) -> bool {
    let n = axis.point1 - axis.point2;
    let edge_a = LineSegment::new(rect.corner(0), rect.corner(1));
    let edge_b = LineSegment::new(rect.corner(2), rect.corner(3));
    let rect_range = edge_a.project(n).hull(edge_b.project(n));
    let axis_range = axis.project(n);
    !axis_range.overlaps(rect_range)
}

/// Axis-aligned against rotated rectangle
///
/// The rotated box's axis-aligned hull settles the two world axes (and most
/// misses). The remaining candidate axes are the rotated box's own edge
/// directions.
///
/// Corners come out of `rotate`, so exact contact at a quarter or half turn
/// sits within an ulp of the boundary and may go either way.
pub fn rectangle_oriented_rectangle_collide(rect: Rectangle, oriented: OrientedRectangle) -> bool {
    if !rectangles_collide(oriented.hull(), rect) {
        return false;
    }

    for index in 0..2 {
        let edge = oriented.edge(index);
        if separating_axis_for_rectangle(edge, rect) {
            log::trace!("edge {index} of {oriented:?} separates it from {rect:?}");
            return false;
        }
    }
    true
}
