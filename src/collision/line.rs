//! Infinite line predicates

use super::point::points_collide;
use crate::math::Vector2D;
use crate::shapes::{Line, LineSegment, OrientedRectangle, Rectangle};

/// Both lines are parallel and pass through the same points
pub fn equivalent_lines(a: Line, b: Line) -> bool {
    if !a.direction.is_parallel(b.direction) {
        return false;
    }
    let d = a.base - b.base;
    d.is_parallel(a.direction)
}

/// Non-parallel lines always meet; parallel ones only if they coincide
pub fn lines_collide(a: Line, b: Line) -> bool {
    if a.direction.is_parallel(b.direction) {
        equivalent_lines(a, b)
    } else {
        true
    }
}

/// Point lies on the line
pub fn line_point_collide(line: Line, point: Vector2D) -> bool {
    if points_collide(point, line.base) {
        return true;
    }
    let lp = point - line.base;
    lp.is_parallel(line.direction)
}

/// Both endpoints of `segment` lie strictly on the same side of `axis`
#[inline]
pub fn segment_on_one_side(axis: Line, segment: LineSegment) -> bool {
    axis.side_of(segment.point1) * axis.side_of(segment.point2) > 0.0
}

#[inline]
pub fn line_segment_collide(line: Line, segment: LineSegment) -> bool {
    !segment_on_one_side(line, segment)
}

/// The line passes between some pair of adjacent corners
///
/// Corners are visited in winding order; if the signed distances of any two
/// consecutive ones are not both strictly on one side, the line crosses or
/// touches the box.
pub fn line_rectangle_collide(line: Line, rect: Rectangle) -> bool {
    let [d0, d1, d2, d3] = rect.corners().map(|corner| line.side_of(corner));
    d0 * d1 <= 0.0 || d1 * d2 <= 0.0 || d2 * d3 <= 0.0
}

/// Line against a rotated box, tested in the box's local frame
pub fn line_oriented_rectangle_collide(line: Line, rect: OrientedRectangle) -> bool {
    line_rectangle_collide(rect.to_local_line(line), rect.local_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;

    fn v(x: f32, y: f32) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn test_lines_collide() {
        let down = v(5.0, -1.0);
        let up = v(5.0, 2.0);

        let l1 = Line::new(v(3.0, 5.0), down);
        let l2 = Line::new(v(3.0, 5.0), up);
        let l3 = Line::new(v(3.0, 2.0), up);
        let l4 = Line::new(v(8.0, 4.0), down);

        assert!(lines_collide(l1, l2));
        assert!(lines_collide(l1, l3));
        assert!(!lines_collide(l2, l3));
        assert!(lines_collide(l1, l4));
    }

    #[test]
    fn test_equivalent_lines() {
        let a = Line::new(v(0.0, 0.0), v(2.0, 1.0));
        let b = Line::new(v(4.0, 2.0), v(-4.0, -2.0));
        let c = Line::new(v(4.0, 3.0), v(2.0, 1.0));
        assert!(equivalent_lines(a, b));
        assert!(!equivalent_lines(a, c));
        // not parallel at all
        assert!(!equivalent_lines(a, Line::new(v(0.0, 0.0), v(1.0, 2.0))));
    }

    #[test]
    fn test_line_point_collide() {
        let l = Line::new(v(0.0, 0.0), v(2.0, 1.0));
        assert!(line_point_collide(l, v(4.0, 2.0)));
        assert!(line_point_collide(l, v(-6.0, -3.0)));
        assert!(line_point_collide(l, v(0.0, 0.0)));
        assert!(!line_point_collide(l, v(4.0, 3.0)));
    }

    #[test]
    fn test_segment_on_one_side() {
        let axis = Line::new(v(3.0, 4.0), v(8.0, -3.0));
        let above = LineSegment::new(v(8.0, 4.0), v(11.0, 7.0));
        let across = LineSegment::new(v(5.0, 0.0), v(5.0, 8.0));
        assert!(segment_on_one_side(axis, above));
        assert!(!segment_on_one_side(axis, across));
        assert!(!line_segment_collide(axis, above));
        assert!(line_segment_collide(axis, across));
    }

    #[test]
    fn test_line_segment_touching_endpoint() {
        let axis = Line::new(v(0.0, 0.0), v(1.0, 0.0));
        let s = LineSegment::new(v(2.0, 0.0), v(2.0, 5.0));
        assert!(line_segment_collide(axis, s));
    }

    #[test]
    fn test_line_rectangle_collide() {
        let r = Rectangle::new(v(1.0, 1.0), v(4.0, 4.0));
        assert!(line_rectangle_collide(Line::new(v(0.0, 0.0), v(1.0, 1.0)), r));
        assert!(line_rectangle_collide(Line::new(v(0.0, 3.0), v(1.0, 0.0)), r));
        // touching the top edge
        assert!(line_rectangle_collide(Line::new(v(0.0, 5.0), v(1.0, 0.0)), r));
        assert!(!line_rectangle_collide(Line::new(v(0.0, 6.0), v(1.0, 0.0)), r));
        assert!(!line_rectangle_collide(Line::new(v(0.0, 7.0), v(1.0, -0.2)), r));
    }

    #[test]
    fn test_line_oriented_rectangle_collide() {
        // quarter turn: occupies [4, 6] x [2, 8]
        let r = OrientedRectangle::new(v(5.0, 5.0), v(3.0, 1.0), PI / 2.0);
        let vertical = v(0.0, 1.0);
        let horizontal = v(1.0, 0.0);
        assert!(line_oriented_rectangle_collide(Line::new(v(5.5, 0.0), vertical), r));
        assert!(!line_oriented_rectangle_collide(Line::new(v(7.0, 0.0), vertical), r));
        assert!(line_oriented_rectangle_collide(Line::new(v(0.0, 7.5), horizontal), r));
        assert!(!line_oriented_rectangle_collide(Line::new(v(0.0, 8.5), horizontal), r));
    }
}
