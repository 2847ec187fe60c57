//! Circle predicates
//!
//! Every circle test reduces to "is some nearest point within the radius?".

use crate::math::{Vector2D, clamp_on_range};
use crate::shapes::{Circle, Line, LineSegment, OrientedRectangle, Rectangle};

#[inline]
pub fn circles_collide(a: Circle, b: Circle) -> bool {
    let radius_sum = a.radius + b.radius;
    (a.center - b.center).length() <= radius_sum
}

#[inline]
pub fn circle_point_collide(circle: Circle, point: Vector2D) -> bool {
    (circle.center - point).length() <= circle.radius
}

/// Nearest point on the line is the centre's projection onto it
pub fn circle_line_collide(circle: Circle, line: Line) -> bool {
    let lc = circle.center - line.base;
    let p = lc.project(line.direction);
    let nearest = line.base + p;
    circle_point_collide(circle, nearest)
}

/// Endpoints first, then the projected nearest point if it falls on the segment
pub fn circle_segment_collide(circle: Circle, segment: LineSegment) -> bool {
    if circle_point_collide(circle, segment.point1) || circle_point_collide(circle, segment.point2) {
        return true;
    }

    let d = segment.direction();
    let lc = circle.center - segment.point1;
    let p = lc.project(d);
    let nearest = segment.point1 + p;
    circle_point_collide(circle, nearest) && p.length() <= d.length() && 0.0 <= p.dot(d)
}

/// Clamp the centre into the box to find the nearest point
pub fn circle_rectangle_collide(circle: Circle, rect: Rectangle) -> bool {
    let clamped = Vector2D::new(
        clamp_on_range(circle.center.x, rect.origin.x, rect.origin.x + rect.size.x),
        clamp_on_range(circle.center.y, rect.origin.y, rect.origin.y + rect.size.y),
    );
    circle_point_collide(circle, clamped)
}

/// Circle against a rotated box, tested in the box's local frame
pub fn circle_oriented_rectangle_collide(circle: Circle, rect: OrientedRectangle) -> bool {
    let local = Circle::new(rect.to_local(circle.center), circle.radius);
    circle_rectangle_collide(local, rect.local_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;
    use proptest::prelude::*;

    fn v(x: f32, y: f32) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn test_circles_collide() {
        let a = Circle::new(v(4.0, 4.0), 2.0);
        let b = Circle::new(v(7.0, 4.0), 2.0);
        let c = Circle::new(v(10.0, 4.0), 2.0);
        assert!(circles_collide(a, b));
        assert!(circles_collide(b, c));
        assert!(!circles_collide(a, c));
    }

    #[test]
    fn test_circles_touching() {
        let a = Circle::new(v(0.0, 0.0), 2.0);
        let b = Circle::new(v(3.0, 4.0), 3.0);
        assert!(circles_collide(a, b));
    }

    #[test]
    fn test_circle_point_collide() {
        let c = Circle::new(v(6.0, 4.0), 3.0);
        assert!(circle_point_collide(c, v(8.0, 3.0)));
        assert!(circle_point_collide(c, v(6.0, 7.0)));
        assert!(!circle_point_collide(c, v(11.0, 7.0)));
    }

    #[test]
    fn test_circle_line_collide() {
        let c = Circle::new(v(6.0, 4.0), 2.0);
        assert!(circle_line_collide(c, Line::new(v(4.0, 2.0), v(1.0, 1.0))));
        assert!(circle_line_collide(c, Line::new(v(0.0, 5.0), v(1.0, 0.0))));
        assert!(!circle_line_collide(c, Line::new(v(0.0, 0.0), v(1.0, 0.0))));
    }

    #[test]
    fn test_circle_segment_collide() {
        let c = Circle::new(v(4.0, 4.0), 2.0);
        // an endpoint inside
        assert!(circle_segment_collide(c, LineSegment::new(v(5.0, 5.0), v(9.0, 9.0))));
        // passes through the middle, endpoints outside
        assert!(circle_segment_collide(c, LineSegment::new(v(0.0, 5.0), v(8.0, 5.0))));
        // endpoints outside and the nearest point is off the end
        assert!(!circle_segment_collide(c, LineSegment::new(v(10.0, 4.0), v(12.0, 4.0))));
        assert!(!circle_segment_collide(c, LineSegment::new(v(12.0, 4.0), v(10.0, 4.0))));
        // runs past well clear of the circle
        assert!(!circle_segment_collide(c, LineSegment::new(v(8.0, 6.0), v(13.0, 6.0))));
    }

    #[test]
    fn test_circle_rectangle_collide() {
        let r = Rectangle::new(v(3.0, 1.0), v(6.0, 4.0));
        assert!(!circle_rectangle_collide(Circle::new(v(1.0, 3.0), 1.5), r));
        assert!(circle_rectangle_collide(Circle::new(v(1.0, 3.0), 2.0), r));
        assert!(circle_rectangle_collide(Circle::new(v(5.0, 3.0), 0.1), r));
        // off a corner: nearest point is (9, 5), five away
        assert!(!circle_rectangle_collide(Circle::new(v(12.0, 9.0), 4.9), r));
        assert!(circle_rectangle_collide(Circle::new(v(12.0, 9.0), 5.0), r));
    }

    #[test]
    fn test_circle_oriented_rectangle_collide() {
        // quarter turn: [4, 6] x [2, 8]
        let r = OrientedRectangle::new(v(5.0, 5.0), v(3.0, 1.0), PI / 2.0);
        assert!(!circle_oriented_rectangle_collide(Circle::new(v(8.0, 5.0), 1.5), r));
        assert!(circle_oriented_rectangle_collide(Circle::new(v(8.0, 5.0), 2.5), r));
        assert!(circle_oriented_rectangle_collide(Circle::new(v(5.0, 9.0), 1.5), r));
        assert!(!circle_oriented_rectangle_collide(Circle::new(v(5.0, 11.0), 1.5), r));

        let flat = OrientedRectangle::new(v(0.0, 0.0), v(2.0, 1.0), 0.0);
        assert!(circle_oriented_rectangle_collide(Circle::new(v(3.0, 0.0), 1.5), flat));
        assert!(!circle_oriented_rectangle_collide(Circle::new(v(3.5, 0.0), 1.0), flat));
    }

    proptest! {
        #[test]
        fn prop_circles_collide_iff_within_radius_sum(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, ar in 0.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, br in 0.0f32..50.0,
        ) {
            let a = Circle::new(v(ax, ay), ar);
            let b = Circle::new(v(bx, by), br);
            let expected = a.center.distance(b.center) <= a.radius + b.radius;
            prop_assert_eq!(circles_collide(a, b), expected);
        }

        #[test]
        fn prop_circle_centred_in_rectangle_hits(
            rx in -50.0f32..50.0, ry in -50.0f32..50.0, w in 0.0f32..20.0, h in 0.0f32..20.0,
            tx in 0.0f32..1.0, ty in 0.0f32..1.0,
        ) {
            let r = Rectangle::new(v(rx, ry), v(w, h));
            let inside = v(rx + w * tx, ry + h * ty);
            prop_assert!(circle_rectangle_collide(Circle::new(inside, 0.0), r));
        }

        #[test]
        fn prop_circle_point_matches_zero_radius_circles(
            cx in -100.0f32..100.0, cy in -100.0f32..100.0, r in 0.0f32..50.0,
            px in -100.0f32..100.0, py in -100.0f32..100.0,
        ) {
            let c = Circle::new(v(cx, cy), r);
            let p = v(px, py);
            prop_assert_eq!(circle_point_collide(c, p), circles_collide(c, Circle::new(p, 0.0)));
        }
    }
}
