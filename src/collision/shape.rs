//! Tagged shape dispatch
//!
//! For callers holding mixed shapes in one collection. Each ordered pair of
//! variants routes to the matching free predicate, swapping arguments for
//! the mirrored pairs, so `a.collides(&b) == b.collides(&a)` by construction
//! for every mixed pair.

use serde::{Deserialize, Serialize};

use super::circle::{
    circle_line_collide, circle_oriented_rectangle_collide, circle_point_collide,
    circle_rectangle_collide, circle_segment_collide, circles_collide,
};
use super::line::{
    line_oriented_rectangle_collide, line_point_collide, line_rectangle_collide,
    line_segment_collide, lines_collide,
};
use super::oriented::{oriented_rectangle_point_collide, oriented_rectangles_collide};
use super::point::{point_segment_collide, points_collide};
use super::rectangle::{
    point_rectangle_collide, rectangle_oriented_rectangle_collide, rectangles_collide,
};
use super::segment::{
    oriented_rectangle_segment_collide, rectangle_segment_collide, segments_collide,
};
use crate::math::Vector2D;
use crate::shapes::{Circle, Line, LineSegment, OrientedRectangle, Rectangle};

/// Which variant a [`Shape`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    Segment,
    Circle,
    Rectangle,
    OrientedRectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Segment,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::OrientedRectangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::OrientedRectangle => "oriented_rectangle",
        }
    }
}

/// Any supported shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Point(Vector2D),
    Line(Line),
    Segment(LineSegment),
    Circle(Circle),
    Rectangle(Rectangle),
    OrientedRectangle(OrientedRectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::OrientedRectangle(_) => ShapeKind::OrientedRectangle,
        }
    }

    /// Whether the two shapes overlap
    pub fn collides(&self, other: &Shape) -> bool {
        match (*self, *other) {
            (Shape::Point(a), Shape::Point(b)) => points_collide(a, b),
            (Shape::Point(p), Shape::Line(l)) | (Shape::Line(l), Shape::Point(p)) => {
                line_point_collide(l, p)
            }
            (Shape::Point(p), Shape::Segment(s)) | (Shape::Segment(s), Shape::Point(p)) => {
                point_segment_collide(p, s)
            }
            (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
                circle_point_collide(c, p)
            }
            (Shape::Point(p), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Point(p)) => {
                point_rectangle_collide(p, r)
            }
            (Shape::Point(p), Shape::OrientedRectangle(r))
            | (Shape::OrientedRectangle(r), Shape::Point(p)) => {
                oriented_rectangle_point_collide(r, p)
            }

            (Shape::Line(a), Shape::Line(b)) => lines_collide(a, b),
            (Shape::Line(l), Shape::Segment(s)) | (Shape::Segment(s), Shape::Line(l)) => {
                line_segment_collide(l, s)
            }
            (Shape::Line(l), Shape::Circle(c)) | (Shape::Circle(c), Shape::Line(l)) => {
                circle_line_collide(c, l)
            }
            (Shape::Line(l), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Line(l)) => {
                line_rectangle_collide(l, r)
            }
            (Shape::Line(l), Shape::OrientedRectangle(r))
            | (Shape::OrientedRectangle(r), Shape::Line(l)) => {
                line_oriented_rectangle_collide(l, r)
            }

            (Shape::Segment(a), Shape::Segment(b)) => segments_collide(a, b),
            (Shape::Segment(s), Shape::Circle(c)) | (Shape::Circle(c), Shape::Segment(s)) => {
                circle_segment_collide(c, s)
            }
            (Shape::Segment(s), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Segment(s)) => {
                rectangle_segment_collide(r, s)
            }
            (Shape::Segment(s), Shape::OrientedRectangle(r))
            | (Shape::OrientedRectangle(r), Shape::Segment(s)) => {
                oriented_rectangle_segment_collide(r, s)
            }

            (Shape::Circle(a), Shape::Circle(b)) => circles_collide(a, b),
            (Shape::Circle(c), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Circle(c)) => {
                circle_rectangle_collide(c, r)
            }
            (Shape::Circle(c), Shape::OrientedRectangle(r))
            | (Shape::OrientedRectangle(r), Shape::Circle(c)) => {
                circle_oriented_rectangle_collide(c, r)
            }

            (Shape::Rectangle(a), Shape::Rectangle(b)) => rectangles_collide(a, b),
            (Shape::Rectangle(a), Shape::OrientedRectangle(b))
            | (Shape::OrientedRectangle(b), Shape::Rectangle(a)) => {
                rectangle_oriented_rectangle_collide(a, b)
            }

            (Shape::OrientedRectangle(a), Shape::OrientedRectangle(b)) => {
                oriented_rectangles_collide(a, b)
            }
        }
    }
}

impl From<Vector2D> for Shape {
    fn from(point: Vector2D) -> Self {
        Shape::Point(point)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<LineSegment> for Shape {
    fn from(segment: LineSegment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<OrientedRectangle> for Shape {
    fn from(rect: OrientedRectangle) -> Self {
        Shape::OrientedRectangle(rect)
    }
}
