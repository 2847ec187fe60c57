//! Pairwise collision predicates
//!
//! One free function per shape pair, each a pure `bool` answer to "do these
//! two shapes overlap?". Boundaries are inclusive: touching counts as a hit.
//! For rotated rectangles the corners are rounded, so exact contact there is
//! only as good as the rounding.
//! No contact points, normals or penetration depths are produced.
//!
//! Predicates against an [`OrientedRectangle`](crate::OrientedRectangle)
//! either run a separating-axis test or move the other shape into the
//! rectangle's local frame and reuse the axis-aligned predicate.
//!
//! [`Shape`] wraps all six shape types for heterogeneous collections and
//! routes every ordered pair onto the matching predicate.

pub mod circle;
pub mod line;
pub mod oriented;
pub mod point;
pub mod rectangle;
pub mod segment;
pub mod shape;

pub use circle::{
    circle_line_collide, circle_oriented_rectangle_collide, circle_point_collide,
    circle_rectangle_collide, circle_segment_collide, circles_collide,
};
pub use line::{
    equivalent_lines, line_oriented_rectangle_collide, line_point_collide,
    line_rectangle_collide, line_segment_collide, lines_collide, segment_on_one_side,
};
pub use oriented::{
    oriented_rectangle_point_collide, oriented_rectangles_collide,
    separating_axis_for_oriented_rectangle,
};
pub use point::{point_segment_collide, points_collide};
pub use rectangle::{
    point_rectangle_collide, rectangle_oriented_rectangle_collide, rectangles_collide,
    separating_axis_for_rectangle,
};
pub use segment::{
    oriented_rectangle_segment_collide, rectangle_segment_collide, segments_collide,
};
pub use shape::{Shape, ShapeKind};
