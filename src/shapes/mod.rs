//! Shape value types
//!
//! All shapes are plain `#[repr(C)]` data: `Copy`, serde-serializable, and
//! `bytemuck::Pod` so an engine can hand over packed buffers directly. None of
//! them validate their fields; degenerate sizes and radii flow through the
//! predicates as ordinary numbers.
//!
//! Winding conventions used by every predicate:
//! - [`Rectangle::corner`]: 0 = bottom-right, 1 = top-right, 2 = top-left, 3 = origin
//! - [`OrientedRectangle::corner`]: local (-hx, hy), (hx, hy), (hx, -hy), (-hx, -hy)
//! - [`OrientedRectangle::edge`]: top, right, bottom, left (edge `i` starts at corner `i`)

pub mod circle;
pub mod line;
pub mod oriented;
pub mod rectangle;

pub use circle::Circle;
pub use line::{Line, LineSegment};
pub use oriented::OrientedRectangle;
pub use rectangle::Rectangle;
