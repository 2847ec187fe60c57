//! Vector and range algebra
//!
//! Everything downstream compares floats through [`Tolerance`], never with `==`,
//! since rotation and projection accumulate rounding error.

pub mod range;
pub mod tolerance;
pub mod vector;

pub use range::{Range, clamp_on_range, overlapping};
pub use tolerance::Tolerance;
pub use vector::Vector2D;
