//! collide2d - pairwise 2D collision predicates
//!
//! Core modules:
//! - `math`: Vector and range algebra with a shared comparison tolerance
//! - `shapes`: Point, line, segment, circle and rectangle value types
//! - `collision`: One predicate per shape pair, plus tagged `Shape` dispatch
//! - `settings`: Serializable configuration for the verification harness
//!
//! Every predicate is a pure function of its by-value arguments: no allocation,
//! no shared state, safe to call from any number of threads.

pub mod collision;
pub mod math;
pub mod settings;
pub mod shapes;

pub use collision::{Shape, ShapeKind};
pub use math::{Range, Tolerance, Vector2D};
pub use settings::Settings;
pub use shapes::{Circle, Line, LineSegment, OrientedRectangle, Rectangle};

/// Kernel-wide constants
pub mod consts {
    /// Two scalars closer than this compare equal (1/8192)
    pub const EPSILON: f32 = 1.0 / 8192.0;

    /// Pi as used by the angle conversions
    pub const PI: f32 = std::f32::consts::PI;
}

/// Scalar equality under the shared tolerance
#[inline]
pub fn equal_floats(a: f32, b: f32) -> bool {
    Tolerance::DEFAULT.equal(a, b)
}

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * consts::PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians / consts::PI * 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_floats_threshold() {
        assert!(equal_floats(1.0, 1.0));
        assert!(equal_floats(1.0, 1.0 + consts::EPSILON * 0.5));
        assert!(!equal_floats(1.0, 1.0 + consts::EPSILON * 2.0));
        assert!(!equal_floats(0.0, 1.0));
    }

    #[test]
    fn test_angle_conversions() {
        assert!(equal_floats(degrees_to_radians(180.0), consts::PI));
        assert!(equal_floats(radians_to_degrees(consts::PI / 2.0), 90.0));
        assert!(equal_floats(radians_to_degrees(degrees_to_radians(37.5)), 37.5));
    }
}
