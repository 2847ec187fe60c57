//! 2D vector algebra
//!
//! `Vector2D` doubles as a point and a direction. It is layout-compatible with
//! `glam::Vec2` and hands its arithmetic to glam; only the rules glam does not
//! share (zero-safe division, unit and projection, and the kernel's rotation
//! convention) are written out here.

use std::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tolerance::Tolerance;

/// A point or direction in the plane
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Reinterpret a glam point buffer without copying
    #[inline]
    pub fn from_vec2_slice(points: &[Vec2]) -> &[Self] {
        bytemuck::cast_slice(points)
    }

    /// Euclidean length
    #[inline]
    pub fn length(self) -> f32 {
        self.as_vec2().length()
    }

    /// Distance between two points
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Unit vector in the same direction, or `self` when the length is zero
    pub fn unit(self) -> Self {
        let length = self.length();
        if length > 0.0 { self / length } else { self }
    }

    /// Rotate by `radians` using `x' = x·cos + y·sin`, `y' = x·sin + y·cos`
    ///
    /// Oriented rectangle corners and the local-frame transform both go through
    /// this one function, so the two always agree with each other.
    pub fn rotate(self, radians: f32) -> Self {
        let (sine, cosine) = radians.sin_cos();
        Self::new(
            self.x * cosine + self.y * sine,
            self.x * sine + self.y * cosine,
        )
    }

    /// Quarter turn: `(x, y) -> (-y, x)`
    #[inline]
    pub fn rotate_90(self) -> Self {
        self.as_vec2().perp().into()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.as_vec2().dot(other.as_vec2())
    }

    /// Projection of `self` onto `onto`; returns `onto` if it is the zero vector
    pub fn project(self, onto: Self) -> Self {
        let d = onto.dot(onto);
        if d > 0.0 {
            onto * (self.dot(onto) / d)
        } else {
            onto
        }
    }

    /// Angle between two vectors in radians, in `[0, π]`
    pub fn enclosed_angle(self, other: Self) -> f32 {
        let dp = self.unit().dot(other.unit());
        // unit vectors can still produce a dot product a hair outside [-1, 1]
        dp.clamp(-1.0, 1.0).acos()
    }

    /// Component-wise equality under the shared tolerance
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_with(other, Tolerance::DEFAULT)
    }

    /// Component-wise equality under a caller-supplied tolerance
    #[inline]
    pub fn approx_eq_with(self, other: Self, tolerance: Tolerance) -> bool {
        let diff = self.as_vec2() - other.as_vec2();
        tolerance.is_zero(diff.x) && tolerance.is_zero(diff.y)
    }

    /// Whether the two vectors are parallel (the zero vector is parallel to all)
    #[inline]
    pub fn is_parallel(self, other: Self) -> bool {
        Tolerance::DEFAULT.is_zero(self.as_vec2().perp_dot(other.as_vec2()))
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        (self.as_vec2() + rhs.as_vec2()).into()
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        (self.as_vec2() - rhs.as_vec2()).into()
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        (-self.as_vec2()).into()
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        (self.as_vec2() * scalar).into()
    }
}

/// Division by exactly zero yields the zero vector instead of infinities.
impl Div<f32> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, divisor: f32) -> Self {
        if divisor != 0.0 {
            (self.as_vec2() / divisor).into()
        } else {
            Self::ZERO
        }
    }
}

impl From<Vec2> for Vector2D {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vec2 {
    #[inline]
    fn from(v: Vector2D) -> Self {
        v.as_vec2()
    }
}

impl From<(f32, f32)> for Vector2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
