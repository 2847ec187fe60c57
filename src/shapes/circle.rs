use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::Vector2D;

/// Circle; a negative radius is the caller's problem
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Circle {
    pub center: Vector2D,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vector2D, radius: f32) -> Self {
        Self { center, radius }
    }
}
