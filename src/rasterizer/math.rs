//! 2D vector math for rasterization

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Below this the triangle is treated as having zero area
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// 2D point or vector in pixel space. May be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2D cross product (determinant of the 2x2 matrix [self other])
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Both coordinates rounded to the nearest integer
    pub fn round(self) -> Vec2 {
        Vec2 {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    /// Swap x and y
    pub fn transpose(self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: self.x,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Determinant of the 2x2 matrix with columns `a` and `b`
pub fn determinant(a: Vec2, b: Vec2) -> f32 {
    a.cross(b)
}

/// Barycentric parameters (s, t) of `p` relative to triangle (v0, v1, v2),
/// so that p = v0 + s*(v1 - v0) + t*(v2 - v0).
/// Returns None for a degenerate (zero-area) triangle.
pub fn barycentric(p: Vec2, v0: Vec2, v1: Vec2, v2: Vec2) -> Option<(f32, f32)> {
    let vs1 = v1 - v0;
    let vs2 = v2 - v0;
    let d = determinant(vs1, vs2);

    if d.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let q = p - v0;
    let s = determinant(q, vs2) / d;
    let t = determinant(vs1, q) / d;
    Some((s, t))
}

/// Signed edge function: positive when `p` lies to the left of a -> b
/// (in y-down screen space, clockwise triangles are positive)
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    determinant(b - a, p - a)
}
