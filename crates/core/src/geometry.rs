//! Geometry module - 2D points and rigid-motion transforms
//!
//! Board space uses x to the right and y downwards, one unit per cell, with
//! cell (x, y) covering the square `[x, x + 1] x [y, y + 1]`.
//! Angles are in radians and positive angles turn anticlockwise as seen on a
//! y-down screen.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Tolerance used for degenerate-geometry checks.
pub const EPSILON: f32 = 1e-5;

/// A point or vector in board space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate about the origin by `angle` (anticlockwise on screen).
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.y * sin,
            y: -self.x * sin + self.y * cos,
        }
    }

    /// 2D cross product (z component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Approximate equality within [`EPSILON`] per component.
    pub fn approx_eq(self, other: Vec2) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Rigid motion applied to a cell's quad at draw time.
///
/// A point `p` maps to `pivot + rotate(p - pivot, angle) + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub angle: f32,
    pub pivot: Vec2,
    pub offset: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        angle: 0.0,
        pivot: Vec2::ZERO,
        offset: Vec2::ZERO,
    };

    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.pivot + (point - self.pivot).rotated(self.angle) + self.offset
    }

    pub fn is_identity(&self) -> bool {
        self.angle.abs() <= EPSILON && self.offset.approx_eq(Vec2::ZERO)
    }

    /// Row-major 2x3 affine matrix `[[a, b, tx], [c, d, ty]]` so that
    /// `x' = a*x + b*y + tx` and `y' = c*x + d*y + ty`.
    pub fn to_matrix(&self) -> [[f32; 3]; 2] {
        let (sin, cos) = self.angle.sin_cos();
        let origin = self.apply(Vec2::ZERO);
        [[cos, sin, origin.x], [-sin, cos, origin.y]]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
