//! Vector math for angular-separation calculations.
//!
//! Positions arrive from the ephemeris as 3D cartesian vectors in km. The
//! scanner only ever needs vector differences, normalization, the angle
//! between two directions, and a planar projection for the sky diagrams.

use std::ops::{Neg, Sub};

/// Error type for vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A zero-length vector has no direction; normalizing it is undefined.
    #[error("degenerate zero-length vector")]
    DegenerateVector,
}

/// A 3-component cartesian vector (km).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length, preserving only direction.
    ///
    /// # Errors
    /// [`MathError::DegenerateVector`] when the vector has zero length.
    pub fn unit(&self) -> Result<Vec3, MathError> {
        let mag = self.norm();
        if mag == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(Vec3::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Projection onto the xy plane, used for the polar sky diagrams.
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Bearing of the xy projection in radians (`atan2(y, x)`).
    pub fn bearing(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Angle between two vectors in radians, range [0, pi].
///
/// Both vectors are normalized and the dot product of the unit vectors is
/// clamped to [-1, 1] before the arccosine, guarding against floating-point
/// overshoot for near-parallel inputs.
///
/// # Errors
/// [`MathError::DegenerateVector`] when either input has zero length; the
/// angle to a zero-length vector is undefined and must never surface as NaN.
pub fn angle_between(v1: &Vec3, v2: &Vec3) -> Result<f64, MathError> {
    let u1 = v1.unit()?;
    let u2 = v2.unit()?;
    Ok(u1.dot(&u2).clamp(-1.0, 1.0).acos())
}
