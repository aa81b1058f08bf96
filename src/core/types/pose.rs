//! Entity poses on the field.

use serde::{Deserialize, Serialize};

use crate::core::math::normalize_degrees;
use crate::core::types::Point2D;

/// Pose of an entity in its parent frame.
///
/// Position (x, y) in field units plus heading in degrees. The heading is
/// normalized to [-180, 180) on construction; a non-finite heading is kept
/// as-is and propagates through any computation that touches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in field units
    pub x: f64,
    /// Y position in field units
    pub y: f64,
    /// Heading in degrees, normalized to [-180, 180)
    pub rotation_degrees: f64,
}

impl Pose2D {
    /// Create a new pose with the heading normalized to [-180, 180).
    #[inline]
    pub fn new(x: f64, y: f64, rotation_degrees: f64) -> Self {
        Self {
            x,
            y,
            rotation_degrees: normalize_degrees(rotation_degrees),
        }
    }

    /// Identity pose at the origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_degrees: 0.0,
        }
    }

    /// Position component of the pose.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Compose two poses: self ⊕ other.
    ///
    /// Applies `other` relative to `self`'s frame.
    /// ```text
    /// C = A ⊕ B:
    ///   C.x = A.x + B.x * cos(A.θ) - B.y * sin(A.θ)
    ///   C.y = A.y + B.x * sin(A.θ) + B.y * cos(A.θ)
    ///   C.θ = normalize(A.θ + B.θ)
    /// ```
    #[inline]
    pub fn compose(&self, other: &Pose2D) -> Pose2D {
        let (sin_t, cos_t) = self.rotation_degrees.to_radians().sin_cos();
        Pose2D::new(
            self.x + other.x * cos_t - other.y * sin_t,
            self.y + other.x * sin_t + other.y * cos_t,
            self.rotation_degrees + other.rotation_degrees,
        )
    }

    /// Inverse of this pose: the transform that undoes it.
    #[inline]
    pub fn inverse(&self) -> Pose2D {
        let (sin_t, cos_t) = self.rotation_degrees.to_radians().sin_cos();
        Pose2D::new(
            -self.x * cos_t - self.y * sin_t,
            self.x * sin_t - self.y * cos_t,
            -self.rotation_degrees,
        )
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}
