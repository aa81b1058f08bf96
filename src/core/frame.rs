//! The frame transform.
//!
//! A frame is defined inside its parent by an origin and a rotation.
//! [`Frame::to_local`] carries a parent-frame point into the frame (the
//! inverse of the frame's own rotation); [`Frame::to_parent`] carries it
//! back. The two compose to the identity within floating-point tolerance.

use serde::{Deserialize, Serialize};

use crate::core::types::{Point2D, Pose2D};

/// A coordinate frame expressed in its parent frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Frame origin in parent coordinates
    pub origin: Point2D,
    /// Frame rotation in degrees relative to the parent
    pub rotation_degrees: f64,
}

impl Frame {
    /// Create a frame from an origin and rotation.
    #[inline]
    pub fn new(origin: Point2D, rotation_degrees: f64) -> Self {
        Self {
            origin,
            rotation_degrees,
        }
    }

    /// The frame an entity's pose defines.
    #[inline]
    pub fn from_pose(pose: &Pose2D) -> Self {
        Self::new(pose.position(), pose.rotation_degrees)
    }

    /// Transform a parent-frame point into this frame.
    ///
    /// Translates by the origin, then rotates by the negated frame rotation.
    /// Total over the reals: non-finite coordinates or rotations propagate
    /// into the result, no validation is performed.
    #[inline]
    pub fn to_local(&self, point: Point2D) -> Point2D {
        let rel = point - self.origin;
        let (sin_t, cos_t) = (-self.rotation_degrees.to_radians()).sin_cos();
        Point2D::new(
            rel.x * cos_t - rel.y * sin_t,
            rel.x * sin_t + rel.y * cos_t,
        )
    }

    /// Transform a point in this frame back into the parent frame.
    ///
    /// Inverse of [`Frame::to_local`].
    #[inline]
    pub fn to_parent(&self, point: Point2D) -> Point2D {
        let (sin_t, cos_t) = self.rotation_degrees.to_radians().sin_cos();
        Point2D::new(
            self.origin.x + point.x * cos_t - point.y * sin_t,
            self.origin.y + point.x * sin_t + point.y * cos_t,
        )
    }
}

/// Transform `point` into the frame defined by `origin` and
/// `rotation_degrees`, all expressed in the source frame.
///
/// Flat-form equivalent of [`Frame::to_local`]. Callers with an unrotated
/// target frame pass `0.0`; there is no implicit default.
#[inline]
pub fn transform(point: Point2D, origin: Point2D, rotation_degrees: f64) -> Point2D {
    Frame::new(origin, rotation_degrees).to_local(point)
}
