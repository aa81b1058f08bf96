//! Per-vector visibility toggles.

use serde::{Deserialize, Serialize};

use crate::scene::vectors::FrameKind;

/// Which frame vectors a presentation layer should draw.
///
/// Pure state; hiding a vector never skips its computation, the readouts are
/// always derived from the full scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorVisibility {
    /// Show the field-frame vector
    pub field: bool,
    /// Show the robot-frame vector
    pub robot: bool,
    /// Show the camera-frame vector
    pub camera: bool,
}

impl Default for VectorVisibility {
    fn default() -> Self {
        Self {
            field: true,
            robot: true,
            camera: true,
        }
    }
}

impl VectorVisibility {
    /// Whether a frame's vector is visible.
    pub fn is_visible(&self, kind: FrameKind) -> bool {
        match kind {
            FrameKind::Field => self.field,
            FrameKind::Robot => self.robot,
            FrameKind::Camera => self.camera,
        }
    }

    /// Show or hide one frame's vector.
    pub fn set(&mut self, kind: FrameKind, visible: bool) {
        match kind {
            FrameKind::Field => self.field = visible,
            FrameKind::Robot => self.robot = visible,
            FrameKind::Camera => self.camera = visible,
        }
    }

    /// Flip one frame's vector.
    pub fn toggle(&mut self, kind: FrameKind) {
        self.set(kind, !self.is_visible(kind));
    }
}
