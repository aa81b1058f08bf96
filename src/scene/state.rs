//! Scene snapshot and input limits.

use serde::{Deserialize, Serialize};

use crate::core::types::{Point2D, Pose2D};

/// One snapshot of the scene.
///
/// The fixed set of entities the visualizer manipulates: the robot's field
/// pose, the camera's offset on the robot (the camera shares the robot's
/// rotation), and the tag's field pose. A `Copy` value record; whoever owns
/// the input surface builds a fresh snapshot per change and recomputes the
/// readouts from it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneState {
    /// Robot pose in the field frame
    pub robot: Pose2D,
    /// Camera offset in the robot frame, no rotation of its own
    pub camera_offset: Point2D,
    /// Tag pose in the field frame
    pub tag: Pose2D,
}

impl SceneState {
    /// Create a scene snapshot.
    pub fn new(robot: Pose2D, camera_offset: Point2D, tag: Pose2D) -> Self {
        Self {
            robot,
            camera_offset,
            tag,
        }
    }

    /// The camera's absolute pose in the field frame: robot ⊕ offset.
    ///
    /// The camera frame adds no rotation of its own, so the result carries
    /// the robot's heading.
    #[inline]
    pub fn camera_pose(&self) -> Pose2D {
        self.robot.compose(&Pose2D::new(
            self.camera_offset.x,
            self.camera_offset.y,
            0.0,
        ))
    }
}

/// Input ranges for scene values.
///
/// Mirrors the control ranges of the visualizer page: positions run over the
/// drawn field extent, rotations over a full turn expressed as [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneLimits {
    /// Smallest accepted position component
    pub position_min: f64,
    /// Largest accepted position component
    pub position_max: f64,
    /// Smallest accepted rotation in degrees
    pub rotation_min: f64,
    /// Largest accepted rotation in degrees
    pub rotation_max: f64,
}

impl Default for SceneLimits {
    fn default() -> Self {
        Self {
            position_min: -200.0,
            position_max: 200.0,
            rotation_min: -180.0,
            rotation_max: 180.0,
        }
    }
}

impl SceneLimits {
    /// Clamp a position component into range.
    #[inline]
    pub fn clamp_position(&self, value: f64) -> f64 {
        value.clamp(self.position_min, self.position_max)
    }

    /// Clamp a rotation into range.
    #[inline]
    pub fn clamp_rotation(&self, value: f64) -> f64 {
        value.clamp(self.rotation_min, self.rotation_max)
    }

    /// Clamp every component of a pose into range.
    pub fn clamp_pose(&self, pose: Pose2D) -> Pose2D {
        Pose2D::new(
            self.clamp_position(pose.x),
            self.clamp_position(pose.y),
            self.clamp_rotation(pose.rotation_degrees),
        )
    }

    /// Clamp every component of an offset into range.
    pub fn clamp_offset(&self, offset: Point2D) -> Point2D {
        Point2D::new(
            self.clamp_position(offset.x),
            self.clamp_position(offset.y),
        )
    }

    /// Clamp a whole scene snapshot.
    pub fn clamp_scene(&self, scene: SceneState) -> SceneState {
        SceneState {
            robot: self.clamp_pose(scene.robot),
            camera_offset: self.clamp_offset(scene.camera_offset),
            tag: self.clamp_pose(scene.tag),
        }
    }
}
