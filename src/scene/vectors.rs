//! Derived tag vectors per frame.
//!
//! The readouts the visualizer displays next to each drawn vector: the tag's
//! coordinates expressed in the field, robot, and camera frames, with the
//! magnitude and angle of each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::frame::transform;
use crate::core::math::{angle_of, magnitude_of};
use crate::core::types::Point2D;
use crate::scene::state::SceneState;

/// The three frames a tag vector is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// Field frame, the root
    Field,
    /// Robot-local frame
    Robot,
    /// Camera-local frame
    Camera,
}

impl FrameKind {
    /// All frames in display order.
    pub const ALL: [FrameKind; 3] = [FrameKind::Field, FrameKind::Robot, FrameKind::Camera];

    /// Lower-case display name.
    pub fn name(&self) -> &'static str {
        match self {
            FrameKind::Field => "field",
            FrameKind::Robot => "robot",
            FrameKind::Camera => "camera",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(FrameKind::Field),
            "robot" => Ok(FrameKind::Robot),
            "camera" => Ok(FrameKind::Camera),
            other => Err(format!("unknown frame: {}", other)),
        }
    }
}

/// One frame's tag vector readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameVector {
    /// Vector components in the frame
    pub components: Point2D,
    /// Euclidean length of the vector
    pub magnitude: f64,
    /// Readout angle in degrees, [-180, 180)
    pub angle_degrees: f64,
}

impl FrameVector {
    /// Build a readout from raw components.
    ///
    /// The angle uses the display's swapped convention: `angle_of(y, x)`,
    /// measured from the vertically drawn +X axis.
    pub fn from_components(components: Point2D) -> Self {
        Self {
            components,
            magnitude: magnitude_of(components.x, components.y),
            angle_degrees: angle_of(components.y, components.x),
        }
    }

    /// Label text in the form the visualizer draws beside each vector:
    /// `(x, y) @ a°`, one decimal place.
    pub fn label(&self) -> String {
        format!(
            "({:.1}, {:.1}) @ {:.1}\u{00B0}",
            self.components.x, self.components.y, self.angle_degrees
        )
    }
}

/// The full readout set: tag vector in every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorReadouts {
    /// Tag position in the field frame
    pub field: FrameVector,
    /// Tag position in the robot frame
    pub robot: FrameVector,
    /// Tag position in the camera frame
    pub camera: FrameVector,
}

impl VectorReadouts {
    /// Compute all three readouts from one scene snapshot.
    ///
    /// Field: the tag's coordinates directly. Robot: the tag carried into
    /// the frame the robot pose defines. Camera: the robot-frame vector
    /// translated by the camera offset; the camera shares the robot's
    /// rotation so no further rotation is applied. The two-stage camera
    /// path is equivalent to transforming the tag directly into the frame
    /// of [`SceneState::camera_pose`].
    pub fn compute(scene: &SceneState) -> Self {
        let field = scene.tag.position();
        let robot = transform(
            field,
            scene.robot.position(),
            scene.robot.rotation_degrees,
        );
        let camera = transform(robot, scene.camera_offset, 0.0);

        Self {
            field: FrameVector::from_components(field),
            robot: FrameVector::from_components(robot),
            camera: FrameVector::from_components(camera),
        }
    }

    /// Readout for one frame.
    pub fn get(&self, kind: FrameKind) -> &FrameVector {
        match kind {
            FrameKind::Field => &self.field,
            FrameKind::Robot => &self.robot,
            FrameKind::Camera => &self.camera,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pose2D;
    use approx::assert_relative_eq;

    #[test]
    fn test_field_readout_is_tag_position() {
        let scene = SceneState::new(
            Pose2D::identity(),
            Point2D::ZERO,
            Pose2D::new(100.0, 100.0, -180.0),
        );
        let readouts = VectorReadouts::compute(&scene);
        assert_relative_eq!(readouts.field.components.x, 100.0);
        assert_relative_eq!(readouts.field.components.y, 100.0);
        assert_relative_eq!(readouts.field.angle_degrees, 45.0);
    }

    #[test]
    fn test_camera_is_robot_minus_offset() {
        let scene = SceneState::new(
            Pose2D::new(10.0, 0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Pose2D::new(20.0, 6.0, 0.0),
        );
        let readouts = VectorReadouts::compute(&scene);
        assert_relative_eq!(readouts.robot.components.x, 10.0);
        assert_relative_eq!(readouts.robot.components.y, 6.0);
        assert_relative_eq!(readouts.camera.components.x, 7.0);
        assert_relative_eq!(readouts.camera.components.y, 2.0);
    }

    #[test]
    fn test_label_format() {
        let v = FrameVector::from_components(Point2D::new(0.0, 100.0));
        assert_eq!(v.label(), "(0.0, 100.0) @ 90.0\u{00B0}");
    }

    #[test]
    fn test_frame_kind_parse() {
        assert_eq!("robot".parse::<FrameKind>().unwrap(), FrameKind::Robot);
        assert_eq!("CAMERA".parse::<FrameKind>().unwrap(), FrameKind::Camera);
        assert!("tag".parse::<FrameKind>().is_err());
    }

    #[test]
    fn test_get_matches_fields() {
        let scene = SceneState::default();
        let readouts = VectorReadouts::compute(&scene);
        assert_eq!(*readouts.get(FrameKind::Field), readouts.field);
        assert_eq!(*readouts.get(FrameKind::Robot), readouts.robot);
        assert_eq!(*readouts.get(FrameKind::Camera), readouts.camera);
    }
}
