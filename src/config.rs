//! TOML configuration for the scene.
//!
//! All values have defaults matching the demo page's initial state, so an
//! empty file (or no file) yields a working scene. Sections:
//!
//! - `[robot]` x, y, rotation_degrees
//! - `[camera]` x, y
//! - `[tag]` x, y, rotation_degrees
//! - `[limits]` position/rotation ranges applied to all inputs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Point2D, Pose2D};
use crate::scene::state::{SceneLimits, SceneState};

/// Configuration load failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was attempted
        path: String,
        /// Underlying io error
        source: std::io::Error,
    },
    /// The file was read but is not valid TOML for this schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that was attempted
        path: String,
        /// Underlying parse error
        source: basic_toml::Error,
    },
}

/// A posed entity in config form.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct PoseConfig {
    /// X position in field units
    pub x: f64,
    /// Y position in field units
    pub y: f64,
    /// Heading in degrees
    pub rotation_degrees: f64,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_degrees: 0.0,
        }
    }
}

/// The camera's offset on the robot.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OffsetConfig {
    /// X offset in the robot frame
    pub x: f64,
    /// Y offset in the robot frame
    pub y: f64,
}

/// The tag's pose in config form.
///
/// Separate from [`PoseConfig`] so a partially specified `[tag]` table keeps
/// the demo-page defaults for its unset fields.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct TagConfig {
    /// X position in field units. Default: 100
    pub x: f64,
    /// Y position in field units. Default: 100
    pub y: f64,
    /// Heading in degrees. Default: 180
    pub rotation_degrees: f64,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            rotation_degrees: 180.0,
        }
    }
}

/// Input range configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Smallest accepted position component. Default: -200
    pub position_min: f64,
    /// Largest accepted position component. Default: 200
    pub position_max: f64,
    /// Smallest accepted rotation in degrees. Default: -180
    pub rotation_min: f64,
    /// Largest accepted rotation in degrees. Default: 180
    pub rotation_max: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = SceneLimits::default();
        Self {
            position_min: limits.position_min,
            position_max: limits.position_max,
            rotation_min: limits.rotation_min,
            rotation_max: limits.rotation_max,
        }
    }
}

/// Scene configuration file structure.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Robot start pose. Default: origin, 0°
    pub robot: PoseConfig,
    /// Camera offset. Default: (0, 0)
    pub camera: OffsetConfig,
    /// Tag start pose. Default: (100, 100) at 180°
    pub tag: TagConfig,
    /// Input ranges. Default: ±200 position, ±180° rotation
    pub limits: LimitsConfig,
}

impl SceneConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        basic_toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Input limits from the config.
    pub fn limits(&self) -> SceneLimits {
        SceneLimits {
            position_min: self.limits.position_min,
            position_max: self.limits.position_max,
            rotation_min: self.limits.rotation_min,
            rotation_max: self.limits.rotation_max,
        }
    }

    /// Build the initial scene snapshot, clamped to the configured limits.
    pub fn scene(&self) -> SceneState {
        let scene = SceneState::new(
            Pose2D::new(self.robot.x, self.robot.y, self.robot.rotation_degrees),
            Point2D::new(self.camera.x, self.camera.y),
            Pose2D::new(self.tag.x, self.tag.y, self.tag.rotation_degrees),
        );
        self.limits().clamp_scene(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_toml_is_demo_defaults() {
        let config: SceneConfig = basic_toml::from_str("").unwrap();
        let scene = config.scene();
        assert_relative_eq!(scene.robot.x, 0.0);
        assert_relative_eq!(scene.tag.x, 100.0);
        assert_relative_eq!(scene.tag.y, 100.0);
        // 180° normalizes to the -180 end of the range
        assert_relative_eq!(scene.tag.rotation_degrees, -180.0);
        assert_relative_eq!(scene.camera_offset.x, 0.0);
    }

    #[test]
    fn test_partial_table_keeps_field_defaults() {
        let config: SceneConfig = basic_toml::from_str(
            r#"
            [robot]
            x = 50.0
            "#,
        )
        .unwrap();
        assert_relative_eq!(config.robot.x, 50.0);
        assert_relative_eq!(config.robot.y, 0.0);
        assert_relative_eq!(config.tag.x, 100.0);
    }

    #[test]
    fn test_partial_tag_keeps_demo_defaults() {
        let config: SceneConfig = basic_toml::from_str(
            r#"
            [tag]
            x = 42.0
            "#,
        )
        .unwrap();
        assert_relative_eq!(config.tag.x, 42.0);
        assert_relative_eq!(config.tag.y, 100.0);
        assert_relative_eq!(config.tag.rotation_degrees, 180.0);
    }

    #[test]
    fn test_scene_is_clamped() {
        let config: SceneConfig = basic_toml::from_str(
            r#"
            [tag]
            x = 900.0
            y = -900.0
            "#,
        )
        .unwrap();
        let scene = config.scene();
        assert_relative_eq!(scene.tag.x, 200.0);
        assert_relative_eq!(scene.tag.y, -200.0);
    }

    #[test]
    fn test_custom_limits() {
        let config: SceneConfig = basic_toml::from_str(
            r#"
            [limits]
            position_min = -50.0
            position_max = 50.0

            [robot]
            x = 80.0
            "#,
        )
        .unwrap();
        assert_relative_eq!(config.scene().robot.x, 50.0);
    }
}
