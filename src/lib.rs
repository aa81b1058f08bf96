//! DrishtiFrames - Coordinate-frame geometry engine for the field/robot/camera/tag visualizer
//!
//! Models the frame relationships of a field-coordinate demo: a robot posed on
//! the field, a camera mounted on the robot, and a fiducial tag placed
//! independently. Given a scene snapshot it derives the tag vector in the
//! field, robot, and camera frames, with the magnitude and angle readouts a
//! presentation layer (SVG canvas, text panel, test harness) displays.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      main                           │  ← Readout binary
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                scene/ + config                      │  ← Scene model
//! │      (state, derived vectors, visibility, TOML)     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │           (types, math, frame transform)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Conventions
//!
//! The display this engine was built for draws the field's +X axis vertically,
//! so vector angles are measured with the swapped `atan2(x, y)` convention
//! ([`angle_of`]). Headings and angles are degrees in [-180, 180); positions
//! are field units. Geometry functions are total over the reals: non-finite
//! inputs propagate rather than fault.

pub mod config;
pub mod core;
pub mod scene;

pub use crate::config::{ConfigError, SceneConfig};
pub use crate::core::frame::{Frame, transform};
pub use crate::core::math::{angle_of, magnitude_of, normalize_degrees};
pub use crate::core::types::{Point2D, Pose2D};
pub use crate::scene::{FrameKind, FrameVector, SceneLimits, SceneState, VectorReadouts, VectorVisibility};
