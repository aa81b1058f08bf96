//! Core data types for the scene geometry.
//!
//! - [`Point2D`]: 2D point in field units
//! - [`Pose2D`]: Entity pose (x, y, rotation) in field units and degrees

mod point;
mod pose;

pub use point::Point2D;
pub use pose::Pose2D;
