//! motion_lattice - lattice-based motion exploration for a single-track vehicle
//!
//! Expands a discretized steering × velocity control lattice layer by layer
//! from a start pose, filters candidate motions against oriented rectangular
//! obstacles, and ranks the collision-free trajectories by their distance to
//! a goal.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D};
pub use common::{PathPlanner, MotionModel};
pub use common::{RoboticsError, RoboticsResult};
