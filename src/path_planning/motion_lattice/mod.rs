//! Motion Lattice Explorer Module
//!
//! Explores the motions reachable from a start pose by holding every
//! combination of sampled steering angles and velocities for one planning
//! timestep, layer after layer. Each command is integrated with a
//! single-track (bicycle) model in small substeps and checked against
//! oriented rectangular obstacles at every substep. After the last layer,
//! each leaf is traced back to the root and ranked by its distance to the
//! goal.
//!
//! # Components
//!
//! - `state`: timestamped kinematic sample
//! - `obstacle`: oriented rectangles behind the `Collider` capability
//! - `footprint`: optional car body used for collision checks
//! - `motion_model`: single-track kinematics and command blending
//! - `segment`: lattice edges, trajectories and the ranking rule
//! - `config`: session configuration and cost weights
//! - `explorer`: layered expansion, backtrace and best-trajectory selection
//! - `planner`: `PathPlanner` adapter running one session per request
//!
//! # Example
//!
//! ```no_run
//! use motion_lattice::path_planning::motion_lattice::{Explorer, Obstacle};
//! use motion_lattice::common::Point2D;
//!
//! let obstacles = vec![Obstacle::rectangle(6.0, 1.0, 0.3, 2.0, 1.0)];
//! let mut explorer = Explorer::with_defaults(Point2D::new(8.0, -2.0), obstacles).unwrap();
//! explorer.explore(2).unwrap();
//!
//! match explorer.get_best_trajectory() {
//!     Some(best) => println!("best cost {:.2}", best.cost),
//!     None => println!("no trajectory found"),
//! }
//! ```

pub mod config;
pub mod explorer;
pub mod footprint;
pub mod motion_model;
pub mod obstacle;
pub mod planner;
pub mod segment;
pub mod state;

// Re-exports
pub use config::{ControlBlending, CostWeights, ExplorerConfig};
pub use explorer::Explorer;
pub use footprint::VehicleFootprint;
pub use motion_model::{SingleTrackModel, SteeringCommand};
pub use obstacle::{Collider, Obstacle, RectangleObstacle};
pub use planner::LatticePlanner;
pub use segment::{select_best, Segment, Trajectory};
pub use state::State;
