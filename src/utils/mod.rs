//! Utility modules for motion_lattice

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
