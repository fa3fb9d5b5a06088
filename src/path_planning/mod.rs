// Path Planning algorithms module

pub mod motion_lattice;

pub use motion_lattice::{Explorer, ExplorerConfig, LatticePlanner};
