//! Common types, traits, and error definitions for motion_lattice
//!
//! This module provides the foundational building blocks shared by the
//! planner and the visualization helpers.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
