//! Common traits defining interfaces for planning components

use crate::common::types::*;
use crate::common::error::RoboticsError;

/// Trait for path planning algorithms
pub trait PathPlanner {
    /// Plan a path from start to goal
    fn plan(&self, start: Point2D, goal: Point2D) -> Result<Path2D, RoboticsError>;
}

/// Trait for vehicle/robot motion models
pub trait MotionModel {
    /// State type
    type State;
    /// Control type
    type Control;

    /// Propagate state forward in time
    fn propagate(&self, state: &Self::State, control: &Self::Control, dt: f64) -> Self::State;
}

/// Trait for visualizable algorithms
pub trait Visualizable {
    /// Draw current state to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyPlanner;

    impl PathPlanner for DummyPlanner {
        fn plan(&self, _start: Point2D, _goal: Point2D) -> Result<Path2D, RoboticsError> {
            Ok(Path2D::new())
        }
    }

    #[test]
    fn test_path_planner_trait() {
        let planner = DummyPlanner;
        let result = planner.plan(Point2D::origin(), Point2D::new(1.0, 1.0));
        assert!(result.is_ok());
    }
}
