//! Point-to-point planning on top of the lattice explorer

use log::info;

use crate::common::error::{RoboticsError, RoboticsResult};
use crate::common::{Path2D, PathPlanner, Point2D};

use super::config::ExplorerConfig;
use super::explorer::Explorer;
use super::obstacle::Obstacle;
use super::state::State;

/// Runs one exploration session per planning request
pub struct LatticePlanner {
    config: ExplorerConfig,
    obstacles: Vec<Obstacle>,
    horizon: usize,
}

impl LatticePlanner {
    pub fn new(config: ExplorerConfig, obstacles: Vec<Obstacle>, horizon: usize) -> RoboticsResult<Self> {
        config.validate()?;
        if horizon == 0 {
            return Err(RoboticsError::InvalidParameter(
                "horizon must be at least one layer".to_string(),
            ));
        }
        Ok(Self {
            config,
            obstacles,
            horizon,
        })
    }

    pub fn with_defaults(obstacles: Vec<Obstacle>) -> RoboticsResult<Self> {
        Self::new(ExplorerConfig::default(), obstacles, 2)
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Explorer for a start state, already expanded to the planner horizon
    pub fn explore_from(&self, start: State, goal: Point2D) -> RoboticsResult<Explorer> {
        let mut explorer = Explorer::new(self.config.clone(), goal, self.obstacles.clone(), start)?;
        explorer.explore(self.horizon)?;
        Ok(explorer)
    }
}

impl PathPlanner for LatticePlanner {
    /// Best collision-free path from `start` (heading +x, at rest) toward `goal`
    fn plan(&self, start: Point2D, goal: Point2D) -> Result<Path2D, RoboticsError> {
        let explorer = self.explore_from(State::new(start.x, start.y, 0.0, 0.0, 0.0), goal)?;

        match explorer.get_best_trajectory() {
            Some(best) if best.cost.is_finite() => {
                info!(
                    "[LatticePlanner] best trajectory ends {:.2} m from goal",
                    best.final_state().map_or(f64::INFINITY, |s| s.distance_to(&goal))
                );
                Ok(best.to_path())
            }
            _ => Err(RoboticsError::PlanningError(
                "No collision-free trajectory found".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_moves_toward_goal() {
        let planner = LatticePlanner::with_defaults(Vec::new()).unwrap();
        let start = Point2D::new(0.0, 0.0);
        let goal = Point2D::new(4.0, 0.0);

        let path = planner.plan(start, goal).unwrap();
        assert_eq!(path.len(), 1 + 2 * 10);
        assert_eq!(path.points[0], start);

        let end = path.points.last().unwrap();
        assert!((end.x - 4.0).abs() < 1e-10);
        assert!(end.y.abs() < 1e-10);
    }

    #[test]
    fn test_plan_fails_when_boxed_in() {
        let obstacles = vec![Obstacle::rectangle(0.0, 0.0, 0.0, 30.0, 30.0)];
        let planner = LatticePlanner::with_defaults(obstacles).unwrap();
        let result = planner.plan(Point2D::origin(), Point2D::new(50.0, 0.0));
        assert!(matches!(result, Err(RoboticsError::PlanningError(_))));
    }

    #[test]
    fn test_zero_horizon_is_rejected() {
        assert!(LatticePlanner::new(ExplorerConfig::default(), Vec::new(), 0).is_err());
    }
}
