//! Configuration of an exploration session

use crate::common::error::{RoboticsError, RoboticsResult};

use super::footprint::VehicleFootprint;

/// Cost weights of the trajectory ranking
///
/// Only `distance_to_goal_euclidean` is applied by the explorer. The other
/// three are carried for planners that track a reference path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub driving: f64,
    pub distance_to_path: f64,
    pub distance_to_goal: f64,
    pub distance_to_goal_euclidean: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            driving: 1.0,
            distance_to_path: 1.0,
            distance_to_goal: 10.0,
            distance_to_goal_euclidean: 1.0,
        }
    }
}

impl CostWeights {
    pub fn new(
        driving: f64,
        distance_to_path: f64,
        distance_to_goal: f64,
        distance_to_goal_euclidean: f64,
    ) -> Self {
        Self {
            driving,
            distance_to_path,
            distance_to_goal,
            distance_to_goal_euclidean,
        }
    }

    pub fn validate(&self) -> RoboticsResult<()> {
        let named = [
            ("driving", self.driving),
            ("distance_to_path", self.distance_to_path),
            ("distance_to_goal", self.distance_to_goal),
            ("distance_to_goal_euclidean", self.distance_to_goal_euclidean),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RoboticsError::InvalidParameter(format!(
                    "cost weight {} must be finite and non-negative, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

/// How a new command is blended in over one planning timestep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlBlending {
    /// Target command is applied from the first substep on
    Step,
    /// Steering and speed ramp linearly from the tip state to the target,
    /// reaching it on the last substep
    Linear,
}

/// Explorer configuration
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Wheelbase length [m]
    pub wheel_base: f64,
    /// Duration one command is held [s]
    pub timestep: f64,
    /// Integration step inside a timestep [s]
    pub substep: f64,
    /// Steering angle samples [rad]
    pub steering_angles: Vec<f64>,
    /// Velocity samples [m/s]
    pub velocities: Vec<f64>,
    /// Steering magnitude below which motion is treated as straight [rad]
    pub epsilon: f64,
    pub control_blending: ControlBlending,
    /// Body checked against obstacles; the reference point only if `None`
    pub footprint: Option<VehicleFootprint>,
    pub weights: CostWeights,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            wheel_base: 2.62,
            timestep: 2.0,
            substep: 0.2,
            steering_angles: vec![-0.6, -0.3, 0.0, 0.3, 0.6],
            velocities: vec![0.0, 1.0],
            epsilon: f64::EPSILON,
            control_blending: ControlBlending::Step,
            footprint: None,
            weights: CostWeights::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Number of substeps per segment
    pub fn substeps(&self) -> usize {
        (self.timestep / self.substep).round() as usize
    }

    /// Number of children produced by one expandable segment
    pub fn branching_factor(&self) -> usize {
        self.steering_angles.len() * self.velocities.len()
    }

    pub fn validate(&self) -> RoboticsResult<()> {
        if !(self.wheel_base > 0.0) {
            return Err(RoboticsError::InvalidParameter(format!(
                "wheel_base must be positive, got {}",
                self.wheel_base
            )));
        }
        if !(self.timestep > 0.0) || !(self.substep > 0.0) {
            return Err(RoboticsError::InvalidParameter(format!(
                "timestep and substep must be positive, got {} and {}",
                self.timestep, self.substep
            )));
        }
        let ratio = self.timestep / self.substep;
        if ratio < 1.0 || (ratio - ratio.round()).abs() > 1e-9 {
            return Err(RoboticsError::InvalidParameter(format!(
                "timestep {} is not a whole multiple of substep {}",
                self.timestep, self.substep
            )));
        }
        if self.steering_angles.is_empty() || self.velocities.is_empty() {
            return Err(RoboticsError::InvalidParameter(
                "steering and velocity samples must not be empty".to_string(),
            ));
        }
        if self
            .steering_angles
            .iter()
            .chain(self.velocities.iter())
            .any(|value| !value.is_finite())
        {
            return Err(RoboticsError::InvalidParameter(
                "control samples must be finite".to_string(),
            ));
        }
        // sin(0) = 0 would give an infinite turning radius
        if !(self.epsilon > 0.0) {
            return Err(RoboticsError::InvalidParameter(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::with_defaults();
        assert!(config.validate().is_ok());
        assert_eq!(config.substeps(), 10);
        assert_eq!(config.branching_factor(), 10);
    }

    #[test]
    fn test_rejects_empty_controls() {
        let mut config = ExplorerConfig::default();
        config.velocities.clear();
        assert!(matches!(
            config.validate(),
            Err(RoboticsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_fractional_substeps() {
        let mut config = ExplorerConfig::default();
        config.substep = 0.3;
        assert!(config.validate().is_err());

        config.substep = 4.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_wheel_base() {
        let mut config = ExplorerConfig::default();
        config.wheel_base = 0.0;
        assert!(config.validate().is_err());

        config.wheel_base = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        let mut config = ExplorerConfig::default();
        config.epsilon = 0.0;
        assert!(matches!(
            config.validate(),
            Err(RoboticsError::InvalidParameter(_))
        ));

        config.epsilon = -1e-6;
        assert!(config.validate().is_err());

        config.epsilon = 1e-9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_weight() {
        let weights = CostWeights::new(1.0, -1.0, 10.0, 1.0);
        assert!(weights.validate().is_err());
        assert!(CostWeights::default().validate().is_ok());
    }
}
