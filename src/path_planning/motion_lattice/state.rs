//! Timestamped kinematic sample of the vehicle

use crate::common::{Point2D, Pose2D};

/// Vehicle state at one substep of the lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
    /// Heading [rad]
    pub angle: f64,
    /// Steering angle of the front axle [rad]
    pub steering_angle: f64,
    /// Speed [m/s]
    pub v: f64,
    /// Time since the start of the session [s]
    pub t: f64,
    pub is_colliding: bool,
}

impl State {
    pub fn new(x: f64, y: f64, angle: f64, steering_angle: f64, v: f64) -> Self {
        Self {
            x,
            y,
            angle,
            steering_angle,
            v,
            t: 0.0,
            is_colliding: false,
        }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Vehicle at rest at the given pose
    pub fn from_pose(pose: &Pose2D) -> Self {
        Self::new(pose.x, pose.y, pose.yaw, 0.0, 0.0)
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn pose(&self) -> Pose2D {
        Pose2D::new(self.x, self.y, self.angle)
    }

    /// Copy of this state with the collision flag replaced
    pub fn with_collision(self, is_colliding: bool) -> Self {
        Self { is_colliding, ..self }
    }

    pub fn distance_to(&self, point: &Point2D) -> f64 {
        self.position().distance(point)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new_starts_clean() {
        let state = State::new(1.0, 2.0, 0.5, 0.1, 3.0);
        assert_eq!(state.x, 1.0);
        assert_eq!(state.y, 2.0);
        assert_eq!(state.angle, 0.5);
        assert_eq!(state.t, 0.0);
        assert!(!state.is_colliding);
    }

    #[test]
    fn test_from_pose_is_at_rest() {
        let state = State::from_pose(&Pose2D::new(4.0, -1.0, 1.2));
        assert_eq!(state.pose(), Pose2D::new(4.0, -1.0, 1.2));
        assert_eq!(state.v, 0.0);
        assert_eq!(state.steering_angle, 0.0);
    }

    #[test]
    fn test_with_collision_leaves_original() {
        let state = State::origin();
        let hit = state.with_collision(true);
        assert!(hit.is_colliding);
        assert!(!state.is_colliding);
        assert_eq!(hit.position(), state.position());
    }

    #[test]
    fn test_distance_to() {
        let state = State::new(3.0, 4.0, 0.0, 0.0, 0.0);
        assert!((state.distance_to(&Point2D::origin()) - 5.0).abs() < 1e-10);
    }
}
