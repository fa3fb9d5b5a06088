//! Single-track (bicycle) kinematic model
//!
//! Positive steering turns the vehicle clockwise: the heading decreases by
//! `v * dt / r` per step with turning radius `r = wheel_base / sin(steering)`.

use crate::common::{rotate_point, MotionModel};

use super::config::ControlBlending;
use super::state::State;

/// Command held over one planning timestep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringCommand {
    /// Steering angle [rad]
    pub steering_angle: f64,
    /// Speed [m/s]
    pub v: f64,
}

impl SteeringCommand {
    pub fn new(steering_angle: f64, v: f64) -> Self {
        Self { steering_angle, v }
    }

    /// Command in effect at substep `step` (1-based) out of `steps`
    pub fn blended(&self, from: &State, step: usize, steps: usize, blending: ControlBlending) -> Self {
        match blending {
            ControlBlending::Step => *self,
            ControlBlending::Linear => {
                let ratio = step as f64 / steps as f64;
                Self {
                    steering_angle: from.steering_angle
                        + (self.steering_angle - from.steering_angle) * ratio,
                    v: from.v + (self.v - from.v) * ratio,
                }
            }
        }
    }
}

/// Bicycle model with a rigid wheelbase
#[derive(Debug, Clone, Copy)]
pub struct SingleTrackModel {
    wheel_base: f64,
    epsilon: f64,
}

impl SingleTrackModel {
    pub fn new(wheel_base: f64, epsilon: f64) -> Self {
        Self { wheel_base, epsilon }
    }

    pub fn wheel_base(&self) -> f64 {
        self.wheel_base
    }

    /// Turning radius for a steering angle, `None` when driving straight
    pub fn turning_radius(&self, steering_angle: f64) -> Option<f64> {
        if steering_angle.abs() < self.epsilon {
            None
        } else {
            Some(self.wheel_base / steering_angle.sin())
        }
    }
}

impl MotionModel for SingleTrackModel {
    type State = State;
    type Control = SteeringCommand;

    /// Advance one substep. The collision flag is copied from `state`;
    /// deciding whether the new pose collides is up to the caller.
    fn propagate(&self, state: &State, control: &SteeringCommand, dt: f64) -> State {
        let v = control.v;
        let (x, y, angle, steering_angle) = match self.turning_radius(control.steering_angle) {
            None => (
                state.x + v * dt * state.angle.cos(),
                state.y + v * dt * state.angle.sin(),
                state.angle,
                0.0,
            ),
            Some(r) => {
                let arc = v * dt / r;
                let (dx, dy) = rotate_point(r * arc.sin(), r * arc.cos() - r, state.angle);
                (
                    state.x + dx,
                    state.y + dy,
                    state.angle - arc,
                    control.steering_angle,
                )
            }
        };

        State {
            x,
            y,
            angle,
            steering_angle,
            v,
            t: state.t + dt,
            is_colliding: state.is_colliding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn model() -> SingleTrackModel {
        SingleTrackModel::new(2.62, f64::EPSILON)
    }

    #[test]
    fn test_straight_step() {
        let start = State::new(1.0, 2.0, 0.0, 0.2, 1.0);
        let next = model().propagate(&start, &SteeringCommand::new(0.0, 1.5), 0.2);

        assert!((next.x - 1.3).abs() < 1e-10);
        assert!((next.y - 2.0).abs() < 1e-10);
        assert_eq!(next.angle, 0.0);
        assert_eq!(next.steering_angle, 0.0);
        assert_eq!(next.v, 1.5);
        assert!((next.t - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_straight_step_follows_heading() {
        let start = State::new(0.0, 0.0, FRAC_PI_2, 0.0, 0.0);
        let next = model().propagate(&start, &SteeringCommand::new(0.0, 1.0), 1.0);
        assert!(next.x.abs() < 1e-10);
        assert!((next.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_positive_steering_turns_clockwise() {
        let next = model().propagate(&State::origin(), &SteeringCommand::new(0.3, 1.0), 0.2);

        assert!(next.x > 0.0 && next.x < 0.2);
        assert!(next.y < 0.0);
        assert!(next.angle < 0.0);
        assert_eq!(next.steering_angle, 0.3);
    }

    #[test]
    fn test_curved_step_stays_on_circle() {
        let model = model();
        let command = SteeringCommand::new(-0.6, 2.0);
        let r = model.turning_radius(command.steering_angle).unwrap();

        // Centre of the turning circle sits beside the start pose
        let centre = (0.0, -r);
        let mut state = State::origin();
        for _ in 0..25 {
            state = model.propagate(&state, &command, 0.2);
            let dist = ((state.x - centre.0).powi(2) + (state.y - centre.1).powi(2)).sqrt();
            assert!((dist - r.abs()).abs() < 1e-9);
        }
        assert!(state.angle > 0.0);
    }

    #[test]
    fn test_zero_speed_does_not_move() {
        let start = State::new(3.0, -1.0, 0.4, 0.0, 0.0);
        let next = model().propagate(&start, &SteeringCommand::new(0.6, 0.0), 0.2);
        assert!((next.x - 3.0).abs() < 1e-12);
        assert!((next.y + 1.0).abs() < 1e-12);
        assert!((next.angle - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_collision_flag_is_carried() {
        let start = State::origin().with_collision(true);
        let next = model().propagate(&start, &SteeringCommand::new(0.0, 1.0), 0.2);
        assert!(next.is_colliding);
    }

    #[test]
    fn test_linear_blending_reaches_target() {
        let from = State::new(0.0, 0.0, 0.0, 0.2, 0.0);
        let target = SteeringCommand::new(0.6, 1.0);

        let first = target.blended(&from, 1, 10, ControlBlending::Linear);
        assert!((first.steering_angle - 0.24).abs() < 1e-10);
        assert!((first.v - 0.1).abs() < 1e-10);

        let last = target.blended(&from, 10, 10, ControlBlending::Linear);
        assert!((last.steering_angle - 0.6).abs() < 1e-10);
        assert!((last.v - 1.0).abs() < 1e-10);

        assert_eq!(target.blended(&from, 1, 10, ControlBlending::Step), target);
    }
}
