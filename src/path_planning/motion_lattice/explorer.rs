//! Layered expansion of the control lattice
//!
//! Layer 0 holds a single segment with the initial state. Every
//! non-colliding segment of layer k is extended by every
//! (steering angle, velocity) sample to form layer k+1. Colliding segments
//! are dead ends and get no children; no placeholder is stored for them, so
//! `prev_idx` always refers to the uncompacted index set of the previous
//! layer.

use itertools::iproduct;
use log::{debug, trace};

use crate::common::error::{RoboticsError, RoboticsResult};
use crate::common::{MotionModel, Point2D};

use super::config::ExplorerConfig;
use super::motion_model::{SingleTrackModel, SteeringCommand};
use super::obstacle::{Collider, Obstacle};
use super::segment::{select_best, Segment, Trajectory};
use super::state::State;

/// Exhaustive lattice explorer for one planning session
pub struct Explorer {
    config: ExplorerConfig,
    model: SingleTrackModel,
    goal: Point2D,
    obstacles: Vec<Obstacle>,
    initial_state: State,
    layers: Vec<Vec<Segment>>,
}

impl Explorer {
    pub fn new(
        config: ExplorerConfig,
        goal: Point2D,
        obstacles: Vec<Obstacle>,
        initial_state: State,
    ) -> RoboticsResult<Self> {
        config.validate()?;
        check_goal(&goal)?;
        let model = SingleTrackModel::new(config.wheel_base, config.epsilon);

        Ok(Self {
            config,
            model,
            goal,
            obstacles,
            initial_state,
            layers: Vec::new(),
        })
    }

    /// Default configuration, starting at rest at the origin
    pub fn with_defaults(goal: Point2D, obstacles: Vec<Obstacle>) -> RoboticsResult<Self> {
        Self::new(ExplorerConfig::default(), goal, obstacles, State::origin())
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn goal(&self) -> Point2D {
        self.goal
    }

    /// Replace the goal. Layers are kept; only the ranking changes.
    pub fn set_goal(&mut self, goal: Point2D) -> RoboticsResult<()> {
        check_goal(&goal)?;
        self.goal = goal;
        Ok(())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// Replace the initial state. Existing layers are discarded.
    pub fn set_initial_state(&mut self, state: State) {
        self.initial_state = state;
        self.reset();
    }

    /// Discard every layer so the explorer can be reused
    pub fn reset(&mut self) {
        self.layers.clear();
    }

    pub fn layers(&self) -> &[Vec<Segment>] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&[Segment]> {
        self.layers.get(index).map(Vec::as_slice)
    }

    /// Number of layers expanded so far
    pub fn horizon(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Expand layer `layer_number` into layer `layer_number + 1`.
    ///
    /// Layers must be expanded in order starting at 0; layer 0 is seeded
    /// with the initial state on the first call.
    pub fn iterate_layer(&mut self, layer_number: usize) -> RoboticsResult<&[Segment]> {
        if layer_number == 0 && self.layers.is_empty() {
            self.layers.push(vec![Segment::root(self.initial_state)]);
        }
        if layer_number + 1 != self.layers.len() {
            return Err(RoboticsError::PlanningError(format!(
                "cannot expand layer {}: next expandable layer is {}",
                layer_number,
                self.horizon()
            )));
        }

        let mut children =
            Vec::with_capacity(self.layers[layer_number].len() * self.config.branching_factor());
        let mut dead_ends = 0;
        for (j, segment) in self.layers[layer_number].iter().enumerate() {
            if segment.is_colliding() {
                dead_ends += 1;
                continue;
            }

            let tip = *segment.last_state();
            for (&steering_angle, &velocity) in
                iproduct!(&self.config.steering_angles, &self.config.velocities)
            {
                let child = Segment::new(self.calculate_states(&tip, steering_angle, velocity), j);
                if child.is_colliding() {
                    trace!(
                        "[Explorer] layer {} parent {} steering={:.2} v={:.2} collides",
                        layer_number + 1,
                        j,
                        steering_angle,
                        velocity
                    );
                }
                children.push(child);
            }
        }

        debug!(
            "[Explorer] layer {} -> {}: {} segments, {} dead ends skipped",
            layer_number,
            layer_number + 1,
            children.len(),
            dead_ends
        );
        self.layers.push(children);
        Ok(&self.layers[layer_number + 1])
    }

    /// Expand `horizon` further layers on top of the ones already built
    pub fn explore(&mut self, horizon: usize) -> RoboticsResult<()> {
        let first = self.horizon();
        for layer_number in first..first + horizon {
            self.iterate_layer(layer_number)?;
        }
        Ok(())
    }

    /// Substates of one command held for one planning timestep.
    ///
    /// The initial state is not part of the result. Once a substate collides
    /// every later substate of the segment is marked colliding too.
    pub fn calculate_states(&self, initial: &State, steering_angle: f64, velocity: f64) -> Vec<State> {
        let steps = self.config.substeps();
        let dt = self.config.substep;
        let target = SteeringCommand::new(steering_angle, velocity);

        let mut states = Vec::with_capacity(steps);
        let mut previous = *initial;
        for step in 1..=steps {
            let command = target.blended(initial, step, steps, self.config.control_blending);
            let next = self.model.propagate(&previous, &command, dt);
            let next = next.with_collision(next.is_colliding || self.is_colliding(&next));
            states.push(next);
            previous = next;
        }
        states
    }

    /// Whether the state hits any obstacle
    pub fn is_colliding(&self, state: &State) -> bool {
        match &self.config.footprint {
            Some(footprint) => {
                self.obstacles.is_colliding(state) || footprint.collides(state, &self.obstacles)
            }
            None => self.obstacles.is_colliding(state),
        }
    }

    /// Root-to-leaf trajectory for a segment of the last layer.
    ///
    /// The cost is the leaf segment cost; the goal term is not included.
    pub fn backtrace(&self, index: usize) -> Option<Trajectory<'_>> {
        let leaf = self.layers.last()?.get(index)?;

        let mut trajectory = Trajectory::new();
        let mut segment_idx = index;
        for layer in self.layers.iter().rev() {
            let segment = layer.get(segment_idx)?;
            trajectory.unshift(segment);
            segment_idx = segment.prev_idx;
        }
        trajectory.cost = leaf.cost;
        Some(trajectory)
    }

    /// One trajectory per segment of the last layer, costed with the
    /// distance from its final position to the goal
    pub fn get_trajectories(&self) -> Vec<Trajectory<'_>> {
        let leaves = self.layers.last().map_or(0, Vec::len);
        let weight = self.config.weights.distance_to_goal_euclidean;

        (0..leaves)
            .filter_map(|index| self.backtrace(index))
            .map(|mut trajectory| {
                if let Some(last) = trajectory.final_state() {
                    trajectory.cost += weight * last.distance_to(&self.goal);
                }
                trajectory
            })
            .collect()
    }

    /// Cheapest trajectory, the later one on ties.
    ///
    /// `None` when the last layer is empty or nothing was explored.
    pub fn get_best_trajectory(&self) -> Option<Trajectory<'_>> {
        let mut trajectories = self.get_trajectories();
        let best_idx = select_best(&trajectories)?;
        debug!(
            "[Explorer] best trajectory {} of {} with cost {:.3}",
            best_idx,
            trajectories.len(),
            trajectories[best_idx].cost
        );
        Some(trajectories.swap_remove(best_idx))
    }
}

fn check_goal(goal: &Point2D) -> RoboticsResult<()> {
    if goal.x.is_finite() && goal.y.is_finite() {
        Ok(())
    } else {
        Err(RoboticsError::InvalidParameter(format!(
            "goal must be finite, got ({}, {})",
            goal.x, goal.y
        )))
    }
}
