//! Lattice edges and the trajectories assembled from them

use crate::common::{Path2D, Point2D};

use super::state::State;

/// States produced by holding one command for one planning timestep
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub states: Vec<State>,
    /// Index of the parent segment in the previous layer
    pub prev_idx: usize,
    pub cost: f64,
}

impl Segment {
    /// Segment with cost 0, or infinite cost if its last state collides
    ///
    /// `states` must not be empty.
    pub fn new(states: Vec<State>, prev_idx: usize) -> Self {
        debug_assert!(!states.is_empty(), "segment built without states");
        let mut segment = Self {
            states,
            prev_idx,
            cost: 0.0,
        };
        if segment.is_colliding() {
            segment.cost = f64::INFINITY;
        }
        segment
    }

    /// Root segment of layer 0
    pub fn root(initial: State) -> Self {
        Self::new(vec![initial], 0)
    }

    /// Last state of the segment.
    ///
    /// # Panics
    /// Segments are never built empty; this panics if one is.
    pub fn last_state(&self) -> &State {
        self.states.last().expect("segment without states")
    }

    pub fn is_colliding(&self) -> bool {
        self.states.last().map_or(false, |s| s.is_colliding)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn to_path(&self) -> Path2D {
        Path2D::from_points(self.states.iter().map(State::position).collect())
    }
}

/// Root-to-leaf chain of segments borrowed from the explorer layers
#[derive(Debug, Clone)]
pub struct Trajectory<'a> {
    pub segments: Vec<&'a Segment>,
    pub cost: f64,
}

impl<'a> Trajectory<'a> {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            cost: 0.0,
        }
    }

    pub fn push(&mut self, segment: &'a Segment) {
        self.segments.push(segment);
    }

    /// Prepend a segment, used while walking back to the root
    pub fn unshift(&mut self, segment: &'a Segment) {
        self.segments.insert(0, segment);
    }

    pub fn last_segment(&self) -> Option<&'a Segment> {
        self.segments.last().copied()
    }

    pub fn final_state(&self) -> Option<&'a State> {
        self.last_segment().map(Segment::last_state)
    }

    pub fn is_colliding(&self) -> bool {
        self.last_segment().map_or(false, Segment::is_colliding)
    }

    /// Time elapsed between the first and the last state
    pub fn duration(&self) -> f64 {
        match (self.states().next(), self.final_state()) {
            (Some(first), Some(last)) => last.t - first.t,
            _ => 0.0,
        }
    }

    /// Every state from root to leaf
    pub fn states(&self) -> impl Iterator<Item = &'a State> + '_ {
        self.segments.iter().copied().flat_map(|segment| segment.states.iter())
    }

    /// Whether the final state ends within `tolerance` of the goal
    /// without colliding
    pub fn reaches_goal(&self, goal: &Point2D, tolerance: f64) -> bool {
        self.final_state()
            .map_or(false, |s| !s.is_colliding && s.distance_to(goal) <= tolerance)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_path(&self) -> Path2D {
        Path2D::from_points(self.states().map(State::position).collect())
    }
}

impl<'a> Default for Trajectory<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the cheapest trajectory.
///
/// Ties go to the later trajectory. With only infinite costs the last one
/// is returned; `None` only when the slice is empty.
pub fn select_best(trajectories: &[Trajectory<'_>]) -> Option<usize> {
    let mut best_cost = f64::INFINITY;
    let mut best_idx = None;
    for (idx, trajectory) in trajectories.iter().enumerate() {
        if trajectory.cost <= best_cost {
            best_cost = trajectory.cost;
            best_idx = Some(idx);
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_states(n: usize, colliding_from: Option<usize>) -> Vec<State> {
        (1..=n)
            .map(|i| {
                let mut state = State::new(i as f64, 0.0, 0.0, 0.0, 1.0);
                state.t = i as f64;
                state.is_colliding = colliding_from.map_or(false, |k| i >= k);
                state
            })
            .collect()
    }

    fn with_cost<'a>(segment: &'a Segment, cost: f64) -> Trajectory<'a> {
        let mut trajectory = Trajectory::new();
        trajectory.push(segment);
        trajectory.cost = cost;
        trajectory
    }

    #[test]
    fn test_segment_cost_follows_collision() {
        let free = Segment::new(straight_states(5, None), 0);
        assert!(!free.is_colliding());
        assert_eq!(free.cost, 0.0);

        let hit = Segment::new(straight_states(5, Some(3)), 2);
        assert!(hit.is_colliding());
        assert!(hit.cost.is_infinite());
        assert_eq!(hit.prev_idx, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "segment built without states")]
    fn test_empty_segment_is_refused() {
        Segment::new(Vec::new(), 0);
    }

    #[test]
    fn test_root_segment() {
        let root = Segment::root(State::origin());
        assert_eq!(root.len(), 1);
        assert_eq!(*root.last_state(), State::origin());
        assert_eq!(root.cost, 0.0);
    }

    #[test]
    fn test_trajectory_unshift_orders_root_first() {
        let root = Segment::root(State::origin());
        let leaf = Segment::new(straight_states(3, None), 0);

        let mut trajectory = Trajectory::new();
        trajectory.unshift(&leaf);
        trajectory.unshift(&root);

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.states().count(), 4);
        assert_eq!(trajectory.final_state().unwrap().x, 3.0);
        assert!((trajectory.duration() - 3.0).abs() < 1e-10);
        assert_eq!(trajectory.to_path().len(), 4);
    }

    #[test]
    fn test_reaches_goal() {
        let leaf = Segment::new(straight_states(3, None), 0);
        let trajectory = with_cost(&leaf, 0.0);
        assert!(trajectory.reaches_goal(&Point2D::new(3.5, 0.0), 0.6));
        assert!(!trajectory.reaches_goal(&Point2D::new(5.0, 0.0), 0.6));

        let hit = Segment::new(straight_states(3, Some(3)), 0);
        assert!(!with_cost(&hit, 0.0).reaches_goal(&Point2D::new(3.0, 0.0), 1.0));
    }

    #[test]
    fn test_select_best_prefers_last_tie() {
        let segment = Segment::root(State::origin());
        let trajectories = vec![
            with_cost(&segment, 4.0),
            with_cost(&segment, 2.0),
            with_cost(&segment, 3.0),
            with_cost(&segment, 2.0),
            with_cost(&segment, f64::INFINITY),
        ];
        assert_eq!(select_best(&trajectories), Some(3));
    }

    #[test]
    fn test_select_best_all_infinite_and_empty() {
        let segment = Segment::root(State::origin());
        let trajectories = vec![
            with_cost(&segment, f64::INFINITY),
            with_cost(&segment, f64::INFINITY),
        ];
        assert_eq!(select_best(&trajectories), Some(1));
        assert_eq!(select_best(&[]), None);
    }
}
