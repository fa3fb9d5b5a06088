//! Rectangular vehicle footprint sampled at a few body points

use crate::common::{rotate_point, Point2D};

use super::obstacle::Collider;
use super::state::State;

/// Car body used for footprint collision checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFootprint {
    /// Body length [m]
    pub length: f64,
    /// Body width [m]
    pub width: f64,
    /// Margin added on every side [m]
    pub safety_distance: f64,
}

impl Default for VehicleFootprint {
    fn default() -> Self {
        Self {
            length: 4.28,
            width: 1.79,
            safety_distance: 0.2,
        }
    }
}

impl VehicleFootprint {
    pub fn new(length: f64, width: f64, safety_distance: f64) -> Self {
        Self {
            length,
            width,
            safety_distance,
        }
    }

    /// Sample points of the inflated body at the given state
    ///
    /// Four corners plus the middle of both long sides, so that a thin
    /// obstacle cannot slip between the front and rear corners.
    pub fn sample_points(&self, state: &State) -> [Point2D; 6] {
        let half_length = self.length / 2.0 + self.safety_distance;
        let half_width = self.width / 2.0 + self.safety_distance;

        [
            (half_length, half_width),
            (half_length, -half_width),
            (-half_length, half_width),
            (-half_length, -half_width),
            (0.0, half_width),
            (0.0, -half_width),
        ]
        .map(|(lx, ly)| {
            let (dx, dy) = rotate_point(lx, ly, state.angle);
            Point2D::new(state.x + dx, state.y + dy)
        })
    }

    /// Whether any body sample point hits the obstacles
    pub fn collides<C: Collider + ?Sized>(&self, state: &State, obstacles: &C) -> bool {
        self.sample_points(state)
            .iter()
            .any(|p| obstacles.contains_point(p.x, p.y))
    }
}
