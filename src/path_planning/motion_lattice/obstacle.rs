//! Static obstacles for the lattice explorer
//!
//! Obstacles are oriented rectangles. A query point and the obstacle centre
//! are both rotated by the obstacle angle, after which the test reduces to an
//! axis-aligned box check. `height` spans the rotated x axis and `width` the
//! rotated y axis. Points exactly on the boundary are outside.

use crate::common::{rotate_point, Point2D};

use super::state::State;

/// Capability shared by every obstacle shape
pub trait Collider {
    /// Whether the point lies strictly inside the shape
    fn contains_point(&self, x: f64, y: f64) -> bool;

    /// Whether the state's reference point lies inside the shape
    fn is_colliding(&self, state: &State) -> bool {
        self.contains_point(state.x, state.y)
    }
}

impl<C: Collider> Collider for [C] {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.iter().any(|c| c.contains_point(x, y))
    }
}

impl<C: Collider> Collider for Vec<C> {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.as_slice().contains_point(x, y)
    }
}

/// Oriented rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleObstacle {
    pub x: f64,
    pub y: f64,
    /// Orientation [rad]
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

impl RectangleObstacle {
    pub fn new(x: f64, y: f64, angle: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            angle,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Corner points in world coordinates, in drawing order
    pub fn corners(&self) -> [Point2D; 4] {
        let hx = self.height / 2.0;
        let hy = self.width / 2.0;
        [(hx, hy), (hx, -hy), (-hx, -hy), (-hx, hy)].map(|(lx, ly)| {
            let (dx, dy) = rotate_point(lx, ly, -self.angle);
            Point2D::new(self.x + dx, self.y + dy)
        })
    }
}

impl Collider for RectangleObstacle {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        let (mid_x, mid_y) = rotate_point(self.x, self.y, self.angle);
        let (px, py) = rotate_point(x, y, self.angle);

        px < mid_x + self.height / 2.0
            && px > mid_x - self.height / 2.0
            && py < mid_y + self.width / 2.0
            && py > mid_y - self.width / 2.0
    }
}

/// Obstacle shapes understood by the explorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    Rectangle(RectangleObstacle),
}

impl Obstacle {
    pub fn rectangle(x: f64, y: f64, angle: f64, width: f64, height: f64) -> Self {
        Obstacle::Rectangle(RectangleObstacle::new(x, y, angle, width, height))
    }

    /// Outline in world coordinates
    pub fn outline(&self) -> Vec<Point2D> {
        match self {
            Obstacle::Rectangle(rect) => rect.corners().to_vec(),
        }
    }
}

impl Collider for Obstacle {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        match self {
            Obstacle::Rectangle(rect) => rect.contains_point(x, y),
        }
    }
}

impl From<RectangleObstacle> for Obstacle {
    fn from(rect: RectangleObstacle) -> Self {
        Obstacle::Rectangle(rect)
    }
}
