//! Visualization utilities for motion_lattice
//!
//! Provides a unified interface for plotting using gnuplot.

use gnuplot::{Figure, Caption, Color, PointSymbol, PointSize, LineWidth, AxesCommon, AutoOption};

use crate::common::{Point2D, Path2D, Visualizable, RoboticsError};
use crate::path_planning::motion_lattice::{Explorer, Obstacle, Trajectory, VehicleFootprint, State};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";

    // Semantic colors
    pub const OBSTACLE: &str = "#052E6B";
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const CHOSEN: &str = "#035A20";
    pub const COLLIDING: &str = "#5F1E1E";
    pub const EXPLORED: &str = "#646464";
    pub const VEHICLE: &str = BLACK;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::CHOSEN.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Plot a path
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.figure.axes2d()
            .lines(&path.x_coords(), &path.y_coords(), &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self
    }

    /// Plot a closed polygon outline
    pub fn plot_polygon(&mut self, corners: &[Point2D], style: &PathStyle) -> &mut Self {
        let mut points = corners.to_vec();
        if let Some(&first) = corners.first() {
            points.push(first);
        }
        self.plot_path(&Path2D::from_points(points), style)
    }

    /// Plot a single point (start, goal, etc.)
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.figure.axes2d()
            .points(&[point.x], &[point.y], &[
                Caption(&style.caption),
                Color(&style.color),
                PointSymbol(style.symbol),
                PointSize(style.size),
            ]);
        self
    }

    /// Plot the vehicle body at a state
    pub fn plot_vehicle(&mut self, state: &State, footprint: &VehicleFootprint) -> &mut Self {
        let points = footprint.sample_points(state);
        // Corners in drawing order: front left, front right, rear right, rear left
        let outline = [points[0], points[1], points[3], points[2]];
        self.plot_polygon(&outline, &PathStyle::new(colors::VEHICLE, "").with_line_width(1.0))
    }

    /// Plot start position
    pub fn plot_start(&mut self, point: Point2D) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    /// Plot goal position
    pub fn plot_goal(&mut self, point: Point2D) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::GOAL, "Goal").with_size(1.5).with_symbol('*'))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), RoboticsError> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| RoboticsError::VisualizationError(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> Result<(), RoboticsError> {
        self.apply_settings();
        self.figure
            .save_to_svg(path, 800, 600)
            .map_err(|e| RoboticsError::VisualizationError(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizable for Obstacle {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_polygon(&self.outline(), &PathStyle::new(colors::OBSTACLE, ""));
    }
}

impl Visualizable for Trajectory<'_> {
    fn visualize(&self, vis: &mut Visualizer) {
        let caption = format!("Best (cost {:.2})", self.cost);
        vis.plot_path(&self.to_path(), &PathStyle::new(colors::CHOSEN, &caption).with_line_width(3.0));
    }
}

impl Visualizable for Explorer {
    /// Obstacles, every explored segment, start and goal
    fn visualize(&self, vis: &mut Visualizer) {
        for obstacle in self.obstacles() {
            obstacle.visualize(vis);
        }

        for (k, layer) in self.layers().iter().enumerate().skip(1) {
            for segment in layer {
                // Draw from the parent tip so consecutive segments connect
                let mut path = Path2D::new();
                if let Some(parent) = self.layers()[k - 1].get(segment.prev_idx) {
                    path.push(parent.last_state().position());
                }
                for state in &segment.states {
                    path.push(state.position());
                }

                let color = if segment.is_colliding() { colors::COLLIDING } else { colors::EXPLORED };
                vis.plot_path(&path, &PathStyle::new(color, "").with_line_width(1.0));
            }
        }

        vis.plot_start(self.initial_state().position());
        vis.plot_goal(self.goal());
    }
}
