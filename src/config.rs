//! Options accepted by [`draw_2d`], [`draw_3d`], and [`number_grid`].
use crate::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draw2Config {
    /// Mark the origin with an `x`.
    pub origin: bool,
    pub axes: bool,
    pub axes_labels: bool,
    pub ticks: bool,
    pub tick_labels: bool,
    pub grid: bool,
    /// Grid step along x and y.
    pub grid_size: Point2,
    pub dark_mode: bool,
    /// Figure width in inches.
    pub width: f64,
    pub dpi: u32,
    /// Equal scale on both axes, otherwise a fixed 4:3 figure.
    pub nice_aspect_ratio: bool,
    /// Export the rendered figure as SVG.
    pub save_as: Option<PathBuf>,
}

impl Default for Draw2Config {
    fn default() -> Self {
        Self {
            origin: false,
            axes: true,
            axes_labels: false,
            ticks: true,
            tick_labels: true,
            grid: true,
            grid_size: [1.0, 1.0],
            dark_mode: true,
            width: 6.0,
            dpi: 100,
            nice_aspect_ratio: true,
            save_as: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draw3Config {
    pub origin: bool,
    pub axes: bool,
    pub axes_labels: bool,
    pub ticks: bool,
    pub tick_labels: bool,
    pub grid: bool,
    /// Tick spacing along x, y, and z.
    pub grid_size: Point3,
    pub dark_mode: bool,
    pub width: f64,
    pub dpi: u32,
    /// Cube shaped box, otherwise a 4:4:3 box in a 4:3 figure.
    pub nice_aspect_ratio: bool,
    pub save_as: Option<PathBuf>,
    /// Camera azimuth in degrees, `None` for the default of -60.
    pub azim: Option<f64>,
    /// Camera elevation in degrees, `None` for the default of 30.
    pub elev: Option<f64>,
    /// Fade markers with distance from the viewer.
    pub depthshade: bool,
}

impl Default for Draw3Config {
    fn default() -> Self {
        Self {
            origin: false,
            axes: true,
            axes_labels: false,
            ticks: true,
            tick_labels: true,
            grid: false,
            grid_size: [1.0, 1.0, 1.0],
            dark_mode: true,
            width: 6.0,
            dpi: 100,
            nice_aspect_ratio: true,
            save_as: None,
            azim: None,
            elev: None,
            depthshade: true,
        }
    }
}

/// A number plane over fixed ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberGridConfig {
    /// `[min, max, step]` along x.
    pub x_range: [f64; 3],
    /// `[min, max, step]` along y.
    pub y_range: [f64; 3],
    /// End the axes in arrow heads.
    pub tips: bool,
    pub dark_mode: bool,
    pub width: f64,
    pub dpi: u32,
    /// Equal scale on both axes, otherwise a 16:9 figure.
    pub nice_aspect_ratio: bool,
    pub save_as: Option<PathBuf>,
}

impl Default for NumberGridConfig {
    fn default() -> Self {
        Self {
            x_range: [-7.0, 7.0, 1.0],
            y_range: [-4.0, 4.0, 1.0],
            tips: false,
            dark_mode: true,
            width: 6.0,
            dpi: 100,
            nice_aspect_ratio: false,
            save_as: None,
        }
    }
}

impl NumberGridConfig {
    pub fn theme(&self) -> Theme {
        Theme::new(self.dark_mode)
    }
}

impl Draw2Config {
    pub fn theme(&self) -> Theme {
        Theme::new(self.dark_mode)
    }
}

impl Draw3Config {
    pub fn theme(&self) -> Theme {
        Theme::new(self.dark_mode)
    }

    pub fn camera(&self) -> Camera {
        let d = Camera::default();
        Camera::new(self.azim.unwrap_or(d.azim), self.elev.unwrap_or(d.elev))
    }
}
