//! Rendering of flagged dates as polar sky diagrams.
//!
//! The scan loop hands a [`SkyPlot`] — the planar projections of the
//! Earth-relative vectors — to whatever implements [`Visualizer`]. The
//! built-in implementation writes an SVG file per flagged date.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::ephemeris::Body;

pub mod svg;

pub use svg::SvgVisualizer;

/// Error type for diagram rendering.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Planar (xy) projections of the Earth-relative vectors for one flagged date.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyPlot {
    pub date: NaiveDate,
    /// Earth-to-Sun direction.
    pub earth_sun_xy: (f64, f64),
    /// Earth-to-body directions, in tracking order.
    pub bodies: Vec<(Body, (f64, f64))>,
}

/// Sink that turns a [`SkyPlot`] into an image file.
pub trait Visualizer {
    /// Render the plot; returns the path of the written file.
    fn render(&self, plot: &SkyPlot) -> Result<PathBuf, VizError>;
}

/// Visualizer that discards every plot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn render(&self, _plot: &SkyPlot) -> Result<PathBuf, VizError> {
        Ok(PathBuf::new())
    }
}
