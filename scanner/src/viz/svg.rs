//! Hand-written SVG polar diagrams.
//!
//! One file per flagged date, named `planet_pos_YYYYMMDD.svg`. Earth sits at
//! the center, the yellow ray marks the direction to the Sun, and each
//! tracked body gets a colored marker on the unit circle at the bearing of
//! its Earth-relative vector.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ephemeris::Body;

use super::{SkyPlot, Visualizer, VizError};

const SIZE: f64 = 640.0;
const RADIUS: f64 = 240.0;
const MARKER_RADIUS: f64 = 9.0;

/// Renders flagged dates into an output directory, created on first use.
#[derive(Debug, Clone)]
pub struct SvgVisualizer {
    output_dir: PathBuf,
}

impl SvgVisualizer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn marker_color(body: Body) -> &'static str {
        match body {
            Body::Venus => "red",
            Body::Mars => "blue",
            Body::JupiterBarycenter => "green",
            Body::SaturnBarycenter => "magenta",
            Body::Sun => "gold",
            Body::Earth => "steelblue",
        }
    }

    /// Screen coordinates of a point at `bearing` radians on a circle of
    /// `radius` around the center. Screen y grows downward, so the sky's
    /// counterclockwise bearings need the sign flip.
    fn on_circle(bearing: f64, radius: f64) -> (f64, f64) {
        let center = SIZE / 2.0;
        (
            center + radius * bearing.cos(),
            center - radius * bearing.sin(),
        )
    }
}

impl Visualizer for SvgVisualizer {
    fn render(&self, plot: &SkyPlot) -> Result<PathBuf, VizError> {
        fs::create_dir_all(&self.output_dir)?;

        let center = SIZE / 2.0;
        let mut svg = String::with_capacity(2048);

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SIZE}\" height=\"{SIZE}\" \
             viewBox=\"0 0 {SIZE} {SIZE}\">\n"
        ));
        svg.push_str(&format!(
            "  <rect width=\"{SIZE}\" height=\"{SIZE}\" fill=\"white\"/>\n"
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{center}\" cy=\"{center}\" r=\"{RADIUS}\" fill=\"none\" \
             stroke=\"lightgray\"/>\n"
        ));
        svg.push_str(&format!(
            "  <text x=\"{center}\" y=\"28\" text-anchor=\"middle\" font-size=\"18\" \
             font-family=\"sans-serif\">Planet Positions on {}</text>\n",
            plot.date
        ));

        // Earth-Sun line.
        let (sun_x, sun_y) = Self::on_circle(
            plot.earth_sun_xy.1.atan2(plot.earth_sun_xy.0),
            RADIUS,
        );
        svg.push_str(&format!(
            "  <line x1=\"{center}\" y1=\"{center}\" x2=\"{sun_x:.1}\" y2=\"{sun_y:.1}\" \
             stroke=\"gold\" stroke-width=\"3\"/>\n"
        ));

        // Earth marker at the center.
        svg.push_str(&format!(
            "  <circle cx=\"{center}\" cy=\"{center}\" r=\"5\" fill=\"steelblue\"/>\n"
        ));

        // One marker per tracked body, plus a legend entry.
        for (index, (body, (x, y))) in plot.bodies.iter().enumerate() {
            let color = Self::marker_color(*body);
            let (cx, cy) = Self::on_circle(y.atan2(*x), RADIUS);
            svg.push_str(&format!(
                "  <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{MARKER_RADIUS}\" \
                 fill=\"{color}\"/>\n"
            ));

            let legend_y = 56.0 + 22.0 * index as f64;
            svg.push_str(&format!(
                "  <circle cx=\"24\" cy=\"{legend_y:.0}\" r=\"6\" fill=\"{color}\"/>\n"
            ));
            svg.push_str(&format!(
                "  <text x=\"38\" y=\"{:.0}\" font-size=\"14\" \
                 font-family=\"sans-serif\">{body}</text>\n",
                legend_y + 5.0
            ));
        }

        svg.push_str("</svg>\n");

        let path = self
            .output_dir
            .join(format!("planet_pos_{}.svg", plot.date.format("%Y%m%d")));
        fs::write(&path, svg)?;
        Ok(path)
    }
}
