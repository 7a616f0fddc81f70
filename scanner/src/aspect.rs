//! Tolerance-banded classification of angular separations.
//!
//! A separation is "notable" when it sits within a tolerance band of one of
//! the three classic configurations: conjunction (0 degrees), quadrature
//! (90 degrees), or opposition (180 degrees).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The notable angular configurations between two bodies as seen from a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Quadrature,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 3] = [
        AspectKind::Conjunction,
        AspectKind::Quadrature,
        AspectKind::Opposition,
    ];

    /// The exact separation this configuration corresponds to.
    pub fn target_degrees(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Quadrature => 90.0,
            AspectKind::Opposition => 180.0,
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Quadrature => "quadrature",
            AspectKind::Opposition => "opposition",
        };
        f.write_str(name)
    }
}

/// Classify a separation in degrees against the three targets.
///
/// Each target is compared independently with a strict
/// `|angle - target| < tolerance` test; the first match wins. Inputs are
/// taken as-is: separations produced by [`crate::math::angle_between`] are
/// already in [0, 180] degrees, so no folding is applied.
pub fn classify(angle_deg: f64, tolerance_deg: f64) -> Option<AspectKind> {
    AspectKind::ALL
        .iter()
        .copied()
        .find(|kind| (angle_deg - kind.target_degrees()).abs() < tolerance_deg)
}

/// Whether a separation in radians is within tolerance of any target.
pub fn is_notable(angle_rad: f64, tolerance_deg: f64) -> bool {
    classify(angle_rad.to_degrees(), tolerance_deg).is_some()
}
