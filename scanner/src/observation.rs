//! Flagged-date observation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ephemeris::Body;

/// Angular separation of one tracked body from the Sun, as seen from Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyAngle {
    pub body: Body,
    /// Separation in degrees, [0, 180].
    pub separation_deg: f64,
}

/// One flagged date: the timestamp plus the separation of every tracked body.
///
/// Created only when at least one body sits in a notable configuration on
/// that date. Records are insert-only: once handed to a repository they are
/// never updated or deleted by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub at: DateTime<Utc>,
    pub angles: Vec<BodyAngle>,
}

impl Observation {
    /// Separation recorded for `body`, if it was tracked.
    pub fn angle_for(&self, body: Body) -> Option<f64> {
        self.angles
            .iter()
            .find(|angle| angle.body == body)
            .map(|angle| angle.separation_deg)
    }
}
