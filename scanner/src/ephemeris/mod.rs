//! Ephemeris abstraction: body identifiers and the position provider seam.
//!
//! The scanner treats the ephemeris as an oracle: given a body and an
//! instant it returns a cartesian position in km. All bodies returned by one
//! provider share a single inertial frame, which is all the angular math
//! requires. [`KeplerProvider`] is the built-in approximate implementation;
//! anything that can answer [`EphemerisProvider::position_km`] can be
//! swapped in.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::math::Vec3;

pub mod kepler;

pub use kepler::KeplerProvider;

/// Error type for ephemeris lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EphemerisError {
    #[error("{0} is not supported by this provider")]
    UnsupportedBody(Body),

    #[error("{body} position requested at {at}, outside the provider's validity range")]
    OutOfRange { body: Body, at: DateTime<Utc> },
}

/// Celestial bodies the scanner knows about.
///
/// Jupiter and Saturn resolve to their system barycenters, the usual
/// position proxy for a planet plus its moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Earth,
    Venus,
    Mars,
    #[serde(rename = "jupiter")]
    JupiterBarycenter,
    #[serde(rename = "saturn")]
    SaturnBarycenter,
}

impl Body {
    /// The four planets tracked by default.
    pub const DEFAULT_TRACKED: [Body; 4] = [
        Body::Venus,
        Body::Mars,
        Body::JupiterBarycenter,
        Body::SaturnBarycenter,
    ];
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::JupiterBarycenter => "Jupiter",
            Body::SaturnBarycenter => "Saturn",
        };
        f.write_str(name)
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "earth" => Ok(Body::Earth),
            "venus" => Ok(Body::Venus),
            "mars" => Ok(Body::Mars),
            "jupiter" | "jupiter barycenter" => Ok(Body::JupiterBarycenter),
            "saturn" | "saturn barycenter" => Ok(Body::SaturnBarycenter),
            other => Err(format!("unknown body: {other}")),
        }
    }
}

/// Source of body positions.
///
/// Implementations must return positions for all bodies in one common
/// inertial frame. Positions are recomputed per lookup; the scanner never
/// caches them across timestamps.
pub trait EphemerisProvider {
    /// Position of `body` at `at`, in km.
    fn position_km(&self, body: Body, at: DateTime<Utc>) -> Result<Vec3, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_ids_round_trip() {
        for (id, body) in [
            ("sun", Body::Sun),
            ("earth", Body::Earth),
            ("venus", Body::Venus),
            ("mars", Body::Mars),
            ("jupiter", Body::JupiterBarycenter),
            ("jupiter barycenter", Body::JupiterBarycenter),
            ("saturn", Body::SaturnBarycenter),
            ("saturn barycenter", Body::SaturnBarycenter),
        ] {
            assert_eq!(id.parse::<Body>().unwrap(), body);
        }
        assert!("pluto".parse::<Body>().is_err());
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(Body::JupiterBarycenter.to_string(), "Jupiter");
        assert_eq!(Body::Venus.to_string(), "Venus");
    }
}
