//! Sun-planet aspect scanner.
//!
//! Walks a daily timeline, measures the angular separation between the Sun
//! and a configurable set of planets as seen from Earth, and flags dates
//! where any separation is within a tolerance band of a conjunction (0
//! degrees), quadrature (90 degrees), or opposition (180 degrees). Flagged
//! dates are written through a repository backend and rendered as polar sky
//! diagrams.
//!
//! Data flows one direction:
//!
//! ```text
//! time -> ephemeris -> vectors -> angles -> classification -> (repository, visualizer)
//! ```
//!
//! The ephemeris, the repository, and the visualizer are all traits; the
//! scan loop in [`scan`] composes whichever implementations it is handed.

pub mod aspect;
pub mod db;
pub mod ephemeris;
pub mod math;
pub mod observation;
pub mod scan;
pub mod settings;
pub mod viz;

pub use observation::{BodyAngle, Observation};
