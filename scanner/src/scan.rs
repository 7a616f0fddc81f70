//! The date-stepped scan loop.
//!
//! Walks an inclusive date range one step at a time. Per date it fetches the
//! Earth, Sun, and tracked-body positions, derives the Earth-relative
//! vectors, measures each body's separation from the Sun, and classifies the
//! separations against the tolerance band. Dates where any body is notable
//! are logged, recorded through the repository, and rendered by the
//! visualizer.
//!
//! Failure semantics: a repository error is logged and the loop continues —
//! it never suppresses the visualizer call for that date. Ephemeris and
//! visualizer errors propagate and abort the scan.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use log::{debug, info, warn};

use crate::aspect;
use crate::db::repository::ObservationRepository;
use crate::ephemeris::{Body, EphemerisError, EphemerisProvider};
use crate::math::{self, MathError};
use crate::observation::{BodyAngle, Observation};
use crate::viz::{SkyPlot, Visualizer, VizError};

/// Error type for a scan run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    /// A zero-length relative vector; two bodies coincided in the ephemeris.
    #[error("degenerate geometry at {at}: {source}")]
    Geometry { at: DateTime<Utc>, source: MathError },

    #[error(transparent)]
    Render(#[from] VizError),
}

/// Scan parameters.
///
/// The defaults reproduce the historical run: 1900-01-01 through 2035-12-31,
/// one-day steps, a one-degree tolerance band, and the four classically
/// tracked planets.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// First date scanned (inclusive).
    pub start: NaiveDate,
    /// Last date scanned (inclusive).
    pub end: NaiveDate,
    /// Step between scanned dates, in whole days.
    pub step_days: u32,
    /// Half-width of the band around 0/90/180 degrees.
    pub tolerance_deg: f64,
    /// Tracked bodies, in recording order.
    pub bodies: Vec<Body>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2035, 12, 31).expect("valid calendar date"),
            step_days: 1,
            tolerance_deg: 1.0,
            bodies: Body::DEFAULT_TRACKED.to_vec(),
        }
    }
}

impl ScanConfig {
    /// Check the configuration for values the loop cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.step_days == 0 {
            return Err("step_days must be at least 1".into());
        }
        if !(self.tolerance_deg > 0.0) {
            return Err("tolerance_deg must be positive".into());
        }
        if self.bodies.is_empty() {
            return Err("at least one tracked body is required".into());
        }
        // Earth-Earth and Sun-Sun separations are zero-length vectors.
        if self.bodies.contains(&Body::Earth) || self.bodies.contains(&Body::Sun) {
            return Err("earth and sun cannot be tracked bodies".into());
        }
        Ok(())
    }
}

/// Inclusive, strictly monotonic walk over the scan dates.
///
/// Yields nothing when `start > end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Duration,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, step_days: u32) -> Self {
        Self {
            next: Some(start),
            end,
            step: Duration::days(i64::from(step_days)),
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.checked_add_signed(self.step);
        Some(current)
    }
}

/// A calendar date as an instant: midnight UTC.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Counters reported after a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub dates_scanned: u64,
    pub flagged: u64,
    pub recorder_failures: u64,
}

/// Run the scan over `config`'s date range.
///
/// # Arguments
/// * `provider` - Position oracle for all bodies
/// * `repository` - Sink for flagged observations
/// * `visualizer` - Sink for the per-date sky diagrams
/// * `config` - Validated scan parameters
///
/// # Returns
/// * `Ok(ScanSummary)` - Counters for the completed run
/// * `Err(ScanError)` - On invalid configuration, ephemeris failure,
///   degenerate geometry, or a visualizer failure
pub fn run<P, R, V>(
    provider: &P,
    repository: &R,
    visualizer: &V,
    config: &ScanConfig,
) -> Result<ScanSummary, ScanError>
where
    P: EphemerisProvider + ?Sized,
    R: ObservationRepository + ?Sized,
    V: Visualizer + ?Sized,
{
    config.validate().map_err(ScanError::InvalidConfig)?;

    let mut summary = ScanSummary::default();

    for date in DateRange::new(config.start, config.end, config.step_days) {
        let at = midnight_utc(date);

        let earth = provider.position_km(Body::Earth, at)?;
        let sun = provider.position_km(Body::Sun, at)?;
        let earth_sun = sun - earth;

        let mut angles = Vec::with_capacity(config.bodies.len());
        let mut rays = Vec::with_capacity(config.bodies.len());
        for &body in &config.bodies {
            let relative = provider.position_km(body, at)? - earth;
            let angle = math::angle_between(&earth_sun, &relative)
                .map_err(|source| ScanError::Geometry { at, source })?;
            angles.push(BodyAngle {
                body,
                separation_deg: angle.to_degrees(),
            });
            rays.push((body, relative));
        }

        summary.dates_scanned += 1;

        let notable = angles
            .iter()
            .any(|a| aspect::classify(a.separation_deg, config.tolerance_deg).is_some());
        if !notable {
            continue;
        }

        info!("Date: {date}");
        for angle in &angles {
            info!("  {} angle: {:.2}", angle.body, angle.separation_deg);
        }

        let observation = Observation { at, angles };
        if let Err(error) = repository.record(&observation) {
            warn!("failed to record observation for {date}: {error}");
            summary.recorder_failures += 1;
        }

        let plot = SkyPlot {
            date,
            earth_sun_xy: earth_sun.xy(),
            bodies: rays.iter().map(|(body, v)| (*body, v.xy())).collect(),
        };
        let rendered = visualizer.render(&plot)?;
        debug!("rendered {}", rendered.display());

        summary.flagged += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let dates: Vec<_> = DateRange::new(date(2000, 1, 1), date(2000, 1, 3), 1).collect();
        assert_eq!(
            dates,
            vec![date(2000, 1, 1), date(2000, 1, 2), date(2000, 1, 3)]
        );
    }

    #[test]
    fn date_range_honors_the_step() {
        let dates: Vec<_> = DateRange::new(date(2000, 1, 1), date(2000, 1, 10), 7).collect();
        assert_eq!(dates, vec![date(2000, 1, 1), date(2000, 1, 8)]);
    }

    #[test]
    fn date_range_is_empty_when_start_is_after_end() {
        let mut range = DateRange::new(date(2000, 1, 2), date(2000, 1, 1), 1);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn single_day_range_yields_one_date() {
        let dates: Vec<_> = DateRange::new(date(2000, 1, 1), date(2000, 1, 1), 1).collect();
        assert_eq!(dates, vec![date(2000, 1, 1)]);
    }

    #[test]
    fn midnight_utc_pins_the_time_of_day() {
        let at = midnight_utc(date(1900, 1, 1));
        assert_eq!(at.to_rfc3339(), "1900-01-01T00:00:00+00:00");
    }

    #[test]
    fn default_config_matches_the_historical_run() {
        let config = ScanConfig::default();
        assert_eq!(config.start, date(1900, 1, 1));
        assert_eq!(config.end, date(2035, 12, 31));
        assert_eq!(config.step_days, 1);
        assert_eq!(config.tolerance_deg, 1.0);
        assert_eq!(config.bodies, Body::DEFAULT_TRACKED.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_unusable_configs() {
        let mut config = ScanConfig {
            step_days: 0,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());

        config = ScanConfig {
            tolerance_deg: 0.0,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());

        config = ScanConfig {
            bodies: vec![],
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());

        config = ScanConfig {
            bodies: vec![Body::Earth],
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
