//! Approximate planetary positions from Keplerian mean elements.
//!
//! Elements are the JPL/Standish J2000 values with secular rates per Julian
//! century, valid for 1800-2050, which covers the default scan range.
//! Positions are heliocentric ecliptic-J2000 cartesian km with the Sun at
//! the origin; Earth uses the Earth-Moon barycenter elements. Accuracy is on
//! the order of arcminutes, which is ample for a one-degree tolerance band.

use chrono::{DateTime, Datelike, Utc};

use super::{Body, EphemerisError, EphemerisProvider};
use crate::math::Vec3;

const AU_KM: f64 = 149_597_870.7;

/// J2000 epoch as a Modified Julian Date.
const MJD_J2000: f64 = 51544.5;

/// Keplerian elements at J2000 with secular rates per Julian century.
/// Source: Standish, "Approximate Positions of the Planets", 1800-2050 table.
#[derive(Debug, Clone, Copy)]
struct MeanElements {
    /// Semi-major axis (AU) and rate.
    a0: f64,
    a_dot: f64,
    /// Eccentricity and rate.
    e0: f64,
    e_dot: f64,
    /// Inclination (deg) and rate.
    i0: f64,
    i_dot: f64,
    /// Mean longitude (deg) and rate.
    l0: f64,
    l_dot: f64,
    /// Longitude of perihelion (deg) and rate.
    w0: f64,
    w_dot: f64,
    /// Longitude of the ascending node (deg) and rate.
    o0: f64,
    o_dot: f64,
}

const VENUS: MeanElements = MeanElements {
    a0: 0.72333566,
    a_dot: 0.00000390,
    e0: 0.00677672,
    e_dot: -0.00004107,
    i0: 3.39467605,
    i_dot: -0.00078890,
    l0: 181.97909950,
    l_dot: 58517.81538729,
    w0: 131.60246718,
    w_dot: 0.00268329,
    o0: 76.67984255,
    o_dot: -0.27769418,
};

const EARTH_MOON_BARYCENTER: MeanElements = MeanElements {
    a0: 1.00000261,
    a_dot: 0.00000562,
    e0: 0.01671123,
    e_dot: -0.00004392,
    i0: -0.00001531,
    i_dot: -0.01294668,
    l0: 100.46457166,
    l_dot: 35999.37244981,
    w0: 102.93768193,
    w_dot: 0.32327364,
    o0: 0.0,
    o_dot: 0.0,
};

const MARS: MeanElements = MeanElements {
    a0: 1.52371034,
    a_dot: 0.00001847,
    e0: 0.09339410,
    e_dot: 0.00007882,
    i0: 1.84969142,
    i_dot: -0.00813131,
    l0: -4.55343205,
    l_dot: 19140.30268499,
    w0: -23.94362959,
    w_dot: 0.44441088,
    o0: 49.55953891,
    o_dot: -0.29257343,
};

const JUPITER: MeanElements = MeanElements {
    a0: 5.20288700,
    a_dot: -0.00011607,
    e0: 0.04838624,
    e_dot: -0.00013253,
    i0: 1.30439695,
    i_dot: -0.00183714,
    l0: 34.39644051,
    l_dot: 3034.74612775,
    w0: 14.72847983,
    w_dot: 0.21252668,
    o0: 100.47390909,
    o_dot: 0.20469106,
};

const SATURN: MeanElements = MeanElements {
    a0: 9.53667594,
    a_dot: -0.00125060,
    e0: 0.05386179,
    e_dot: -0.00050991,
    i0: 2.48599187,
    i_dot: 0.00193609,
    l0: 49.95424423,
    l_dot: 1222.49362201,
    w0: 92.59887831,
    w_dot: -0.41897216,
    o0: 113.66242448,
    o_dot: -0.28867794,
};

/// Built-in approximate ephemeris.
///
/// Stateless; every lookup recomputes the position from the element table.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeplerProvider;

impl KeplerProvider {
    /// First calendar year covered by the element table.
    pub const FIRST_YEAR: i32 = 1800;
    /// First calendar year past the end of the element table.
    pub const END_YEAR: i32 = 2050;

    fn elements(body: Body) -> Option<&'static MeanElements> {
        match body {
            Body::Sun => None,
            Body::Earth => Some(&EARTH_MOON_BARYCENTER),
            Body::Venus => Some(&VENUS),
            Body::Mars => Some(&MARS),
            Body::JupiterBarycenter => Some(&JUPITER),
            Body::SaturnBarycenter => Some(&SATURN),
        }
    }
}

impl EphemerisProvider for KeplerProvider {
    fn position_km(&self, body: Body, at: DateTime<Utc>) -> Result<Vec3, EphemerisError> {
        if !(Self::FIRST_YEAR..Self::END_YEAR).contains(&at.year()) {
            return Err(EphemerisError::OutOfRange { body, at });
        }
        match Self::elements(body) {
            // The Sun is the origin of the heliocentric frame.
            None => Ok(Vec3::default()),
            Some(elements) => Ok(heliocentric_position_km(
                elements,
                julian_centuries_since_j2000(at),
            )),
        }
    }
}

/// Julian centuries elapsed since the J2000 epoch.
fn julian_centuries_since_j2000(at: DateTime<Utc>) -> f64 {
    let mjd = at.timestamp() as f64 / 86400.0 + 40587.0;
    (mjd - MJD_J2000) / 36525.0
}

/// Wrap an angle in degrees to [-180, 180).
fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Solve Kepler's equation E - e*sin(E) = M by Newton-Raphson iteration.
/// `mean_anomaly` in radians; returns the eccentric anomaly in radians.
fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ea = mean_anomaly + eccentricity * mean_anomaly.sin();
    for _ in 0..12 {
        let delta = ea - eccentricity * ea.sin() - mean_anomaly;
        ea -= delta / (1.0 - eccentricity * ea.cos());
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric ecliptic-J2000 position in km at `t` Julian centuries from
/// J2000.
fn heliocentric_position_km(el: &MeanElements, t: f64) -> Vec3 {
    let a = el.a0 + el.a_dot * t;
    let e = el.e0 + el.e_dot * t;
    let i = (el.i0 + el.i_dot * t).to_radians();
    let l = el.l0 + el.l_dot * t;
    let w_bar = el.w0 + el.w_dot * t;
    let node = (el.o0 + el.o_dot * t).to_radians();

    // Argument of perihelion and mean anomaly from the longitudes.
    let w = (w_bar - (el.o0 + el.o_dot * t)).to_radians();
    let m = normalize_deg(l - w_bar).to_radians();

    let ea = solve_kepler(m, e);

    // Orbital-plane coordinates with x toward perihelion.
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    // Rotate by argument of perihelion, inclination, and ascending node.
    let (sin_w, cos_w) = w.sin_cos();
    let (sin_o, cos_o) = node.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    let x = (cos_w * cos_o - sin_w * sin_o * cos_i) * xp
        + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp;
    let y = (cos_w * sin_o + sin_w * cos_o * cos_i) * xp
        + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp;
    let z = (sin_w * sin_i) * xp + (cos_w * sin_i) * yp;

    Vec3::new(x * AU_KM, y * AU_KM, z * AU_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::angle_between;
    use chrono::{Duration, NaiveDate};

    fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
    }

    #[test]
    fn sun_is_at_the_origin() {
        let provider = KeplerProvider;
        let pos = provider.position_km(Body::Sun, midnight(2000, 1, 1)).unwrap();
        assert_eq!(pos, Vec3::default());
    }

    #[test]
    fn earth_stays_near_one_au() {
        let provider = KeplerProvider;
        for date in [
            midnight(1900, 1, 1),
            midnight(1977, 8, 20),
            midnight(2000, 1, 1),
            midnight(2035, 12, 31),
        ] {
            let r = provider.position_km(Body::Earth, date).unwrap().norm() / AU_KM;
            assert!((0.97..1.03).contains(&r), "|earth| = {r} AU at {date}");
        }
    }

    #[test]
    fn earth_orbit_is_close_to_the_ecliptic_plane() {
        let provider = KeplerProvider;
        let pos = provider.position_km(Body::Earth, midnight(2000, 1, 1)).unwrap();
        assert!(pos.z.abs() / AU_KM < 0.001);
    }

    #[test]
    fn kepler_solver_handles_circular_orbits() {
        assert!((solve_kepler(1.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn venus_elongation_never_exceeds_its_geometric_maximum() {
        // An inner planet's separation from the Sun is bounded by
        // asin(a_venus / a_earth) ~ 47 degrees plus eccentricity slack.
        let provider = KeplerProvider;
        let mut date = midnight(1990, 1, 1);
        for _ in 0..80 {
            let earth = provider.position_km(Body::Earth, date).unwrap();
            let sun = provider.position_km(Body::Sun, date).unwrap();
            let venus = provider.position_km(Body::Venus, date).unwrap();
            let angle = angle_between(&(sun - earth), &(venus - earth))
                .unwrap()
                .to_degrees();
            assert!(angle < 48.5, "venus elongation {angle} at {date}");
            date = date + Duration::days(37);
        }
    }

    #[test]
    fn jupiter_reaches_opposition_within_a_synodic_period() {
        let provider = KeplerProvider;
        let mut date = midnight(2010, 1, 1);
        let mut max_angle = 0.0_f64;
        // 450 daily samples span more than one Earth-Jupiter synodic period.
        for _ in 0..450 {
            let earth = provider.position_km(Body::Earth, date).unwrap();
            let sun = provider.position_km(Body::Sun, date).unwrap();
            let jupiter = provider
                .position_km(Body::JupiterBarycenter, date)
                .unwrap();
            let angle = angle_between(&(sun - earth), &(jupiter - earth))
                .unwrap()
                .to_degrees();
            max_angle = max_angle.max(angle);
            date = date + Duration::days(1);
        }
        assert!(max_angle > 165.0, "max elongation only {max_angle}");
    }

    #[test]
    fn dates_outside_the_element_table_are_rejected() {
        let provider = KeplerProvider;
        for date in [midnight(1799, 12, 31), midnight(2050, 1, 1)] {
            let result = provider.position_km(Body::Mars, date);
            assert!(matches!(
                result,
                Err(EphemerisError::OutOfRange { body: Body::Mars, .. })
            ));
        }
    }
}
