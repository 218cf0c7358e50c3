//! Built-in apparent solar longitude ephemeris.
//!
//! Computes the sun's apparent geocentric ecliptic longitude from a compact
//! trigonometric series: mean longitude and mean anomaly as polynomials in
//! Julian centuries, the equation of center, and a nutation/aberration
//! correction. Accuracy is a few hundredths of a degree across several
//! centuries around J2000, comfortably inside the ±1.5° boundary window
//! the term resolver cares about.
//!
//! The series is evaluated in terrestrial time; a fixed ΔT estimate covers
//! the TT−UTC difference, whose effect on solar longitude is under a
//! thousandth of a degree for nearby decades.

use chrono::{DateTime, Utc};

use super::SolarEphemeris;

/// Julian day number of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian day number of the J2000.0 epoch (2000-01-01T12:00:00 TT).
const J2000_JD: f64 = 2451545.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36525.0;

/// Fixed ΔT (TT − UTC) estimate in seconds.
const DELTA_T_SECONDS: f64 = 69.0;

/// Built-in solar-position provider.
///
/// Stateless and infallible for any representable instant; the trait's
/// `Result` exists for external providers with real failure modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApparentSun;

impl ApparentSun {
    pub fn new() -> Self {
        Self
    }

    /// Julian ephemeris centuries since J2000.0 for a UTC instant.
    fn julian_centuries(instant: DateTime<Utc>) -> f64 {
        let seconds =
            instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_millis()) / 1000.0;
        let jd = seconds / 86_400.0 + UNIX_EPOCH_JD;
        let jde = jd + DELTA_T_SECONDS / 86_400.0;
        (jde - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Apparent longitude in degrees for the given Julian centuries.
    fn apparent_longitude(t: f64) -> f64 {
        // Geometric mean longitude and mean anomaly of the sun
        let mean_longitude = polynomial(t, &[280.466_46, 36_000.769_83, 0.000_303_2]);
        let mean_anomaly = polynomial(t, &[357.529_11, 35_999.050_29, -0.000_153_7]);

        let m = mean_anomaly.to_radians();
        let equation_of_center = polynomial(t, &[1.914_602, -0.004_817, -0.000_014]) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();

        let true_longitude = mean_longitude + equation_of_center;

        // Nutation in longitude and annual aberration, folded into the
        // standard correction against the longitude of the ascending node
        let omega = (125.04 - 1_934.136 * t).to_radians();
        let apparent = true_longitude - 0.005_69 - 0.004_78 * omega.sin();

        normalize_degrees(apparent)
    }
}

impl SolarEphemeris for ApparentSun {
    fn solar_longitude(&self, instant: DateTime<Utc>) -> anyhow::Result<f64> {
        let t = Self::julian_centuries(instant);
        Ok(Self::apparent_longitude(t))
    }
}

/// Evaluate a polynomial with coefficients in ascending order of power.
fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// Normalize an angle in degrees to [0, 360).
fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
