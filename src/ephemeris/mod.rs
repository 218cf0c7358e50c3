//! Solar-position abstraction for supporting both real and stubbed ephemerides.
//!
//! This module provides a trait-based abstraction that allows the engine to
//! use either the built-in astronomical series or a fixed longitude for
//! testing. The engine depends only on the trait, injected at construction,
//! so any conformant ephemeris source is substitutable without touching the
//! calendar arithmetic.

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

mod solar;

pub use solar::ApparentSun;

/// Trait for querying the sun's position at a civil instant.
#[cfg_attr(test, automock)]
pub trait SolarEphemeris: Send + Sync {
    /// Apparent geocentric ecliptic longitude of the sun in degrees,
    /// normalized to [0, 360), for the given UTC instant.
    ///
    /// Implementations must be accurate to sub-degree precision; the term
    /// boundary window is ±1.5°, so coarser sources would corrupt the
    /// boundary flag near solar-term crossings.
    fn solar_longitude(&self, instant: DateTime<Utc>) -> anyhow::Result<f64>;
}

/// Ephemeris stub that reports the same longitude for every instant.
///
/// Useful for exercising the calendar arithmetic deterministically: pick a
/// longitude, and the term resolution and year rollover behavior follow
/// from it regardless of the queried date.
#[derive(Debug, Clone, Copy)]
pub struct FixedLongitude(pub f64);

impl SolarEphemeris for FixedLongitude {
    fn solar_longitude(&self, _instant: DateTime<Utc>) -> anyhow::Result<f64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_longitude_ignores_instant() {
        let stub = FixedLongitude(123.45);
        let a = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2030, 7, 15, 23, 59, 59).unwrap();
        assert_eq!(stub.solar_longitude(a).unwrap(), 123.45);
        assert_eq!(stub.solar_longitude(b).unwrap(), 123.45);
    }
}
