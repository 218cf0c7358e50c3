//! The four-pillars (saju) calculation engine.
//!
//! Converts a civil birth moment into the four pillars of the sexagenary
//! calendar, using the sun's ecliptic longitude, not fixed calendar dates,
//! to place solar-term and year boundaries. One longitude sample is taken
//! per calculation; everything after it is deterministic cyclic arithmetic.
//!
//! ## Module Structure
//!
//! - [`cycle`]: the stem/branch/element symbol tables
//! - [`pillar`]: the parity-checked (stem, branch) value type
//! - [`solar_terms`]: longitude → solar month and boundary proximity
//! - [`calculators`]: the four pillar derivations as free functions
//! - [`luck`]: luck-cycle direction from year stem polarity and gender
//!
//! ## Failure Policy
//!
//! `ChartCalculator::calculate` either returns a complete chart or a single
//! [`CalculationError`]; there are no partial results, silent fallbacks, or
//! internal retries. The engine is stateless and side-effect-free beyond
//! the one ephemeris query, so concurrent calculations need no coordination
//! and identical inputs always produce identical records.

pub mod calculators;
pub mod cycle;
pub mod luck;
pub mod pillar;
pub mod solar_terms;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::{CALCULATION_METHOD, DEFAULT_TIMEZONE, NOON_REFERENCE_HOUR};
use crate::ephemeris::{ApparentSun, SolarEphemeris};
use crate::error::CalculationError;

pub use calculators::{HourWindow, hour_windows};
pub use cycle::{Branch, Element, Polarity, Stem};
pub use luck::{Gender, LuckCycle, LuckDirection};
pub use pillar::Pillar;
pub use solar_terms::BoundaryReason;

/// A civil birth moment plus calculation flags.
///
/// Built fluently from the mandatory date:
///
/// ```
/// use sajur::ChartRequest;
/// use sajur::chart::Gender;
///
/// let request = ChartRequest::new(1978, 5, 16)
///     .at(11, 0)
///     .with_gender(Gender::Male);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Birth hour 0–23; `None` means the birth time is unknown and the
    /// hour pillar is omitted from the result.
    pub hour: Option<u32>,
    pub minute: u32,
    pub gender: Option<Gender>,
    /// Timezone the civil date/time is expressed in.
    pub timezone: Tz,
    /// Apply the fixed −30 minute solar-time correction to the hour pillar.
    pub use_solar_time: bool,
}

impl ChartRequest {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: 0,
            gender: None,
            timezone: default_timezone(),
            use_solar_time: true,
        }
    }

    /// Set the birth time.
    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = Some(hour);
        self.minute = minute;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn in_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Disable the solar-time correction (clock-time hour windows).
    pub fn without_solar_time(mut self) -> Self {
        self.use_solar_time = false;
        self
    }
}

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
        .parse()
        .expect("default timezone name is a valid IANA identifier")
}

/// The day master: the day pillar's stem, the chart's core identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub description: &'static str,
}

impl DayMaster {
    fn of(stem: Stem) -> Self {
        Self {
            stem,
            element: stem.element(),
            description: stem.day_master_description(),
        }
    }
}

/// Diagnostic metadata carried alongside the pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMeta {
    /// The longitude sample the term resolution was based on, rounded to
    /// two decimals.
    pub solar_longitude_deg: f64,
    /// Name of the solar month containing the sample.
    pub solar_term: &'static str,
    /// Whether the sample sits within ±1.5° of a term boundary.
    pub is_boundary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_reason: Option<BoundaryReason>,
    /// Echo of the solar-time flag the hour pillar was computed with.
    pub solar_time_applied: bool,
    /// IANA name of the timezone the civil time was interpreted in.
    pub timezone: String,
    pub calculation_method: &'static str,
}

/// A complete four-pillars chart. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuChart {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    /// Absent when the birth hour was not supplied: a distinct, valid
    /// state meaning "birth time unknown", not a placeholder pillar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_pillar: Option<Pillar>,
    pub day_master: DayMaster,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luck: Option<LuckCycle>,
    pub meta: ChartMeta,
}

/// The calculation engine.
///
/// Holds nothing but the injected solar-position provider behind an `Arc`,
/// so it is cheap to clone across threads and trivially safe to share.
#[derive(Clone)]
pub struct ChartCalculator {
    ephemeris: Arc<dyn SolarEphemeris>,
}

impl ChartCalculator {
    /// Build a calculator around any conformant ephemeris source.
    pub fn new(ephemeris: Arc<dyn SolarEphemeris>) -> Self {
        Self { ephemeris }
    }

    /// Build a calculator around the built-in apparent-longitude series.
    pub fn with_default_ephemeris() -> Self {
        Self::new(Arc::new(ApparentSun::new()))
    }

    /// Compute the chart for a birth moment.
    ///
    /// Queries the provider once (at the birth time, or at noon when the
    /// hour is unknown, since only the month/year boundary depends on the
    /// sample), then derives year, month, day and (optionally) hour
    /// pillars. Fails atomically: any invalid input, provider failure, or
    /// malformed index aborts the whole calculation.
    pub fn calculate(&self, request: &ChartRequest) -> Result<SajuChart, CalculationError> {
        let date = NaiveDate::from_ymd_opt(request.year, request.month, request.day).ok_or(
            CalculationError::InvalidDate {
                year: request.year,
                month: request.month,
                day: request.day,
            },
        )?;

        if request.hour.is_some_and(|h| h > 23) || request.minute > 59 {
            return Err(CalculationError::InvalidTime {
                hour: request.hour.unwrap_or(0),
                minute: request.minute,
            });
        }

        // One longitude sample per calculation
        let reference_hour = request.hour.unwrap_or(NOON_REFERENCE_HOUR);
        let local = date
            .and_hms_opt(reference_hour, request.minute, 0)
            .ok_or(CalculationError::InvalidTime {
                hour: reference_hour,
                minute: request.minute,
            })?;
        let instant = match request.timezone.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(..) | LocalResult::None => {
                return Err(CalculationError::UnresolvableLocalTime {
                    local,
                    timezone: request.timezone,
                });
            }
        };
        let longitude = self
            .ephemeris
            .solar_longitude(instant)
            .map_err(CalculationError::Ephemeris)?;

        let resolution = solar_terms::resolve(longitude)?;

        let year_pillar =
            calculators::year_pillar(request.year, request.month, resolution.month_branch)?;
        let month_pillar = calculators::month_pillar(year_pillar.stem(), resolution.month_branch)?;
        let day_pillar = calculators::day_pillar(date)?;
        let hour_pillar = request
            .hour
            .map(|hour| {
                calculators::hour_pillar(
                    hour,
                    request.minute,
                    day_pillar.stem(),
                    request.use_solar_time,
                )
            })
            .transpose()?;

        let day_master = DayMaster::of(day_pillar.stem());
        let luck = request
            .gender
            .map(|gender| luck::luck_cycle(year_pillar.stem(), gender));

        Ok(SajuChart {
            year_pillar,
            month_pillar,
            day_pillar,
            hour_pillar,
            day_master,
            luck,
            meta: ChartMeta {
                solar_longitude_deg: round_to_hundredths(longitude),
                solar_term: resolution.term_name,
                is_boundary: resolution.is_boundary,
                boundary_reason: resolution.boundary_reason,
                solar_time_applied: request.use_solar_time,
                timezone: request.timezone.name().to_string(),
                calculation_method: CALCULATION_METHOD,
            },
        })
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
