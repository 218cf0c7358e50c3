//! Centralized constants for the calculation engine and CLI defaults.
//!
//! The calibration values here are load-bearing: the anchor pair fixes the
//! entire day-pillar sequence, and the solar-time offset is the exact value
//! downstream regression data was produced with. Neither may drift.

/// Number of heavenly stems in the cycle.
pub const STEM_COUNT: i64 = 10;

/// Number of earthly branches in the cycle.
pub const BRANCH_COUNT: i64 = 12;

/// Length of the full sexagenary cycle (lcm of stems and branches).
pub const SEXAGENARY_CYCLE: i64 = 60;

/// Anchor calibration: 2000-01-01 is day-pillar cycle index 54 (무오).
/// Every other day pillar is derived by whole-day offset from this pair.
pub const ANCHOR_YEAR: i32 = 2000;
pub const ANCHOR_MONTH: u32 = 1;
pub const ANCHOR_DAY: u32 = 1;
pub const ANCHOR_CYCLE_INDEX: i64 = 54;

/// Offset subtracted from a civil year before cyclic reduction.
/// Year 4 CE is stem 0 / branch 0 (갑자) by convention.
pub const YEAR_CYCLE_OFFSET: i32 = 4;

/// Ecliptic longitude (degrees) at which the solar year begins (입춘).
pub const SPRING_START_LONGITUDE: f64 = 315.0;

/// Angular width of one solar-term month (degrees).
pub const TERM_MONTH_WIDTH_DEG: f64 = 30.0;

/// Spacing of the 24 solar-term boundaries (degrees).
pub const TERM_BOUNDARY_SPACING_DEG: f64 = 15.0;

/// Proximity window around a term boundary that sets the boundary flag.
/// 1.5 degrees of solar motion is roughly 36 hours of civil time.
pub const BOUNDARY_WINDOW_DEG: f64 = 1.5;

/// Fixed solar-time correction applied to the birth clock time before
/// bucketing into an hour branch. A flat approximation of the mean offset
/// between clock time and solar time on the Korean peninsula; regression
/// data depends on this exact value.
pub const SOLAR_TIME_OFFSET_MINUTES: i64 = 30;

/// Minutes in a civil day, for wrapping the solar-time correction.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Reference hour used for the solar-longitude query when no birth hour is
/// given. Only the month/year boundary depends on the sample, never the
/// hour pillar, so noon is a neutral choice.
pub const NOON_REFERENCE_HOUR: u32 = 12;

/// Age at which the luck cycle (대운) conventionally starts.
pub const LUCK_CYCLE_START_AGE: u8 = 3;

/// Tag identifying how charts were computed, echoed in output metadata.
pub const CALCULATION_METHOD: &str = "astronomical_solar_longitude";

/// Default timezone for interpreting civil birth times.
pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

/// Exit code used when the CLI terminates on an error.
pub const EXIT_FAILURE: i32 = 1;
