//! The engine's single failure kind.
//!
//! Every failure inside `ChartCalculator::calculate` (a rejected input, an
//! unresolvable local time, a provider error, or cyclic arithmetic that
//! cannot produce a well-formed index) surfaces as one `CalculationError`.
//! No partial chart is ever returned and no fallback pillar is synthesized;
//! callers that want retries implement them around the whole call.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use thiserror::Error;

/// Failure of a whole chart calculation.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// The civil date does not exist in the Gregorian calendar.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hour or minute outside its valid range.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// The local time is ambiguous or nonexistent in the given timezone
    /// (DST fold or gap). Never silently resolved.
    #[error("cannot resolve local time {local} in timezone {timezone}")]
    UnresolvableLocalTime { local: NaiveDateTime, timezone: Tz },

    /// The solar-position provider failed.
    #[error("solar position query failed: {0}")]
    Ephemeris(anyhow::Error),

    /// The provider returned a longitude that is not a finite angle.
    #[error("solar longitude {0} is not a finite angle")]
    NonFiniteLongitude(f64),

    /// A stem/branch pair broke the sexagenary parity rule. Indices reduced
    /// from a single cycle number can never trigger this; it guards against
    /// malformed arithmetic rather than bad input.
    #[error("stem index {stem} and branch index {branch} break sexagenary parity")]
    ParityViolation { stem: u8, branch: u8 },
}
