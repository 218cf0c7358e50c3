//! The four pillar calculators.
//!
//! Free functions over small integer domains; each derives one pillar from
//! explicit inputs and nothing else. Year and month depend on the resolved
//! solar month, the day pillar is pure calendar arithmetic against the
//! anchor date, and the hour pillar depends only on the clock time and the
//! day stem.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::cycle::{ALL_BRANCHES, Branch, Stem};
use super::pillar::Pillar;
use crate::constants::{
    ANCHOR_CYCLE_INDEX, ANCHOR_DAY, ANCHOR_MONTH, ANCHOR_YEAR, MINUTES_PER_DAY,
    SEXAGENARY_CYCLE, SOLAR_TIME_OFFSET_MINUTES, YEAR_CYCLE_OFFSET,
};
use crate::error::CalculationError;

/// The calibrated anchor date whose day-pillar cycle index is known by
/// definition.
fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, ANCHOR_MONTH, ANCHOR_DAY)
        .expect("anchor date literal is a valid Gregorian date")
}

/// The effective sexagenary year for a civil date.
///
/// The sexagenary year rolls over at the spring start (315°), not on
/// January 1st. A January or February instant whose solar month is still
/// the rat (자) or ox (축) month has not yet crossed into spring and
/// belongs to the previous sexagenary year.
pub fn sexagenary_year(civil_year: i32, civil_month: u32, month_branch: Branch) -> i32 {
    if civil_month <= 2 && month_branch.index() <= 1 {
        civil_year - 1
    } else {
        civil_year
    }
}

/// Year pillar from the civil date and the resolved solar month.
pub fn year_pillar(
    civil_year: i32,
    civil_month: u32,
    month_branch: Branch,
) -> Result<Pillar, CalculationError> {
    let year = i64::from(sexagenary_year(civil_year, civil_month, month_branch))
        - i64::from(YEAR_CYCLE_OFFSET);
    // Both reductions of the same integer; parity agreement is verified by
    // the constructor rather than assumed from the cycle structure
    Pillar::from_cycle_values(year, year)
}

/// Month pillar from the year stem and the month branch.
///
/// The five-tiger governance rule: each of the five year-stem pairs fixes
/// the stem that opens its first (tiger) month, and subsequent months step
/// through the stems in order.
pub fn month_pillar(year_stem: Stem, month_branch: Branch) -> Result<Pillar, CalculationError> {
    let start_stem = i64::from(year_stem.index() % 5) * 2 + 2;
    let gap = (i64::from(month_branch.index()) - 2).rem_euclid(12);
    Pillar::from_cycle_values(start_stem + gap, i64::from(month_branch.index()))
}

/// Day pillar for a civil date.
///
/// Whole-day offset against the anchor, independent of time of day and of
/// every other pillar. Exact for any representable Gregorian date; floored
/// modulo keeps dates before the anchor counting backwards correctly.
pub fn day_pillar(date: NaiveDate) -> Result<Pillar, CalculationError> {
    let offset = date.signed_duration_since(anchor_date()).num_days();
    let cycle_index = (ANCHOR_CYCLE_INDEX + offset).rem_euclid(SEXAGENARY_CYCLE);
    Ok(Pillar::from_sexagenary_index(cycle_index))
}

/// Branch of the 2-hour window containing a clock time, with the optional
/// fixed solar-time correction applied first.
pub fn hour_branch(hour: u32, minute: u32, use_solar_time: bool) -> Branch {
    let mut total_minutes = i64::from(hour) * 60 + i64::from(minute);
    if use_solar_time {
        total_minutes = (total_minutes - SOLAR_TIME_OFFSET_MINUTES).rem_euclid(MINUTES_PER_DAY);
    }
    let effective_hour = total_minutes / 60;
    // Twelve 2-hour windows, the first beginning at 23:00
    Branch::from_cycle((effective_hour + 1) / 2)
}

/// Hour pillar from the clock time and the day stem.
pub fn hour_pillar(
    hour: u32,
    minute: u32,
    day_stem: Stem,
    use_solar_time: bool,
) -> Result<Pillar, CalculationError> {
    let branch = hour_branch(hour, minute, use_solar_time);
    let stem = i64::from(day_stem.index() % 5) * 2 + i64::from(branch.index());
    Pillar::from_cycle_values(stem, i64::from(branch.index()))
}

/// One of the twelve 2-hour windows of the civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    pub branch: Branch,
    /// Inclusive start of the window.
    pub start: NaiveTime,
    /// Inclusive end of the window (59th minute of its second hour).
    pub end: NaiveTime,
}

/// The twelve branch windows in cycle order, starting with 자 at 23:00.
///
/// Exposed for callers that collect a birth hour from a person who only
/// remembers the traditional window name.
pub fn hour_windows() -> [HourWindow; 12] {
    ALL_BRANCHES.map(|branch| {
        let start_hour = branch.window_start_hour();
        let end_hour = (start_hour + 1) % 24;
        HourWindow {
            branch,
            start: NaiveTime::from_hms_opt(start_hour, 0, 0)
                .expect("window start hour is in range"),
            end: NaiveTime::from_hms_opt(end_hour, 59, 0).expect("window end hour is in range"),
        }
    })
}
