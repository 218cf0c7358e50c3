//! Solar-term resolution from ecliptic longitude.
//!
//! The traditional solar year divides the sun's 360° path into twelve
//! 30° months, each opened by a "major" term, with a "minor" term at its
//! midpoint: 24 boundaries spaced 15° apart. The year begins at 315°
//! (입춘, start of spring), which maps to the tiger branch (인), the first
//! month of the solar year. Month boundaries are wherever the sun actually
//! is, never fixed calendar dates.

use serde::Serialize;

use super::cycle::Branch;
use crate::constants::{
    BOUNDARY_WINDOW_DEG, SPRING_START_LONGITUDE, TERM_BOUNDARY_SPACING_DEG, TERM_MONTH_WIDTH_DEG,
};
use crate::error::CalculationError;

/// Term-range names indexed by month branch (0 = 자월).
pub const SOLAR_TERM_NAMES: [&str; 12] = [
    "동지~소한 (자월)",
    "소한~입춘 (축월)",
    "입춘~경칩 (인월)",
    "경칩~청명 (묘월)",
    "청명~입하 (진월)",
    "입하~망종 (사월)",
    "망종~소서 (오월)",
    "소서~입추 (미월)",
    "입추~백로 (신월)",
    "백로~한로 (유월)",
    "한로~입동 (술월)",
    "입동~동지 (해월)",
];

/// Why an instant was flagged as boundary-adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryReason {
    /// Near the 315° boundary, which also governs the year rollover.
    NearSpringStart,
    /// Near one of the other 23 fifteen-degree boundaries.
    NearTermChange,
}

/// Outcome of resolving a longitude sample against the solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermResolution {
    /// Branch of the solar month containing the sample.
    pub month_branch: Branch,
    /// Human-readable name of that month's term range.
    pub term_name: &'static str,
    /// Whether the sample sits within ±1.5° of any term boundary.
    pub is_boundary: bool,
    /// Set iff `is_boundary`.
    pub boundary_reason: Option<BoundaryReason>,
}

/// Resolve an ecliptic longitude to its solar month and boundary proximity.
///
/// Any real longitude is accepted and normalized mod 360; a non-finite
/// value fails fast rather than producing an arbitrary month.
pub fn resolve(longitude_deg: f64) -> Result<TermResolution, CalculationError> {
    if !longitude_deg.is_finite() {
        return Err(CalculationError::NonFiniteLongitude(longitude_deg));
    }

    // Shift so the spring start (315°) becomes 0, then each 30° slice is
    // one term month; term 0 is the tiger month (branch 2)
    let normalized = (longitude_deg + (360.0 - SPRING_START_LONGITUDE)).rem_euclid(360.0);
    let term_index = (normalized / TERM_MONTH_WIDTH_DEG) as i64;
    let month_branch = Branch::from_cycle(term_index + 2);

    let (is_boundary, boundary_reason) = nearest_boundary(longitude_deg);

    Ok(TermResolution {
        month_branch,
        term_name: SOLAR_TERM_NAMES[month_branch.index() as usize],
        is_boundary,
        boundary_reason,
    })
}

/// Check proximity to the 24 fifteen-degree boundaries.
///
/// Boundaries are 15° apart and the window is ±1.5°, so at most one can
/// match; the scan order (0°, 15°, …, 345°) is therefore just a convention.
fn nearest_boundary(longitude_deg: f64) -> (bool, Option<BoundaryReason>) {
    let mut boundary = 0.0;
    while boundary < 360.0 {
        let distance = ((longitude_deg - boundary + 180.0).rem_euclid(360.0) - 180.0).abs();
        if distance <= BOUNDARY_WINDOW_DEG {
            let reason = if boundary == SPRING_START_LONGITUDE {
                BoundaryReason::NearSpringStart
            } else {
                BoundaryReason::NearTermChange
            };
            return (true, Some(reason));
        }
        boundary += TERM_BOUNDARY_SPACING_DEG;
    }
    (false, None)
}
