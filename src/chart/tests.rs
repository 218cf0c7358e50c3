// Engine tests with stubbed and mocked ephemerides
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use super::*;
use crate::ephemeris::{FixedLongitude, MockSolarEphemeris};

fn calculator_at(longitude: f64) -> ChartCalculator {
    ChartCalculator::new(Arc::new(FixedLongitude(longitude)))
}

/// The engine queries the provider exactly once per calculation, with the
/// civil time converted to UTC.
#[test]
fn provider_is_queried_once_in_utc() {
    let mut mock = MockSolarEphemeris::new();
    let expected = Utc.with_ymd_and_hms(1978, 5, 16, 2, 0, 0).unwrap();
    mock.expect_solar_longitude()
        .withf(move |instant| *instant == expected)
        .times(1)
        .returning(|_| Ok(55.0));

    let calculator = ChartCalculator::new(Arc::new(mock));
    let request = ChartRequest::new(1978, 5, 16).at(11, 0);
    calculator.calculate(&request).unwrap();
}

/// When the birth hour is unknown the provider is queried at noon, a
/// neutral reference since only the month/year boundary uses the sample.
#[test]
fn missing_hour_queries_at_noon() {
    let mut mock = MockSolarEphemeris::new();
    let expected = Utc.with_ymd_and_hms(2000, 1, 1, 3, 0, 0).unwrap();
    mock.expect_solar_longitude()
        .withf(move |instant| *instant == expected)
        .times(1)
        .returning(|_| Ok(280.0));

    let calculator = ChartCalculator::new(Arc::new(mock));
    let chart = calculator
        .calculate(&ChartRequest::new(2000, 1, 1))
        .unwrap();
    assert!(chart.hour_pillar.is_none());
}

#[test]
fn provider_failure_aborts_the_whole_calculation() {
    let mut mock = MockSolarEphemeris::new();
    mock.expect_solar_longitude()
        .returning(|_| Err(anyhow::anyhow!("kernel unavailable")));

    let calculator = ChartCalculator::new(Arc::new(mock));
    let result = calculator.calculate(&ChartRequest::new(2000, 1, 1));
    assert!(matches!(result, Err(CalculationError::Ephemeris(_))));
}

#[test]
fn invalid_dates_are_rejected() {
    let calculator = calculator_at(100.0);
    for (y, m, d) in [(2001, 2, 29), (2024, 13, 1), (2024, 0, 10), (2024, 4, 31)] {
        let result = calculator.calculate(&ChartRequest::new(y, m, d));
        assert!(
            matches!(result, Err(CalculationError::InvalidDate { .. })),
            "{y}-{m}-{d}"
        );
    }
}

#[test]
fn invalid_times_are_rejected() {
    let calculator = calculator_at(100.0);
    let result = calculator.calculate(&ChartRequest::new(2024, 4, 1).at(24, 0));
    assert!(matches!(result, Err(CalculationError::InvalidTime { .. })));
    let result = calculator.calculate(&ChartRequest::new(2024, 4, 1).at(12, 60));
    assert!(matches!(result, Err(CalculationError::InvalidTime { .. })));
}

#[test]
fn non_finite_longitude_is_a_calculation_failure() {
    let calculator = calculator_at(f64::NAN);
    let result = calculator.calculate(&ChartRequest::new(2024, 4, 1));
    assert!(matches!(
        result,
        Err(CalculationError::NonFiniteLongitude(_))
    ));
}

#[test]
fn hour_pillar_present_iff_hour_given() {
    let calculator = calculator_at(100.0);
    let without = calculator
        .calculate(&ChartRequest::new(2024, 6, 1))
        .unwrap();
    assert!(without.hour_pillar.is_none());

    let with = calculator
        .calculate(&ChartRequest::new(2024, 6, 1).at(15, 30))
        .unwrap();
    assert!(with.hour_pillar.is_some());
}

/// February before the spring start belongs to the previous sexagenary
/// year; after it, to the current one. A fixed longitude on each side of
/// 315° isolates the rule from ephemeris behavior.
#[test]
fn year_rolls_over_at_spring_start() {
    let before = calculator_at(314.0)
        .calculate(&ChartRequest::new(2025, 2, 3))
        .unwrap();
    let after = calculator_at(316.0)
        .calculate(&ChartRequest::new(2025, 2, 5))
        .unwrap();

    assert_eq!(before.year_pillar.ganji(), "갑진");
    assert_eq!(after.year_pillar.ganji(), "을사");

    // Exactly one step in each cycle across the boundary
    let stem_step = (i64::from(after.year_pillar.stem().index())
        - i64::from(before.year_pillar.stem().index()))
    .rem_euclid(10);
    let branch_step = (i64::from(after.year_pillar.branch().index())
        - i64::from(before.year_pillar.branch().index()))
    .rem_euclid(12);
    assert_eq!(stem_step, 1);
    assert_eq!(branch_step, 1);

    // Both sides sit inside the boundary window, with the spring start
    // distinguished from ordinary term changes
    assert!(before.meta.is_boundary);
    assert_eq!(
        before.meta.boundary_reason,
        Some(BoundaryReason::NearSpringStart)
    );
}

#[test]
fn day_master_is_the_day_pillar_stem() {
    let chart = calculator_at(100.0)
        .calculate(&ChartRequest::new(2000, 1, 1))
        .unwrap();
    assert_eq!(chart.day_master.stem, chart.day_pillar.stem());
    assert_eq!(chart.day_master.element, chart.day_pillar.stem().element());
    assert!(!chart.day_master.description.is_empty());
}

#[test]
fn luck_cycle_present_iff_gender_given() {
    let calculator = calculator_at(100.0);
    let without = calculator
        .calculate(&ChartRequest::new(1978, 5, 16))
        .unwrap();
    assert!(without.luck.is_none());

    // 1978 is a yang (무) year: forward for men
    let with = calculator
        .calculate(&ChartRequest::new(1978, 5, 16).with_gender(Gender::Male))
        .unwrap();
    let luck = with.luck.unwrap();
    assert_eq!(luck.direction, LuckDirection::Forward);
    assert_eq!(luck.start_age, 3);
}

#[test]
fn metadata_echoes_request_flags() {
    let chart = calculator_at(123.456)
        .calculate(&ChartRequest::new(2024, 7, 1).at(8, 0).without_solar_time())
        .unwrap();
    assert!(!chart.meta.solar_time_applied);
    assert_eq!(chart.meta.timezone, "Asia/Seoul");
    assert_eq!(chart.meta.solar_longitude_deg, 123.46);
    assert_eq!(chart.meta.calculation_method, "astronomical_solar_longitude");
}

#[test]
fn identical_requests_produce_identical_charts() {
    let calculator = calculator_at(200.0);
    let request = ChartRequest::new(1999, 9, 9).at(9, 9).with_gender(Gender::Female);
    let first = calculator.calculate(&request).unwrap();
    let second = calculator.calculate(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Parity holds for every pillar of charts across a broad date sweep.
#[test]
fn all_pillars_keep_sexagenary_parity() {
    let calculator = calculator_at(77.0);
    for year in [1900, 1950, 1978, 2000, 2024, 2100] {
        for (month, day, hour) in [(1, 1, 0), (2, 4, 5), (6, 30, 12), (12, 31, 23)] {
            let chart = calculator
                .calculate(&ChartRequest::new(year, month, day).at(hour, 0))
                .unwrap();
            let mut pillars = vec![chart.year_pillar, chart.month_pillar, chart.day_pillar];
            pillars.extend(chart.hour_pillar);
            for pillar in pillars {
                assert_eq!(
                    pillar.stem().index() % 2,
                    pillar.branch().index() % 2,
                    "{year}-{month:02}-{day:02} {hour:02}h {pillar}"
                );
            }
        }
    }
}

#[test]
fn json_omits_absent_hour_pillar_and_luck() {
    let chart = calculator_at(100.0)
        .calculate(&ChartRequest::new(2024, 6, 1))
        .unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert!(json.get("hour_pillar").is_none());
    assert!(json.get("luck").is_none());
    assert_eq!(json["day_master"]["stem"], json["day_pillar"]["gan"]);
}
