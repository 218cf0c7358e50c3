//! Property tests for the cyclic arithmetic.

use std::sync::Arc;

use proptest::prelude::*;
use sajur::chart::calculators::{
    day_pillar, hour_branch, hour_pillar, hour_windows, month_pillar, year_pillar,
};
use sajur::chart::cycle::{ALL_STEMS, Branch};
use sajur::chart::solar_terms::resolve;
use sajur::chart::{ChartCalculator, ChartRequest};
use sajur::ephemeris::FixedLongitude;

/// Generate years safely inside chrono's representable range
fn year_strategy() -> impl Strategy<Value = i32> {
    1600..2400i32
}

/// Generate any finite longitude, including far outside [0, 360)
fn longitude_strategy() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

proptest! {
    /// Every pillar any calculator produces satisfies the sexagenary
    /// parity rule — stem and branch indices agree mod 2.
    #[test]
    fn parity_holds_for_all_calculators(
        year in year_strategy(),
        month in 1..=12u32,
        branch_value in 0..12i64,
        stem_index in 0..10usize,
        hour in 0..24u32,
        minute in 0..60u32,
        day_offset in -200_000..200_000i64,
        use_solar_time in prop::bool::ANY,
    ) {
        let month_branch = Branch::from_cycle(branch_value);
        let day_stem = ALL_STEMS[stem_index];

        let yp = year_pillar(year, month, month_branch).unwrap();
        let mp = month_pillar(yp.stem(), month_branch).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
            + chrono::Duration::days(day_offset);
        let dp = day_pillar(date).unwrap();
        let hp = hour_pillar(hour, minute, day_stem, use_solar_time).unwrap();

        for pillar in [yp, mp, dp, hp] {
            prop_assert_eq!(pillar.stem().index() % 2, pillar.branch().index() % 2);
        }
    }

    /// Stepping the longitude across any 15° boundary never skips a month:
    /// the branch either stays or advances by exactly one position.
    #[test]
    fn month_branch_never_skips_across_boundaries(
        longitude in longitude_strategy(),
        step in 0.0..14.9f64,
    ) {
        let earlier = resolve(longitude).unwrap().month_branch;
        let later = resolve(longitude + step).unwrap().month_branch;

        let advance = (i64::from(later.index()) - i64::from(earlier.index())).rem_euclid(12);
        prop_assert!(advance <= 1, "advance was {} over a {}° step", advance, step);
    }

    /// A longitude pair straddling one 30° month boundary differs by
    /// exactly one branch position.
    #[test]
    fn straddling_a_month_boundary_advances_exactly_one(
        term in 0..12i64,
        epsilon in 0.001..1.0f64,
    ) {
        let boundary = (315.0 + 30.0 * term as f64).rem_euclid(360.0);
        let before = resolve(boundary - epsilon).unwrap().month_branch;
        let after = resolve(boundary + epsilon).unwrap().month_branch;

        let advance = (i64::from(after.index()) - i64::from(before.index())).rem_euclid(12);
        prop_assert_eq!(advance, 1);
    }

    /// The twelve 2-hour windows tile the civil day exactly: every minute
    /// belongs to one window, and `hour_branch` agrees with the table.
    #[test]
    fn hour_windows_tile_without_gap_or_overlap(
        hour in 0..24u32,
        minute in 0..60u32,
    ) {
        let windows = hour_windows();
        let minute_of_day = i64::from(hour) * 60 + i64::from(minute);

        let containing: Vec<_> = windows
            .iter()
            .filter(|w| {
                let start = i64::from(w.branch.window_start_hour()) * 60;
                (minute_of_day - start).rem_euclid(24 * 60) < 120
            })
            .collect();

        prop_assert_eq!(containing.len(), 1);
        prop_assert_eq!(containing[0].branch, hour_branch(hour, minute, false));
    }

    /// The hour stem is fully determined by the day stem's five-group and
    /// the hour branch, and repeats with the day stem every five stems.
    #[test]
    fn hour_stem_repeats_in_five_groups(
        stem_index in 0..5usize,
        hour in 0..24u32,
    ) {
        let early_stem = ALL_STEMS[stem_index];
        let late_stem = ALL_STEMS[stem_index + 5];
        let a = hour_pillar(hour, 0, early_stem, false).unwrap();
        let b = hour_pillar(hour, 0, late_stem, false).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Day pillars advance by exactly one cycle position per calendar day,
    /// in both directions from the anchor.
    #[test]
    fn consecutive_days_step_one_cycle_position(day_offset in -200_000..200_000i64) {
        let anchor = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let today = day_pillar(anchor + chrono::Duration::days(day_offset)).unwrap();
        let tomorrow = day_pillar(anchor + chrono::Duration::days(day_offset + 1)).unwrap();

        let stem_step = (i64::from(tomorrow.stem().index())
            - i64::from(today.stem().index()))
        .rem_euclid(10);
        let branch_step = (i64::from(tomorrow.branch().index())
            - i64::from(today.branch().index()))
        .rem_euclid(12);
        prop_assert_eq!(stem_step, 1);
        prop_assert_eq!(branch_step, 1);
    }

    /// Idempotence of the whole engine: identical requests produce
    /// identical charts, bit for bit through serialization.
    #[test]
    fn engine_is_referentially_transparent(
        longitude in 0.0..360.0f64,
        year in year_strategy(),
        month in 1..=12u32,
        day in 1..=28u32,
        hour in prop::option::of(0..24u32),
        minute in 0..60u32,
    ) {
        let calculator = ChartCalculator::new(Arc::new(FixedLongitude(longitude)));
        let mut request = ChartRequest::new(year, month, day);
        if let Some(hour) = hour {
            request = request.at(hour, minute);
        }

        let first = calculator.calculate(&request).unwrap();
        let second = calculator.calculate(&request).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first.hour_pillar.is_some(), hour.is_some());
    }
}
