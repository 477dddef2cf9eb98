//! Property-based tests for snapshot statistics.
//!
//! # Invariants tested
//!
//! - **Bounded popularity:** every valid activity scores within `0.0..=1.0`.
//! - **Monotonic popularity:** more registrations never lower the score.
//! - **Strict curve:** each step of 0.001 in fill ratio raises popularity.
//! - **Normalised distribution:** category shares sum to one.
//! - **Bounded trend:** every trend lies within [`TREND_RANGE`].

use campus_core::{Activity, popularity_from_ratio};
use campus_core::test_support::activity_in_days;
use campus_scorer::{
    TREND_RANGE, analyze_trend, calculate_category_distribution, calculate_popularity,
};
use proptest::prelude::*;

/// Snapshot of up to 30 activities across four categories.
fn snapshot_strategy() -> impl Strategy<Value = Vec<Activity>> {
    prop::collection::vec((0_u32..4, 0_u32..200, 0_u32..250, -60_i64..60), 0..30).prop_map(
        |rows| {
            rows.into_iter()
                .zip(1_u64..)
                .map(|((category, max, current, days), id)| {
                    activity_in_days(id, category, max, current, days)
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn popularity_is_bounded(max in 1_u32..1_000, current in 0_u32..2_000) {
        let score = calculate_popularity(&activity_in_days(1, 1, max, current, 1))
            .unwrap_or(f64::NAN);
        prop_assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }

    #[test]
    fn popularity_grows_with_registrations(max in 1_u32..1_000, current in 0_u32..1_000) {
        prop_assume!(current < max);
        let lower = calculate_popularity(&activity_in_days(1, 1, max, current, 1));
        let higher = calculate_popularity(&activity_in_days(1, 1, max, current + 1, 1));
        match (lower, higher) {
            (Ok(lower), Ok(higher)) => prop_assert!(higher >= lower),
            other => prop_assert!(false, "valid activities failed to score: {other:?}"),
        }
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "ratios are built from integer steps")]
    fn popularity_curve_is_strictly_increasing(step in 0_u32..1_000) {
        let lower = popularity_from_ratio(f64::from(step) / 1_000.0);
        let higher = popularity_from_ratio(f64::from(step + 1) / 1_000.0);
        prop_assert!(higher > lower, "{higher} is not above {lower} at step {step}");
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "shares are summed for comparison")]
    fn distribution_sums_to_one(activities in snapshot_strategy()) {
        let distribution = calculate_category_distribution(&activities);
        if activities.is_empty() {
            prop_assert!(distribution.is_empty());
        } else {
            let total: f64 = distribution.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "shares sum to {total}");
        }
    }

    #[test]
    fn trend_is_bounded(activities in snapshot_strategy(), category in 0_u32..4) {
        let trend = analyze_trend(&activities, category);
        prop_assert!(TREND_RANGE.contains(&trend.value));
        prop_assert!(trend.skipped.iter().all(|error| activities
            .iter()
            .any(|activity| activity.id == error.activity_id()
                && activity.category_id == category)));
    }
}
