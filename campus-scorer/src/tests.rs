//! Unit coverage for popularity, trend and distribution helpers.
#![forbid(unsafe_code)]

use campus_core::ActivityError;
use campus_core::test_support::activity_in_days;
use rstest::rstest;

use crate::{
    ActivityAnalyzer, analyze_trend, calculate_category_distribution, calculate_popularity,
    mean_popularity,
};

#[rstest]
fn half_full_activity_scores_one_half() {
    let activity = activity_in_days(1, 1, 100, 50, 3);
    assert_eq!(calculate_popularity(&activity), Ok(0.5));
}

#[rstest]
fn zero_capacity_is_a_validation_error() {
    let activity = activity_in_days(9, 1, 0, 0, 3);
    assert_eq!(
        calculate_popularity(&activity),
        Err(ActivityError::NonPositiveCapacity { activity_id: 9 })
    );
}

#[rstest]
fn mean_popularity_of_nothing_is_zero() {
    assert_eq!(mean_popularity(std::iter::empty()), 0.0);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test sums proportions for comparison"
)]
fn distribution_sums_to_one() {
    let activities = vec![
        activity_in_days(1, 1, 10, 1, 1),
        activity_in_days(2, 2, 10, 1, 1),
        activity_in_days(3, 2, 10, 1, 1),
        activity_in_days(4, 7, 0, 0, 1),
    ];
    let distribution = calculate_category_distribution(&activities);
    let total: f64 = distribution.values().sum();
    assert!((total - 1.0).abs() < 1e-9, "proportions sum to {total}");
    assert_eq!(distribution.get("2"), Some(&0.5));
    assert_eq!(distribution.get("7"), Some(&0.25));
}

#[rstest]
fn distribution_of_empty_snapshot_is_empty() {
    assert!(calculate_category_distribution(&[]).is_empty());
}

#[rstest]
fn filling_category_trends_upward() {
    let activities = vec![
        activity_in_days(1, 3, 20, 2, -20),
        activity_in_days(2, 3, 20, 4, -10),
        activity_in_days(3, 3, 20, 16, 5),
        activity_in_days(4, 3, 20, 19, 12),
    ];
    let trend = analyze_trend(&activities, 3);
    assert!(trend.value > 0.5, "expected strong upward trend, got {}", trend.value);
    assert!(trend.is_clean());
}

#[rstest]
fn emptying_category_trends_downward() {
    let activities = vec![
        activity_in_days(1, 3, 20, 19, -20),
        activity_in_days(2, 3, 20, 2, 5),
    ];
    assert!(analyze_trend(&activities, 3).value < 0.0);
}

#[rstest]
#[case::no_activities(Vec::new())]
#[case::single_activity(vec![activity_in_days(1, 3, 20, 10, 1)])]
#[case::other_category_only(vec![
    activity_in_days(1, 8, 20, 1, 1),
    activity_in_days(2, 8, 20, 19, 2),
])]
fn sparse_categories_have_flat_trend(#[case] activities: Vec<campus_core::Activity>) {
    assert_eq!(analyze_trend(&activities, 3).value, 0.0);
}

#[rstest]
fn trend_reports_invalid_activities_of_the_category_only() {
    let activities = vec![
        activity_in_days(1, 3, 0, 0, 1),
        activity_in_days(2, 4, 0, 0, 1),
        activity_in_days(3, 3, 10, 5, 2),
    ];
    let trend = analyze_trend(&activities, 3);
    assert_eq!(
        trend.skipped,
        vec![ActivityError::NonPositiveCapacity { activity_id: 1 }]
    );
    assert_eq!(trend.value, 0.0);
}

#[rstest]
fn analysis_of_empty_snapshot_is_neutral() {
    let analysis = ActivityAnalyzer::default().analyze_activities(&[]);
    assert!(analysis.is_clean());
    assert_eq!(analysis.value, campus_core::AnalysisResult::default());
}

#[rstest]
fn analysis_skips_invalid_activities_from_popularity() {
    let activities = vec![
        activity_in_days(1, 1, 100, 50, 2).with_title("Chess night"),
        activity_in_days(2, 1, 0, 0, 2).with_title("Broken record"),
    ];
    let analysis = ActivityAnalyzer::default().analyze_activities(&activities);
    assert_eq!(analysis.value.popularity_score, 0.5);
    assert_eq!(analysis.skipped.len(), 1);
    assert_eq!(analysis.value.category_distribution.get("1"), Some(&1.0));
    assert!(analysis.value.keywords.iter().any(|k| k == "chess"));
}
