//! Recent-versus-historical popularity trend.

use std::ops::RangeInclusive;

use campus_core::{Activity, CategoryId, Screened, screen_activities};

use crate::mean_popularity;

/// Bounds of every trend score.
pub const TREND_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Trend of `category_id` across a snapshot.
///
/// The category's valid activities are ordered by start time, ties by id.
/// The later half (including the middle activity of an odd count) is
/// compared with the earlier half:
///
/// `trend = mean_popularity(recent) - mean_popularity(historical)`
///
/// clamped to [`TREND_RANGE`]. Fewer than two valid activities give `0.0`.
/// Invalid activities of the category are skipped and reported; activities
/// of other categories are ignored entirely.
///
/// # Examples
/// ```
/// use std::time::{Duration, SystemTime};
/// use campus_core::Activity;
/// use campus_scorer::analyze_trend;
///
/// let earlier = SystemTime::UNIX_EPOCH;
/// let later = earlier + Duration::from_secs(86_400);
/// let activities = [
///     Activity::new(1, 2, 10, 1, earlier),
///     Activity::new(2, 2, 10, 9, later),
/// ];
/// assert!(analyze_trend(&activities, 2).value > 0.0);
/// ```
#[must_use]
pub fn analyze_trend(activities: &[Activity], category_id: CategoryId) -> Screened<f64> {
    let in_category: Vec<Activity> = activities
        .iter()
        .filter(|activity| activity.category_id == category_id)
        .cloned()
        .collect();
    let screened = screen_activities(&in_category);
    let trend = trend_of(&screened.value);
    Screened::new(trend, screened.skipped)
}

/// Trend over pre-validated activities regardless of category.
#[expect(
    clippy::float_arithmetic,
    clippy::integer_division,
    reason = "the odd middle element joins the recent half; the delta is a float difference"
)]
pub(crate) fn trend_of(activities: &[&Activity]) -> f64 {
    if activities.len() < 2 {
        return 0.0;
    }
    let mut ordered = activities.to_vec();
    ordered.sort_by(|left, right| {
        left.start_time
            .cmp(&right.start_time)
            .then_with(|| left.id.cmp(&right.id))
    });
    let Some((historical, recent)) = ordered.split_at_checked(ordered.len() / 2) else {
        return 0.0;
    };
    let delta =
        mean_popularity(recent.iter().copied()) - mean_popularity(historical.iter().copied());
    delta.clamp(*TREND_RANGE.start(), *TREND_RANGE.end())
}
