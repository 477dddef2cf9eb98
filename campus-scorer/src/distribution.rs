//! Category mix of a snapshot.

use std::collections::BTreeMap;

use campus_core::{Activity, CategoryId};

/// Share of activities per category, keyed by the category id in decimal.
///
/// Shares sum to one for any non-empty input; an empty snapshot yields an
/// empty map. Capacity does not matter here, so activities that fail
/// validation still count towards their category.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "proportions divide category counts by the snapshot size"
)]
pub fn calculate_category_distribution(activities: &[Activity]) -> BTreeMap<String, f64> {
    if activities.is_empty() {
        return BTreeMap::new();
    }
    let mut counts: BTreeMap<CategoryId, usize> = BTreeMap::new();
    for activity in activities {
        *counts.entry(activity.category_id).or_default() += 1;
    }
    let total = activities.len() as f64;
    counts
        .into_iter()
        .map(|(category_id, count)| (category_id.to_string(), count as f64 / total))
        .collect()
}
