//! Popularity, trend and category statistics for activity snapshots.
//!
//! The crate provides three per-snapshot measures and one aggregate:
//! - **Popularity** maps an activity's registration fill ratio through the
//!   shared sigmoid curve into `0.0..=1.0`.
//! - **Trend** compares the mean popularity of a category's most recent
//!   activities with that of its earlier ones. Positive values mean the
//!   category is gaining engagement.
//! - **Category distribution** reports each category's share of the
//!   snapshot.
//! - [`ActivityAnalyzer::analyze_activities`] combines these with corpus
//!   keywords into an [`AnalysisResult`](campus_core::AnalysisResult).
//!
//! Activities without capacity cannot be scored. Aggregates skip them, log a
//! warning and report them through [`Screened`](campus_core::Screened).
//!
//! # Examples
//!
//! ```
//! use std::time::SystemTime;
//! use campus_core::Activity;
//! use campus_scorer::{calculate_category_distribution, calculate_popularity};
//!
//! let activity = Activity::new(1, 4, 100, 50, SystemTime::UNIX_EPOCH);
//! assert_eq!(calculate_popularity(&activity), Ok(0.5));
//!
//! let distribution = calculate_category_distribution(&[activity]);
//! assert_eq!(distribution.get("4"), Some(&1.0));
//! ```

#![forbid(unsafe_code)]

mod analyzer;
mod distribution;
mod trend;

use campus_core::{Activity, ActivityError};

pub use analyzer::ActivityAnalyzer;
pub use campus_core::{AnalysisResult, Screened};
pub use distribution::calculate_category_distribution;
pub use trend::{TREND_RANGE, analyze_trend};

/// Sigmoid popularity of a single activity.
///
/// # Errors
/// Returns [`ActivityError::NonPositiveCapacity`] when the activity declares
/// no capacity.
pub fn calculate_popularity(activity: &Activity) -> Result<f64, ActivityError> {
    activity.popularity()
}

/// Mean popularity of pre-validated activities, or `0.0` when none remain.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging popularity divides a float sum by a count"
)]
pub(crate) fn mean_popularity<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> f64 {
    let (sum, count) = activities
        .into_iter()
        .filter_map(|activity| activity.popularity().ok())
        .fold((0.0_f64, 0_usize), |(sum, count), score| {
            (sum + score, count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests;
