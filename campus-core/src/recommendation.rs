//! Recommendation results and their ranking order.

use std::fmt;

use crate::ActivityId;

/// Separator placed between signal labels in a reason string.
const REASON_SEPARATOR: &str = "; ";

/// Evidence that contributed to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The user declared a weight for the activity's category.
    Preference,
    /// Registration fill ratio through the popularity curve.
    Popularity,
    /// Start-time proximity.
    Timing,
    /// Overlap with similar users' interaction histories.
    Collaborative,
    /// Category preference scaled by remaining capacity.
    Content,
}

impl Signal {
    /// Human-readable label used in reason strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preference => "matches user preference",
            Self::Popularity => "activity popularity",
            Self::Timing => "start time proximity",
            Self::Collaborative => "collaborative filtering recommendation",
            Self::Content => "content-based recommendation",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored activity together with a trace of why it was suggested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendationResult {
    /// Recommended activity.
    pub activity_id: ActivityId,
    /// Strategy-specific score; higher is better.
    pub score: f64,
    /// Labels of the contributing signals, separated by `"; "`.
    pub reason: String,
}

impl RecommendationResult {
    /// Build a result with a free-form reason.
    #[must_use]
    pub fn new(activity_id: ActivityId, score: f64, reason: impl Into<String>) -> Self {
        Self {
            activity_id,
            score,
            reason: reason.into(),
        }
    }

    /// Build a result whose reason lists `signals` in order.
    ///
    /// # Examples
    /// ```
    /// use campus_core::{RecommendationResult, Signal};
    ///
    /// let result =
    ///     RecommendationResult::from_signals(3, 0.5, &[Signal::Popularity, Signal::Timing]);
    /// assert_eq!(result.reason, "activity popularity; start time proximity");
    /// ```
    #[must_use]
    pub fn from_signals(activity_id: ActivityId, score: f64, signals: &[Signal]) -> Self {
        let reason = signals
            .iter()
            .map(|signal| signal.label())
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR);
        Self::new(activity_id, score, reason)
    }

    /// Report whether the reason mentions `signal`.
    #[must_use]
    pub fn cites(&self, signal: Signal) -> bool {
        self.reason
            .split(REASON_SEPARATOR)
            .any(|label| label == signal.label())
    }
}

/// Order results by descending score, breaking ties by ascending activity id.
///
/// The sort is stable and uses [`f64::total_cmp`], so the output is identical
/// across runs and platforms for the same input.
pub fn rank_by_score(results: &mut [RecommendationResult]) {
    results.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.activity_id.cmp(&right.activity_id))
    });
}
