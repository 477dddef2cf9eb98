//! Snapshot-wide analysis combining every measure.

use std::collections::BTreeMap;

use campus_core::{Activity, ActivityError, AnalysisResult, CategoryId, Screened, screen_activities};
use campus_text::TextAnalyzer;
use log::debug;

use crate::{analyze_trend, calculate_category_distribution, mean_popularity, trend::trend_of};

/// Descriptive analytics over activity snapshots.
///
/// The analyzer owns only its text configuration; every method is a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityAnalyzer {
    text: TextAnalyzer,
}

impl ActivityAnalyzer {
    /// Build an analyzer using `text` for keyword extraction.
    #[must_use]
    pub const fn new(text: TextAnalyzer) -> Self {
        Self { text }
    }

    /// Text analyzer used for keywords.
    #[must_use]
    pub const fn text(&self) -> &TextAnalyzer {
        &self.text
    }

    /// Popularity, trend, keywords and category mix of a snapshot.
    ///
    /// Popularity is the mean over valid activities and the trend spans the
    /// whole snapshot irrespective of category. Keywords are ranked by
    /// corpus TF-IDF over each activity's title and description.
    #[must_use]
    pub fn analyze_activities(&self, activities: &[Activity]) -> Screened<AnalysisResult> {
        let Screened {
            value: valid,
            skipped,
        } = screen_activities(activities);
        let documents: Vec<String> = activities.iter().map(Activity::text).collect();
        let result = AnalysisResult {
            popularity_score: mean_popularity(valid.iter().copied()),
            trend_score: trend_of(&valid),
            keywords: self
                .text
                .corpus_keywords(&documents, self.text.config().max_keywords),
            category_distribution: calculate_category_distribution(activities),
        };
        debug!(
            "Analysed {} activities ({} skipped): popularity={:.3}, trend={:.3}",
            activities.len(),
            skipped.len(),
            result.popularity_score,
            result.trend_score
        );
        Screened::new(result, skipped)
    }

    /// Sigmoid popularity of a single activity.
    ///
    /// # Errors
    /// Returns [`ActivityError::NonPositiveCapacity`] for activities without
    /// capacity.
    pub fn calculate_popularity(&self, activity: &Activity) -> Result<f64, ActivityError> {
        activity.popularity()
    }

    /// Up to `max_keywords` keywords for `text`.
    #[must_use]
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        self.text.extract_keywords(text, max_keywords)
    }

    /// Trend of one category; see [`analyze_trend`].
    #[must_use]
    pub fn analyze_trend(&self, activities: &[Activity], category_id: CategoryId) -> Screened<f64> {
        analyze_trend(activities, category_id)
    }

    /// Category mix; see [`calculate_category_distribution`].
    #[must_use]
    pub fn calculate_category_distribution(&self, activities: &[Activity]) -> BTreeMap<String, f64> {
        calculate_category_distribution(activities)
    }
}
