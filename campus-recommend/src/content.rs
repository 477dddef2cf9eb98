//! Content-based recommendations from declared category weights.

use campus_core::{
    Activity, ActivityError, CategoryWeights, Clock, RecommendationResult, Screened, Signal,
    UserId, UserPreference, rank_by_score,
};
use log::{debug, warn};

use crate::RecommendationEngine;

impl<C: Clock> RecommendationEngine<C> {
    /// Activities in categories the user declared a weight for.
    ///
    /// Each such activity scores
    /// `weight × (content_base + (1 − content_base) × (1 − current / max))`,
    /// so emptier activities rank higher within a category. Activities in
    /// other categories are never returned.
    #[must_use]
    pub fn content_based_recommendation(
        &self,
        user_id: UserId,
        activities: &[Activity],
        preferences: &[UserPreference],
    ) -> Screened<Vec<RecommendationResult>> {
        let weights = CategoryWeights::for_user(user_id, preferences);
        if weights.is_empty() {
            debug!("No category preferences declared by user {user_id}");
            return Screened::default();
        }
        let mut results = Vec::new();
        let mut skipped = Vec::new();
        for activity in activities {
            let Some(weight) = weights.weight(activity.category_id) else {
                continue;
            };
            match self.content_score(activity, weight) {
                Ok(result) => results.push(result),
                Err(err) => {
                    warn!("Skipped activity {}: {err}", activity.id);
                    skipped.push(err);
                }
            }
        }
        rank_by_score(&mut results);
        Screened::new(results, skipped)
    }

    fn content_score(
        &self,
        activity: &Activity,
        weight: f64,
    ) -> Result<RecommendationResult, ActivityError> {
        let score = self.weights.content(weight, activity.fill_ratio()?);
        Ok(RecommendationResult::from_signals(
            activity.id,
            score,
            &[Signal::Content],
        ))
    }
}
