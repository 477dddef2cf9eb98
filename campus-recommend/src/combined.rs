//! Merged output of every strategy for a single request.

use std::collections::BTreeSet;

use campus_core::{
    ActivityId, Clock, RecommendationRequest, RecommendationResult, Screened, TimeDecay,
};
use log::debug;

use crate::RecommendationEngine;

impl<C: Clock> RecommendationEngine<C> {
    /// Up to `limit` recommendations drawn from all three strategies.
    ///
    /// Activities the snapshot shows as already started are removed from
    /// every strategy first. Collaborative and content-based results then
    /// each contribute their best `limit / 2` entries, followed by the best
    /// `limit` hybrid results. The concatenation keeps the first occurrence
    /// of each activity and is cut to `limit`, so earlier strategies win both
    /// position and reason.
    ///
    /// # Examples
    /// ```
    /// use campus_core::RecommendationRequest;
    /// use campus_recommend::RecommendationEngine;
    ///
    /// let request = RecommendationRequest::new(1, Vec::new());
    /// let combined = RecommendationEngine::default().combined_recommendations(&request, 5);
    /// assert!(combined.value.is_empty());
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "each secondary strategy receives the floor of half the limit"
    )]
    pub fn combined_recommendations(
        &self,
        request: &RecommendationRequest,
        limit: usize,
    ) -> Screened<Vec<RecommendationResult>> {
        let share = limit / 2;
        let collaborative = self.collaborative_filtering(
            request.user_id,
            &request.activities,
            &request.interactions,
        );
        let content = self.content_based_recommendation(
            request.user_id,
            &request.activities,
            &request.preferences,
        );
        let hybrid = self.calculate_recommendations(
            request.user_id,
            &request.activities,
            &request.preferences,
            &request.registered,
        );

        let started = self.started_activities(request);
        let mut seen = BTreeSet::new();
        let mut skipped = Vec::new();
        let mut results = Vec::with_capacity(limit);
        for (batch, take) in [(collaborative, share), (content, share), (hybrid, limit)] {
            for error in batch.skipped {
                if !skipped.contains(&error) {
                    skipped.push(error);
                }
            }
            results.extend(
                batch
                    .value
                    .into_iter()
                    .filter(|result| !started.contains(&result.activity_id))
                    .take(take)
                    .filter(|result| seen.insert(result.activity_id)),
            );
        }
        results.truncate(limit);
        debug!(
            "Combined strategies produced {} recommendations for user {}",
            results.len(),
            request.user_id
        );
        Screened::new(results, skipped)
    }

    fn started_activities(&self, request: &RecommendationRequest) -> BTreeSet<ActivityId> {
        let now = self.clock.now();
        request
            .activities
            .iter()
            .filter(|activity| TimeDecay::has_started(activity.start_time, now))
            .map(|activity| activity.id)
            .collect()
    }
}
