//! User-to-user collaborative filtering over interaction sets.

use std::collections::{BTreeMap, BTreeSet};

use campus_core::{
    Activity, ActivityId, Clock, InteractionMatrix, RecommendationResult, Screened, Signal, UserId,
    rank_by_score,
};
use log::{debug, warn};

use crate::RecommendationEngine;

/// Cosine similarity of two interaction sets.
///
/// `|a ∩ b| / (sqrt|a| × sqrt|b|)`, or `0.0` when either set is empty.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "cosine similarity divides an overlap count by set magnitudes"
)]
pub fn cosine_similarity(a: &BTreeSet<ActivityId>, b: &BTreeSet<ActivityId>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let overlap = a.intersection(b).count() as f64;
    overlap / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}

impl<C: Clock> RecommendationEngine<C> {
    /// Activities engaged with by users similar to `user_id`.
    ///
    /// Every other user whose cosine similarity exceeds `min_similarity`
    /// adds that similarity to each of their activities `user_id` has not
    /// seen. Candidates present in `activities` that fail validation are
    /// dropped and reported. Every other accumulated activity is
    /// recommended, including ids the snapshot does not describe.
    ///
    /// A user absent from `interactions` receives no recommendations.
    #[must_use]
    pub fn collaborative_filtering(
        &self,
        user_id: UserId,
        activities: &[Activity],
        interactions: &InteractionMatrix,
    ) -> Screened<Vec<RecommendationResult>> {
        let Some(own) = interactions.get(&user_id) else {
            debug!("No interactions recorded for user {user_id}");
            return Screened::default();
        };
        let scores = self.neighbour_scores(user_id, own, interactions);
        let known: BTreeMap<ActivityId, &Activity> = activities
            .iter()
            .map(|activity| (activity.id, activity))
            .collect();
        let mut results = Vec::with_capacity(scores.len());
        let mut skipped = Vec::new();
        for (activity_id, score) in scores {
            if let Some(activity) = known.get(&activity_id) {
                if let Err(err) = activity.validate() {
                    warn!("Skipped activity {activity_id}: {err}");
                    skipped.push(err);
                    continue;
                }
            }
            results.push(RecommendationResult::from_signals(
                activity_id,
                score,
                &[Signal::Collaborative],
            ));
        }
        rank_by_score(&mut results);
        debug!(
            "Collaborative strategy found {} activities for user {user_id}",
            results.len()
        );
        Screened::new(results, skipped)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "candidate scores accumulate neighbour similarities"
    )]
    fn neighbour_scores(
        &self,
        user_id: UserId,
        own: &BTreeSet<ActivityId>,
        interactions: &InteractionMatrix,
    ) -> BTreeMap<ActivityId, f64> {
        let mut scores: BTreeMap<ActivityId, f64> = BTreeMap::new();
        for (_, theirs) in interactions
            .iter()
            .filter(|(other_id, _)| **other_id != user_id)
        {
            let similarity = cosine_similarity(own, theirs);
            if similarity <= self.weights.min_similarity {
                continue;
            }
            for activity_id in theirs.difference(own) {
                *scores.entry(*activity_id).or_default() += similarity;
            }
        }
        scores
    }
}
