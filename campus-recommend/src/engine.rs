//! Recommendation engine and its hybrid strategy.

use std::collections::BTreeSet;
use std::time::SystemTime;

use campus_core::{
    Activity, ActivityError, ActivityId, CategoryWeights, Clock, DecayError, RecommendationResult,
    Screened, Signal, SystemClock, TimeDecay, UserId, UserPreference, rank_by_score,
};
use log::{debug, warn};

use crate::{RecommendationWeights, WeightsError};

const WITH_PREFERENCE: &[Signal] = &[Signal::Preference, Signal::Popularity, Signal::Timing];
const WITHOUT_PREFERENCE: &[Signal] = &[Signal::Popularity, Signal::Timing];

/// Ranks activities for a user from snapshots handed over per call.
///
/// The engine keeps only configuration: validated weights, start-time decay
/// bands and the clock used to read "now". It can be shared freely across
/// threads.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use std::time::{Duration, SystemTime};
/// use campus_core::{Activity, FixedClock, UserPreference};
/// use campus_recommend::{RecommendationEngine, RecommendationWeights};
///
/// let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
/// let engine = RecommendationEngine::with_clock(
///     RecommendationWeights::default(),
///     FixedClock::new(now),
/// )?;
/// let activities = [Activity::new(7, 3, 100, 50, now + Duration::from_secs(86_400))];
/// let preferences = [UserPreference::new(1, 3, 0.8)];
/// let results = engine
///     .calculate_recommendations(1, &activities, &preferences, &BTreeSet::new())
///     .into_value();
/// assert_eq!(results.len(), 1);
/// assert!((results[0].score - 0.47).abs() < 1e-12);
/// # Ok::<(), campus_recommend::WeightsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<C: Clock = SystemClock> {
    pub(crate) weights: RecommendationWeights,
    pub(crate) decay: TimeDecay,
    pub(crate) clock: C,
}

impl RecommendationEngine {
    /// Build an engine reading the system clock.
    ///
    /// # Errors
    /// Returns a [`WeightsError`] when `weights` fail validation.
    pub fn new(weights: RecommendationWeights) -> Result<Self, WeightsError> {
        Self::with_clock(weights, SystemClock)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            weights: RecommendationWeights::default(),
            decay: TimeDecay::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> RecommendationEngine<C> {
    /// Build an engine reading `clock`.
    ///
    /// # Errors
    /// Returns a [`WeightsError`] when `weights` fail validation.
    pub fn with_clock(weights: RecommendationWeights, clock: C) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            decay: TimeDecay::default(),
            clock,
        })
    }

    /// Replace the start-time decay bands.
    ///
    /// # Errors
    /// Returns a [`DecayError`] when `decay` fails [`TimeDecay::validate`].
    pub fn with_decay(mut self, decay: TimeDecay) -> Result<Self, DecayError> {
        self.decay = decay.validate()?;
        Ok(self)
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &RecommendationWeights {
        &self.weights
    }

    /// Start-time decay in use.
    #[must_use]
    pub const fn decay(&self) -> &TimeDecay {
        &self.decay
    }

    /// Hybrid recommendations blending preference, popularity and timing.
    ///
    /// Each activity not in `registered` scores
    ///
    /// `(preference × w_pref + popularity × w_pop) × decay(start)`
    ///
    /// where a category without a declared weight contributes no preference
    /// term. Activities scoring at or below `min_score` are dropped, so
    /// activities that already started never appear. The reason cites the
    /// preference only when one contributed.
    #[must_use]
    pub fn calculate_recommendations(
        &self,
        user_id: UserId,
        activities: &[Activity],
        preferences: &[UserPreference],
        registered: &BTreeSet<ActivityId>,
    ) -> Screened<Vec<RecommendationResult>> {
        let weights = CategoryWeights::for_user(user_id, preferences);
        let now = self.clock.now();
        let mut results = Vec::new();
        let mut skipped = Vec::new();
        for activity in activities
            .iter()
            .filter(|activity| !registered.contains(&activity.id))
        {
            match self.hybrid_score(activity, &weights, now) {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(err) => {
                    warn!("Skipped activity {}: {err}", activity.id);
                    skipped.push(err);
                }
            }
        }
        rank_by_score(&mut results);
        debug!(
            "Hybrid strategy kept {} of {} activities for user {user_id}",
            results.len(),
            activities.len()
        );
        Screened::new(results, skipped)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the blended score is scaled by the decay factor"
    )]
    fn hybrid_score(
        &self,
        activity: &Activity,
        weights: &CategoryWeights,
        now: SystemTime,
    ) -> Result<Option<RecommendationResult>, ActivityError> {
        let popularity = activity.popularity()?;
        let preference = weights.weight(activity.category_id);
        let score = self.weights.blend(preference, popularity)
            * self.decay.factor(activity.start_time, now);
        if score <= self.weights.min_score {
            return Ok(None);
        }
        let signals = if preference.is_some() {
            WITH_PREFERENCE
        } else {
            WITHOUT_PREFERENCE
        };
        Ok(Some(RecommendationResult::from_signals(
            activity.id,
            score,
            signals,
        )))
    }
}
