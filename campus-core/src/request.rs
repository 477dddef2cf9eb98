//! Bundled recommendation inputs.

use std::collections::BTreeSet;

use crate::{Activity, ActivityId, InteractionMatrix, UserId, UserPreference};

/// Everything the recommendation strategies need for one user.
///
/// Hosts that drive a single strategy can pass the parts individually; the
/// bundle exists for the combined strategy and for JSON snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendationRequest {
    /// User receiving recommendations.
    pub user_id: UserId,
    /// Candidate activities.
    pub activities: Vec<Activity>,
    /// Category preferences of all users; only `user_id`'s entries are used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Vec<UserPreference>,
    /// Activities the user has already registered for.
    #[cfg_attr(feature = "serde", serde(default))]
    pub registered: BTreeSet<ActivityId>,
    /// Engagement history of all users.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interactions: InteractionMatrix,
}

impl RecommendationRequest {
    /// Start a request for `user_id` over `activities`.
    #[must_use]
    pub fn new(user_id: UserId, activities: Vec<Activity>) -> Self {
        Self {
            user_id,
            activities,
            ..Self::default()
        }
    }

    /// Attach category preferences.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Vec<UserPreference>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Attach the user's existing registrations.
    #[must_use]
    pub fn with_registered(mut self, registered: BTreeSet<ActivityId>) -> Self {
        self.registered = registered;
        self
    }

    /// Attach the interaction matrix.
    #[must_use]
    pub fn with_interactions(mut self, interactions: InteractionMatrix) -> Self {
        self.interactions = interactions;
        self
    }
}
