//! Per-user category preferences.

use std::collections::BTreeMap;

use log::warn;

use crate::{CategoryId, UserId};

/// Declared affinity of a user for an activity category.
///
/// The weight is an unbounded real; larger values express stronger interest
/// and negative values express aversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UserPreference {
    /// User the preference belongs to.
    pub user_id: UserId,
    /// Preferred category.
    pub category_id: CategoryId,
    /// Strength of the preference.
    pub weight: f64,
}

impl UserPreference {
    /// Build a preference triple.
    #[must_use]
    pub const fn new(user_id: UserId, category_id: CategoryId, weight: f64) -> Self {
        Self {
            user_id,
            category_id,
            weight,
        }
    }
}

/// Category weights of a single user, ready for lookups while scoring.
///
/// # Examples
/// ```
/// use campus_core::{CategoryWeights, UserPreference};
///
/// let preferences = [
///     UserPreference::new(1, 10, 0.8),
///     UserPreference::new(2, 10, 0.3),
/// ];
/// let weights = CategoryWeights::for_user(1, &preferences);
/// assert_eq!(weights.weight(10), Some(0.8));
/// assert!(weights.weight(11).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryWeights {
    weights: BTreeMap<CategoryId, f64>,
}

impl CategoryWeights {
    /// Collect the weights declared by `user_id`.
    ///
    /// A later entry for the same category replaces an earlier one.
    /// Non-finite weights are ignored and logged.
    #[must_use]
    pub fn for_user(user_id: UserId, preferences: &[UserPreference]) -> Self {
        let mut weights = BTreeMap::new();
        for preference in preferences.iter().filter(|p| p.user_id == user_id) {
            if preference.weight.is_finite() {
                weights.insert(preference.category_id, preference.weight);
            } else {
                warn!(
                    "Ignored non-finite preference weight for user {user_id}, category {}",
                    preference.category_id
                );
            }
        }
        Self { weights }
    }

    /// Weight for a category, if the user declared one.
    #[must_use]
    pub fn weight(&self, category_id: CategoryId) -> Option<f64> {
        self.weights.get(&category_id).copied()
    }

    /// Number of categories with a declared weight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether the user declared no preferences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_entries_override_earlier_ones() {
        let preferences = [UserPreference::new(4, 1, 0.2), UserPreference::new(4, 1, 0.9)];
        let weights = CategoryWeights::for_user(4, &preferences);
        assert_eq!(weights.weight(1), Some(0.9));
        assert_eq!(weights.len(), 1);
    }

    #[test]
    fn other_users_are_ignored() {
        let preferences = [UserPreference::new(5, 1, 0.2)];
        assert!(CategoryWeights::for_user(4, &preferences).is_empty());
    }

    #[test]
    fn non_finite_weights_are_dropped() {
        let preferences = [
            UserPreference::new(4, 1, f64::NAN),
            UserPreference::new(4, 2, -1.5),
        ];
        let weights = CategoryWeights::for_user(4, &preferences);
        assert!(weights.weight(1).is_none());
        assert_eq!(weights.weight(2), Some(-1.5));
    }
}
