//! Blend weights and thresholds for the recommendation strategies.

use thiserror::Error;

/// Tunable weights shared by every strategy.
///
/// The defaults reproduce the reference scoring model:
///
/// | field | default |
/// |---|---|
/// | `preference` | 0.4 |
/// | `popularity` | 0.3 |
/// | `min_score` | 0.1 |
/// | `min_similarity` | 0.1 |
/// | `content_base` | 0.5 |
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecommendationWeights {
    /// Multiplier applied to the user's category weight in hybrid scores.
    pub preference: f64,
    /// Multiplier applied to activity popularity in hybrid scores.
    pub popularity: f64,
    /// Hybrid scores must exceed this value to be recommended.
    pub min_score: f64,
    /// Neighbours must exceed this cosine similarity to contribute.
    pub min_similarity: f64,
    /// Share of a content-based score granted regardless of free capacity.
    pub content_base: f64,
}

impl RecommendationWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] when any value is NaN or infinite,
    /// [`WeightsError::Negative`] when a blend weight is negative and
    /// [`WeightsError::ZeroTotal`] when both blend weights are zero.
    ///
    /// # Examples
    /// ```
    /// use campus_recommend::{RecommendationWeights, WeightsError};
    ///
    /// let weights = RecommendationWeights { popularity: -0.1, ..Default::default() };
    /// assert_eq!(weights.validate(), Err(WeightsError::Negative));
    /// ```
    pub const fn validate(self) -> Result<Self, WeightsError> {
        if !self.has_finite_values() {
            return Err(WeightsError::NonFinite);
        }
        if !self.has_non_negative_blend() {
            return Err(WeightsError::Negative);
        }
        if !self.has_non_zero_total() {
            return Err(WeightsError::ZeroTotal);
        }
        Ok(self)
    }

    const fn has_finite_values(self) -> bool {
        self.preference.is_finite()
            && self.popularity.is_finite()
            && self.min_score.is_finite()
            && self.min_similarity.is_finite()
            && self.content_base.is_finite()
    }

    const fn has_non_negative_blend(self) -> bool {
        self.preference >= 0.0 && self.popularity >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.preference + self.popularity) != 0.0
    }

    /// Hybrid blend of a category weight and a popularity score.
    ///
    /// A missing category weight contributes nothing.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted sums"
    )]
    pub(crate) fn blend(self, preference: Option<f64>, popularity: f64) -> f64 {
        preference.map_or(0.0, |weight| weight * self.preference) + popularity * self.popularity
    }

    /// Content-based score for a category weight and fill ratio.
    ///
    /// Free capacity lifts the score from `content_base` towards one.
    #[expect(
        clippy::float_arithmetic,
        reason = "content scores scale the weight by remaining capacity"
    )]
    pub(crate) const fn content(self, weight: f64, fill_ratio: f64) -> f64 {
        weight * (self.content_base + (1.0 - self.content_base) * (1.0 - fill_ratio))
    }
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            preference: 0.4,
            popularity: 0.3,
            min_score: 0.1,
            min_similarity: 0.1,
            content_base: 0.5,
        }
    }
}

/// Reasons a set of [`RecommendationWeights`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight or threshold is NaN or infinite.
    #[error("recommendation weights must be finite")]
    NonFinite,
    /// The preference or popularity weight is negative.
    #[error("preference and popularity weights must not be negative")]
    Negative,
    /// Preference and popularity weights are both zero.
    #[error("preference and popularity weights must not both be zero")]
    ZeroTotal,
}
