//! Activity snapshots and their validation rules.

use std::time::SystemTime;

use log::warn;
use thiserror::Error;

use crate::{ActivityId, CategoryId, Screened, popularity::popularity_from_ratio};

/// A campus activity as seen by the hosting application at snapshot time.
///
/// Fields are public so callers can build snapshots directly. Capacity is
/// checked lazily by [`Activity::validate`] when a computation needs the fill
/// ratio, so a malformed record excludes itself from scoring instead of
/// failing the whole snapshot.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
/// use campus_core::Activity;
///
/// let activity = Activity::new(7, 2, 40, 10, SystemTime::UNIX_EPOCH)
///     .with_title("Robotics workshop");
/// assert_eq!(activity.fill_ratio(), Ok(0.25));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Activity {
    /// Unique identifier.
    pub id: ActivityId,
    /// Category the activity belongs to.
    pub category_id: CategoryId,
    /// Short display title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Venue name or address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    /// Registration capacity. Must be positive.
    pub max_participants: u32,
    /// Registrations so far. Usually no greater than the capacity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_participants: u32,
    /// Absolute start instant, encoded as Unix seconds when serialised.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_time"))]
    pub start_time: SystemTime,
}

/// Validation failures raised for individual activities.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ActivityError {
    /// The activity declares no registration capacity, so its fill ratio is
    /// undefined.
    #[error("activity {activity_id} must have a positive participant capacity")]
    NonPositiveCapacity {
        /// Identifier of the rejected activity.
        activity_id: ActivityId,
    },
}

impl ActivityError {
    /// Identifier of the activity the error refers to.
    #[must_use]
    pub const fn activity_id(&self) -> ActivityId {
        match self {
            Self::NonPositiveCapacity { activity_id } => *activity_id,
        }
    }
}

impl Activity {
    /// Build an activity with empty text fields.
    #[must_use]
    pub const fn new(
        id: ActivityId,
        category_id: CategoryId,
        max_participants: u32,
        current_participants: u32,
        start_time: SystemTime,
    ) -> Self {
        Self {
            id,
            category_id,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            max_participants,
            current_participants,
            start_time,
        }
    }

    /// Set the title while returning `self` for chaining.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Check the invariants required by ratio-based scoring.
    ///
    /// # Errors
    /// Returns [`ActivityError::NonPositiveCapacity`] when
    /// `max_participants` is zero.
    pub const fn validate(&self) -> Result<(), ActivityError> {
        if self.max_participants == 0 {
            return Err(ActivityError::NonPositiveCapacity {
                activity_id: self.id,
            });
        }
        Ok(())
    }

    /// Share of the capacity already taken.
    ///
    /// Overbooked activities report ratios above `1.0`.
    ///
    /// # Errors
    /// Propagates [`Activity::validate`] failures.
    #[expect(
        clippy::float_arithmetic,
        reason = "the fill ratio divides participant counts"
    )]
    pub fn fill_ratio(&self) -> Result<f64, ActivityError> {
        self.validate()?;
        Ok(f64::from(self.current_participants) / f64::from(self.max_participants))
    }

    /// Sigmoid popularity of the activity in `0.0..=1.0`.
    ///
    /// # Errors
    /// Propagates [`Activity::validate`] failures.
    pub fn popularity(&self) -> Result<f64, ActivityError> {
        self.fill_ratio().map(popularity_from_ratio)
    }

    /// Title and description joined for text analysis.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Split a snapshot into activities fit for scoring and the validation
/// failures of the rest.
///
/// Each rejected activity is logged at `warn` level so hosts without access
/// to the returned report still see the problem.
#[must_use]
pub fn screen_activities(activities: &[Activity]) -> Screened<Vec<&Activity>> {
    let mut valid = Vec::with_capacity(activities.len());
    let mut skipped = Vec::new();
    for activity in activities {
        match activity.validate() {
            Ok(()) => valid.push(activity),
            Err(err) => {
                warn!("Skipped activity {}: {err}", activity.id);
                skipped.push(err);
            }
        }
    }
    Screened::new(valid, skipped)
}
