//! Clocks and start-time decay.
//!
//! Recommendations favour activities that start soon. The decay is a step
//! function of the number of days until the start: activities that already
//! started score nothing, and later activities fall into progressively
//! weaker bands.

use std::time::SystemTime;

use thiserror::Error;

/// Seconds in one day, used to express time offsets in days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Factor applied to activities whose start time has passed.
const PAST_FACTOR: f64 = 0.0;

/// Source of the current instant.
///
/// Implementations must be thread-safe so engines holding a clock can be
/// shared across threads.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> SystemTime;
}

/// Clock backed by [`SystemTime::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at a single instant.
///
/// # Examples
/// ```
/// use std::time::SystemTime;
/// use campus_core::{Clock, FixedClock};
///
/// let clock = FixedClock::new(SystemTime::UNIX_EPOCH);
/// assert_eq!(clock.now(), SystemTime::UNIX_EPOCH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: SystemTime,
}

impl FixedClock {
    /// Freeze the clock at `instant`.
    #[must_use]
    pub const fn new(instant: SystemTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.instant
    }
}

/// Activities starting within `within_days` receive `factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayBand {
    /// Inclusive upper bound in days from now.
    pub within_days: f64,
    /// Multiplier for activities inside the band.
    pub factor: f64,
}

/// Step-wise start-time decay.
///
/// Bands are consulted in order; the first whose bound covers the offset
/// wins. Offsets beyond every band receive `distant_factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDecay {
    /// Bands ordered by increasing `within_days`.
    pub bands: [DecayBand; 3],
    /// Multiplier for activities beyond the last band.
    pub distant_factor: f64,
}

impl Default for TimeDecay {
    fn default() -> Self {
        Self {
            bands: [
                DecayBand {
                    within_days: 7.0,
                    factor: 1.0,
                },
                DecayBand {
                    within_days: 30.0,
                    factor: 0.8,
                },
                DecayBand {
                    within_days: 90.0,
                    factor: 0.6,
                },
            ],
            distant_factor: 0.4,
        }
    }
}

/// Reasons a [`TimeDecay`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecayError {
    /// A bound or factor is NaN or infinite.
    #[error("decay bounds and factors must be finite")]
    NonFinite,
    /// A bound is negative or not greater than the bound before it.
    #[error("decay band bounds must be non-negative and strictly increasing")]
    UnorderedBands,
}

impl TimeDecay {
    /// Validate the bands and return a copy.
    ///
    /// # Errors
    /// Returns [`DecayError::NonFinite`] when any bound or factor is NaN or
    /// infinite and [`DecayError::UnorderedBands`] when the bounds are
    /// negative or not strictly increasing.
    ///
    /// # Examples
    /// ```
    /// use campus_core::{DecayError, TimeDecay};
    ///
    /// let mut decay = TimeDecay::default();
    /// decay.bands.swap(0, 2);
    /// assert_eq!(decay.validate(), Err(DecayError::UnorderedBands));
    /// ```
    pub fn validate(self) -> Result<Self, DecayError> {
        let finite = self.distant_factor.is_finite()
            && self
                .bands
                .iter()
                .all(|band| band.within_days.is_finite() && band.factor.is_finite());
        if !finite {
            return Err(DecayError::NonFinite);
        }
        let first_non_negative = self
            .bands
            .first()
            .is_none_or(|band| band.within_days >= 0.0);
        let increasing = self
            .bands
            .windows(2)
            .all(|pair| matches!(pair, [lower, upper] if lower.within_days < upper.within_days));
        if !(first_non_negative && increasing) {
            return Err(DecayError::UnorderedBands);
        }
        Ok(self)
    }

    /// Decay factor for an activity starting at `start` as seen at `now`.
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, SystemTime};
    /// use campus_core::TimeDecay;
    ///
    /// let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    /// let decay = TimeDecay::default();
    /// assert_eq!(decay.factor(now + Duration::from_secs(3 * 86_400), now), 1.0);
    /// assert_eq!(decay.factor(now - Duration::from_secs(60), now), 0.0);
    /// ```
    #[must_use]
    pub fn factor(&self, start: SystemTime, now: SystemTime) -> f64 {
        let Some(days) = days_until(start, now) else {
            return PAST_FACTOR;
        };
        self.bands
            .iter()
            .find(|band| days <= band.within_days)
            .map_or(self.distant_factor, |band| band.factor)
    }

    /// Report whether an activity starting at `start` has already begun.
    #[must_use]
    pub fn has_started(start: SystemTime, now: SystemTime) -> bool {
        days_until(start, now).is_none()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "day offsets are fractional by nature"
)]
fn days_until(start: SystemTime, now: SystemTime) -> Option<f64> {
    start
        .duration_since(now)
        .ok()
        .map(|ahead| ahead.as_secs_f64() / SECONDS_PER_DAY)
}
