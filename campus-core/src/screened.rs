//! Results paired with the activities rejected while producing them.

use crate::ActivityError;

/// Output of an aggregate computation plus recoverable validation failures.
///
/// Aggregates exclude invalid activities rather than failing outright; the
/// exclusions are reported here so callers can surface them.
#[derive(Debug, Clone, PartialEq)]
pub struct Screened<T> {
    /// The computed output.
    pub value: T,
    /// Activities excluded from the computation, in input order.
    pub skipped: Vec<ActivityError>,
}

impl<T> Screened<T> {
    /// Pair a value with its exclusions.
    #[must_use]
    pub const fn new(value: T, skipped: Vec<ActivityError>) -> Self {
        Self { value, skipped }
    }

    /// Wrap a value produced without exclusions.
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Report whether every activity passed validation.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Discard the exclusions and return the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> Default for Screened<T> {
    fn default() -> Self {
        Self::clean(T::default())
    }
}
