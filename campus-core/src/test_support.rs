//! Test-only fixtures shared by the workspace's unit and behaviour tests.
//!
//! Every helper is anchored on [`reference_time`] so time-decay expectations
//! do not depend on the wall clock.

use std::time::{Duration, SystemTime};

use crate::{Activity, ActivityId, CategoryId, FixedClock};

const REFERENCE_UNIX_SECONDS: u64 = 1_700_000_000;
const DAY_SECONDS: u64 = 86_400;

/// Fixed instant treated as "now" by test fixtures.
#[must_use]
pub fn reference_time() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(REFERENCE_UNIX_SECONDS)
}

/// Clock frozen at [`reference_time`].
#[must_use]
pub fn reference_clock() -> FixedClock {
    FixedClock::new(reference_time())
}

/// Instant `days` whole days away from [`reference_time`]; negative values
/// lie in the past.
#[must_use]
pub fn days_from_reference(days: i64) -> SystemTime {
    let offset = Duration::from_secs(days.unsigned_abs() * DAY_SECONDS);
    if days >= 0 {
        reference_time() + offset
    } else {
        reference_time() - offset
    }
}

/// Activity starting `days` days after [`reference_time`].
#[must_use]
pub fn activity_in_days(
    id: ActivityId,
    category_id: CategoryId,
    max_participants: u32,
    current_participants: u32,
    days: i64,
) -> Activity {
    Activity::new(
        id,
        category_id,
        max_participants,
        current_participants,
        days_from_reference(days),
    )
}
