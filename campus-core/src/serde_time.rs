//! Unix-second encoding for activity start times.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer, Serializer, de, ser};

/// Convert an instant to whole seconds relative to the Unix epoch.
///
/// Returns `None` when the offset does not fit in an `i64`.
#[must_use]
pub fn to_unix_seconds(time: SystemTime) -> Option<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).ok(),
        Err(before) => i64::try_from(before.duration().as_secs())
            .ok()
            .and_then(i64::checked_neg),
    }
}

/// Convert whole seconds relative to the Unix epoch into an instant.
///
/// Returns `None` when the platform cannot represent the instant.
#[must_use]
pub fn from_unix_seconds(seconds: i64) -> Option<SystemTime> {
    let offset = Duration::from_secs(seconds.unsigned_abs());
    if seconds >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}

pub(crate) fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let seconds = to_unix_seconds(*time)
        .ok_or_else(|| ser::Error::custom("start time is outside the i64 second range"))?;
    serializer.serialize_i64(seconds)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    from_unix_seconds(seconds)
        .ok_or_else(|| de::Error::custom(format!("unrepresentable start time {seconds}")))
}
