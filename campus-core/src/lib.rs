//! Core domain types for the campus activity engine.
//!
//! Every type here is a value snapshot handed over by the hosting
//! application. The analysers and recommenders built on top of this crate
//! borrow these snapshots for the duration of a single call and retain
//! nothing afterwards.
//!
//! The crate also owns the few formulas that more than one component relies
//! on: the sigmoid popularity curve, the start-time decay bands and the
//! deterministic ranking order for recommendation results.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod activity;
mod analysis;
mod popularity;
mod preference;
mod recommendation;
mod request;
mod screened;
#[cfg(feature = "serde")]
mod serde_time;
mod time;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

use std::collections::{BTreeMap, BTreeSet};

pub use activity::{Activity, ActivityError, screen_activities};
pub use analysis::AnalysisResult;
pub use popularity::{POPULARITY_MIDPOINT, POPULARITY_STEEPNESS, popularity_from_ratio};
pub use preference::{CategoryWeights, UserPreference};
pub use recommendation::{RecommendationResult, Signal, rank_by_score};
pub use request::RecommendationRequest;
pub use screened::Screened;
#[cfg(feature = "serde")]
pub use serde_time::{from_unix_seconds, to_unix_seconds};
pub use time::{
    Clock, DecayBand, DecayError, FixedClock, SECONDS_PER_DAY, SystemClock, TimeDecay,
};

/// Identifier of an activity.
pub type ActivityId = u64;

/// Identifier of a user of the hosting application.
pub type UserId = u64;

/// Identifier of an activity category.
pub type CategoryId = u32;

/// Activities each user has engaged with, keyed by user.
///
/// Ordered collections keep iteration, and therefore accumulated floating
/// point sums, identical from one run to the next.
pub type InteractionMatrix = BTreeMap<UserId, BTreeSet<ActivityId>>;
