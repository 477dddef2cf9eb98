//! Personalised activity recommendations.
//!
//! [`RecommendationEngine`] offers three strategies over snapshots supplied
//! by the host, plus a merge of all three:
//! - **Hybrid** blends the user's category weight, activity popularity and
//!   start-time decay.
//! - **Collaborative** scores activities engaged with by users whose
//!   interaction sets resemble the target user's.
//! - **Content-based** favours emptier activities in preferred categories.
//! - **Combined** concatenates the strategies' best results and removes
//!   duplicates.
//!
//! Every strategy ranks with
//! [`rank_by_score`](campus_core::rank_by_score) and reports activities it
//! could not score through [`Screened`](campus_core::Screened).

#![forbid(unsafe_code)]

mod collaborative;
mod combined;
mod content;
mod engine;
mod weights;

pub use collaborative::cosine_similarity;
pub use engine::RecommendationEngine;
pub use weights::{RecommendationWeights, WeightsError};
