//! Facade crate for the campus activity engine.
//!
//! This crate re-exports the domain types together with the text analyser,
//! the snapshot scorer and the recommendation engine, so hosts depend on a
//! single crate.
//!
//! # Examples
//!
//! ```
//! use std::time::{Duration, SystemTime};
//! use campus_engine::{Activity, ActivityAnalyzer};
//!
//! let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
//! let activities = [
//!     Activity::new(1, 2, 40, 20, start).with_title("Robotics workshop"),
//!     Activity::new(2, 3, 20, 5, start).with_title("Poetry reading"),
//! ];
//! let analysis = ActivityAnalyzer::default().analyze_activities(&activities);
//! assert!(analysis.is_clean());
//! assert_eq!(analysis.value.category_distribution.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub use campus_core::{
    Activity, ActivityError, ActivityId, AnalysisResult, CategoryId, CategoryWeights, Clock,
    DecayBand, DecayError, FixedClock, InteractionMatrix, RecommendationRequest, RecommendationResult,
    Screened, Signal, SystemClock, TimeDecay, UserId, UserPreference, popularity_from_ratio,
    rank_by_score, screen_activities,
};

pub use campus_recommend::{
    RecommendationEngine, RecommendationWeights, WeightsError, cosine_similarity,
};
pub use campus_scorer::{
    ActivityAnalyzer, TREND_RANGE, analyze_trend, calculate_category_distribution,
    calculate_popularity,
};
pub use campus_text::{
    DEFAULT_MAX_KEYWORDS, TextAnalyzer, TextAnalyzerConfig, calculate_tfidf, extract_keywords,
};

#[cfg(feature = "test-support")]
pub use campus_core::test_support;
