//! Aggregate analytics over an activity snapshot.

use std::collections::BTreeMap;

/// Descriptive statistics for a set of activities.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AnalysisResult {
    /// Mean popularity of the valid activities in `0.0..=1.0`.
    pub popularity_score: f64,
    /// Recent-versus-historical popularity delta in `-1.0..=1.0`.
    pub trend_score: f64,
    /// Most characteristic terms, strongest first.
    pub keywords: Vec<String>,
    /// Share of activities per category, keyed by the category id.
    pub category_distribution: BTreeMap<String, f64>,
}
