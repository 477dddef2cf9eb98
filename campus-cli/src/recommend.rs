//! `recommend` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use campus_core::{RecommendationRequest, RecommendationResult, Screened};
use campus_recommend::{RecommendationEngine, RecommendationWeights};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_json, require_existing};
use crate::output::{RecommendReport, write_report};
use crate::{
    ARG_LIMIT, ARG_MIN_SCORE, ARG_MIN_SIMILARITY, ARG_POPULARITY_WEIGHT, ARG_PREFERENCE_WEIGHT,
    ARG_REQUEST, ARG_STRATEGY, CliError, ENV_REQUEST,
};

/// Recommendations returned when no limit is configured.
pub(crate) const DEFAULT_LIMIT: usize = 10;

/// Recommendation strategy selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Strategy {
    /// Preference, popularity and timing blend.
    #[default]
    Hybrid,
    /// Similar users' interaction histories.
    Collaborative,
    /// Preferred categories weighted by free capacity.
    Content,
    /// All three strategies merged without duplicates.
    Combined,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank activities for the user named in a JSON-encoded \
                 recommendation request. Weights and thresholds default to \
                 the standard scoring model and can be overridden from \
                 configuration files, environment variables or flags.",
    about = "Recommend activities for a user"
)]
#[ortho_config(prefix = "CAMPUS")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Strategy used to rank activities.
    #[arg(long = ARG_STRATEGY, value_enum, value_name = "strategy")]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
    /// Maximum number of recommendations to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Multiplier for the user's category weight.
    #[arg(long = ARG_PREFERENCE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) preference_weight: Option<f64>,
    /// Multiplier for activity popularity.
    #[arg(long = ARG_POPULARITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) popularity_weight: Option<f64>,
    /// Hybrid scores must exceed this threshold.
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
    /// Neighbours must exceed this cosine similarity.
    #[arg(long = ARG_MIN_SIMILARITY, value_name = "similarity")]
    #[serde(default)]
    pub(crate) min_similarity: Option<f64>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) strategy: Strategy,
    pub(crate) limit: usize,
    pub(crate) weights: RecommendationWeights,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let defaults = RecommendationWeights::default();
        let weights = RecommendationWeights {
            preference: args.preference_weight.unwrap_or(defaults.preference),
            popularity: args.popularity_weight.unwrap_or(defaults.popularity),
            min_score: args.min_score.unwrap_or(defaults.min_score),
            min_similarity: args.min_similarity.unwrap_or(defaults.min_similarity),
            ..defaults
        }
        .validate()?;
        Ok(Self {
            request_path,
            strategy: args.strategy.unwrap_or_default(),
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            weights,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_recommend_with(&config, writer)
}

pub(crate) fn run_recommend_with(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.request_path, ARG_REQUEST)?;
    let request: RecommendationRequest = load_json(&config.request_path, ARG_REQUEST)?;
    let engine = RecommendationEngine::new(config.weights)?;
    info!(
        "Recommending up to {} activities for user {} with the {:?} strategy",
        config.limit, request.user_id, config.strategy
    );
    let mut screened = recommend(&engine, &request, config.strategy, config.limit);
    screened.value.truncate(config.limit);
    write_report(writer, &RecommendReport::from(screened))
}

fn recommend(
    engine: &RecommendationEngine,
    request: &RecommendationRequest,
    strategy: Strategy,
    limit: usize,
) -> Screened<Vec<RecommendationResult>> {
    match strategy {
        Strategy::Hybrid => engine.calculate_recommendations(
            request.user_id,
            &request.activities,
            &request.preferences,
            &request.registered,
        ),
        Strategy::Collaborative => engine.collaborative_filtering(
            request.user_id,
            &request.activities,
            &request.interactions,
        ),
        Strategy::Content => engine.content_based_recommendation(
            request.user_id,
            &request.activities,
            &request.preferences,
        ),
        Strategy::Combined => engine.combined_recommendations(request, limit),
    }
}
