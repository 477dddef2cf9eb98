//! Focused unit tests covering the recommend command.

use std::collections::BTreeSet;

use super::helpers::{Workspace, sample_request};
use super::*;
use crate::output::RecommendReport;
use crate::recommend::{DEFAULT_LIMIT, RecommendConfig, Strategy, run_recommend_with};
use campus_recommend::{RecommendationWeights, WeightsError};
use rstest::rstest;

fn args_for(path: &str) -> RecommendArgs {
    RecommendArgs {
        request_path: Some(path.into()),
        ..RecommendArgs::default()
    }
}

fn parse_recommend(extra: &[&str]) -> RecommendArgs {
    let argv = ["campus", "recommend", "request.json"]
        .into_iter()
        .chain(extra.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    match cli.command {
        Command::Recommend(args) => args,
        Command::Analyse(_) => panic!("expected recommend command"),
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn unset_options_use_defaults() {
    let config = RecommendConfig::try_from(args_for("request.json")).expect("config");
    assert_eq!(config.strategy, Strategy::Hybrid);
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert_eq!(config.weights, RecommendationWeights::default());
}

#[rstest]
fn flags_override_defaults() {
    let args = parse_recommend(&[
        "--strategy",
        "combined",
        "--limit",
        "3",
        "--preference-weight",
        "0.6",
        "--min-similarity",
        "0.2",
    ]);
    let config = RecommendConfig::try_from(args).expect("config");
    assert_eq!(config.strategy, Strategy::Combined);
    assert_eq!(config.limit, 3);
    assert_eq!(config.weights.preference, 0.6);
    assert_eq!(config.weights.min_similarity, 0.2);
    assert_eq!(config.weights.popularity, RecommendationWeights::default().popularity);
}

#[rstest]
fn unknown_strategy_is_rejected() {
    let argv = ["campus", "recommend", "request.json", "--strategy", "random"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[rstest]
#[case::negative(Some(-0.5), Some(0.3), WeightsError::Negative)]
#[case::zero_total(Some(0.0), Some(0.0), WeightsError::ZeroTotal)]
fn invalid_weights_are_rejected(
    #[case] preference_weight: Option<f64>,
    #[case] popularity_weight: Option<f64>,
    #[case] expected: WeightsError,
) {
    let args = RecommendArgs {
        preference_weight,
        popularity_weight,
        ..args_for("request.json")
    };
    match RecommendConfig::try_from(args) {
        Err(CliError::InvalidWeights(err)) => assert_eq!(err, expected),
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
#[case::hybrid(Strategy::Hybrid, vec![1, 3])]
#[case::collaborative(Strategy::Collaborative, vec![3])]
#[case::content(Strategy::Content, vec![3, 1])]
#[case::combined(Strategy::Combined, vec![3, 1])]
fn each_strategy_prints_its_ranking(#[case] strategy: Strategy, #[case] expected: Vec<u64>) {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        request_path: workspace.write_json("request.json", &sample_request()),
        strategy,
        limit: 2,
        weights: RecommendationWeights::default(),
    };
    let mut stdout = Vec::new();
    run_recommend_with(&config, &mut stdout).expect("recommend should succeed");

    let report: RecommendReport = serde_json::from_slice(&stdout).expect("JSON report");
    let ids: Vec<u64> = report
        .recommendations
        .iter()
        .map(|result| result.activity_id)
        .collect();
    assert_eq!(ids, expected);
    assert!(report.skipped.is_empty());
}

#[rstest]
fn registered_activities_are_not_recommended() {
    let workspace = Workspace::new();
    let request = sample_request().with_registered(BTreeSet::from([1]));
    let config = RecommendConfig {
        request_path: workspace.write_json("request.json", &request),
        strategy: Strategy::Hybrid,
        limit: DEFAULT_LIMIT,
        weights: RecommendationWeights::default(),
    };
    let mut stdout = Vec::new();
    run_recommend_with(&config, &mut stdout).expect("recommend should succeed");
    let report: RecommendReport = serde_json::from_slice(&stdout).expect("JSON report");
    assert!(report.recommendations.iter().all(|result| result.activity_id != 1));
}
