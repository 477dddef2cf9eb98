//! Focused unit tests covering the analyse command.

use super::helpers::{Workspace, upcoming};
use super::*;
use crate::analyse::{AnalyseConfig, run_analyse_with};
use crate::output::{AnalyseReport, SkippedActivity};
use camino::Utf8PathBuf;
use campus_text::DEFAULT_MAX_KEYWORDS;
use rstest::rstest;

#[rstest]
fn converting_without_snapshot_errors() {
    let err = AnalyseConfig::try_from(AnalyseArgs::default()).expect_err("missing snapshot");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(env, ENV_SNAPSHOT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::defaulted(None, DEFAULT_MAX_KEYWORDS)]
#[case::overridden(Some(3), 3)]
fn max_keywords_falls_back_to_default(#[case] flag: Option<usize>, #[case] expected: usize) {
    let args = AnalyseArgs {
        snapshot_path: Some("snapshot.json".into()),
        max_keywords: flag,
    };
    let config = AnalyseConfig::try_from(args).expect("config should build");
    assert_eq!(config.max_keywords, expected);
}

#[rstest]
fn parses_analyse_flags() {
    let cli = Cli::try_parse_from(["campus", "analyse", "snapshot.json", "--max-keywords", "4"])
        .expect("arguments should parse");
    let Command::Analyse(args) = cli.command else {
        panic!("expected analyse command");
    };
    assert_eq!(args.snapshot_path, Some(Utf8PathBuf::from("snapshot.json")));
    assert_eq!(args.max_keywords, Some(4));
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "category share is compared within a tolerance"
)]
fn analyse_prints_report_with_skipped_activities() {
    let workspace = Workspace::new();
    let snapshot = vec![
        upcoming(1, 4, 100, 50, 2).with_title("Chess tournament"),
        upcoming(2, 4, 0, 0, 2).with_title("Broken signup"),
        upcoming(3, 5, 10, 5, 2).with_title("Hiking trip"),
    ];
    let config = AnalyseConfig {
        snapshot_path: workspace.write_json("snapshot.json", &snapshot),
        max_keywords: 5,
    };
    let mut stdout = Vec::new();
    run_analyse_with(&config, &mut stdout).expect("analyse should succeed");

    let report: AnalyseReport = serde_json::from_slice(&stdout).expect("JSON report");
    assert_eq!(report.analysis.popularity_score, 0.5);
    assert!(report.analysis.keywords.len() <= 5);
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(
        report.skipped.first(),
        Some(SkippedActivity { activity_id: 2, .. })
    ));
    let share = report.analysis.category_distribution.get("4").copied();
    assert!(share.is_some_and(|share| (share - 2.0 / 3.0).abs() < 1e-12));
}

#[rstest]
fn analyse_reports_missing_snapshot() {
    let workspace = Workspace::new();
    let config = AnalyseConfig {
        snapshot_path: workspace.path("absent.json"),
        max_keywords: DEFAULT_MAX_KEYWORDS,
    };
    let err = run_analyse_with(&config, &mut Vec::new()).expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SNAPSHOT),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn analyse_rejects_directories() {
    let workspace = Workspace::new();
    let directory = workspace.path("snapshots");
    std::fs::create_dir(&directory).expect("create directory");
    let config = AnalyseConfig {
        snapshot_path: directory,
        max_keywords: DEFAULT_MAX_KEYWORDS,
    };
    let err = run_analyse_with(&config, &mut Vec::new()).expect_err("directory input");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_SNAPSHOT),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn analyse_rejects_malformed_json() {
    let workspace = Workspace::new();
    let config = AnalyseConfig {
        snapshot_path: workspace.write("snapshot.json", b"[{ not json"),
        max_keywords: DEFAULT_MAX_KEYWORDS,
    };
    let err = run_analyse_with(&config, &mut Vec::new()).expect_err("malformed JSON");
    match err {
        CliError::ParseInput { field, .. } => assert_eq!(field, ARG_SNAPSHOT),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}
