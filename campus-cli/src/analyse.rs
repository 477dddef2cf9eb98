//! `analyse` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use campus_core::Activity;
use campus_scorer::ActivityAnalyzer;
use campus_text::{DEFAULT_MAX_KEYWORDS, TextAnalyzer, TextAnalyzerConfig};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_json, require_existing};
use crate::output::{AnalyseReport, write_report};
use crate::{ARG_MAX_KEYWORDS, ARG_SNAPSHOT, CliError, ENV_SNAPSHOT};

/// CLI arguments for the `analyse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise a JSON array of activities: mean popularity, \
                 trend, corpus keywords and the share of each category. \
                 Activities without capacity are listed as skipped.",
    about = "Analyse an activity snapshot"
)]
#[ortho_config(prefix = "CAMPUS")]
pub(crate) struct AnalyseArgs {
    /// Path to a JSON file containing an array of activities.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot_path: Option<Utf8PathBuf>,
    /// Number of keywords to report.
    #[arg(long = ARG_MAX_KEYWORDS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_keywords: Option<usize>,
}

impl AnalyseArgs {
    fn into_config(self) -> Result<AnalyseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyseConfig::try_from(merged)
    }
}

/// Resolved `analyse` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyseConfig {
    pub(crate) snapshot_path: Utf8PathBuf,
    pub(crate) max_keywords: usize,
}

impl AnalyseConfig {
    fn analyzer(&self) -> ActivityAnalyzer {
        ActivityAnalyzer::new(TextAnalyzer::new(TextAnalyzerConfig {
            max_keywords: self.max_keywords,
            ..TextAnalyzerConfig::default()
        }))
    }
}

impl TryFrom<AnalyseArgs> for AnalyseConfig {
    type Error = CliError;

    fn try_from(args: AnalyseArgs) -> Result<Self, Self::Error> {
        let snapshot_path = args.snapshot_path.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        Ok(Self {
            snapshot_path,
            max_keywords: args.max_keywords.unwrap_or(DEFAULT_MAX_KEYWORDS),
        })
    }
}

pub(crate) fn run_analyse(args: AnalyseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_analyse_with(&config, writer)
}

pub(crate) fn run_analyse_with(
    config: &AnalyseConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.snapshot_path, ARG_SNAPSHOT)?;
    let activities: Vec<Activity> = load_json(&config.snapshot_path, ARG_SNAPSHOT)?;
    info!(
        "Analysing {} activities from {}",
        activities.len(),
        config.snapshot_path
    );
    let report = AnalyseReport::from(config.analyzer().analyze_activities(&activities));
    write_report(writer, &report)
}
