//! Command-line host for the campus activity engine.
//!
//! `campus analyse` summarises an activity snapshot and `campus recommend`
//! ranks activities for one user. Both read JSON from disk and print pretty
//! JSON on stdout; diagnostics go to stderr through `log`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod analyse;
mod error;
mod input;
mod output;
mod recommend;

use analyse::{AnalyseArgs, run_analyse};
pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_SNAPSHOT: &str = "snapshot";
pub(crate) const ARG_MAX_KEYWORDS: &str = "max-keywords";
pub(crate) const ENV_SNAPSHOT: &str = "CAMPUS_CMDS_ANALYSE_SNAPSHOT_PATH";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_PREFERENCE_WEIGHT: &str = "preference-weight";
pub(crate) const ARG_POPULARITY_WEIGHT: &str = "popularity-weight";
pub(crate) const ARG_MIN_SCORE: &str = "min-score";
pub(crate) const ARG_MIN_SIMILARITY: &str = "min-similarity";
pub(crate) const ENV_REQUEST: &str = "CAMPUS_CMDS_RECOMMEND_REQUEST_PATH";

/// Run the campus CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or input files are
/// unusable, or when writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Analyse(args) => run_analyse(args, &mut stdout),
        Command::Recommend(args) => run_recommend(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "campus",
    about = "Analyse campus activity snapshots and recommend activities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarise popularity, trend, keywords and category mix of a snapshot.
    Analyse(AnalyseArgs),
    /// Rank activities for a user.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
