//! JSON reports written to stdout.

use std::io::Write;

use campus_core::{ActivityError, ActivityId, AnalysisResult, RecommendationResult, Screened};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// An activity left out of a computation and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SkippedActivity {
    pub(crate) activity_id: ActivityId,
    pub(crate) reason: String,
}

impl From<ActivityError> for SkippedActivity {
    fn from(error: ActivityError) -> Self {
        Self {
            activity_id: error.activity_id(),
            reason: error.to_string(),
        }
    }
}

fn skipped_activities(skipped: Vec<ActivityError>) -> Vec<SkippedActivity> {
    skipped.into_iter().map(SkippedActivity::from).collect()
}

/// Output of `campus analyse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyseReport {
    pub(crate) analysis: AnalysisResult,
    pub(crate) skipped: Vec<SkippedActivity>,
}

impl From<Screened<AnalysisResult>> for AnalyseReport {
    fn from(screened: Screened<AnalysisResult>) -> Self {
        Self {
            analysis: screened.value,
            skipped: skipped_activities(screened.skipped),
        }
    }
}

/// Output of `campus recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendReport {
    pub(crate) recommendations: Vec<RecommendationResult>,
    pub(crate) skipped: Vec<SkippedActivity>,
}

impl From<Screened<Vec<RecommendationResult>>> for RecommendReport {
    fn from(screened: Screened<Vec<RecommendationResult>>) -> Self {
        Self {
            recommendations: screened.value,
            skipped: skipped_activities(screened.skipped),
        }
    }
}

/// Write `report` as pretty JSON followed by a newline.
pub(crate) fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
