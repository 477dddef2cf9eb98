//! Temporary workspaces and request fixtures for CLI tests.

use std::time::{Duration, SystemTime};

use camino::Utf8PathBuf;
use campus_core::{Activity, InteractionMatrix, RecommendationRequest, UserPreference};
use serde::Serialize;
use tempfile::TempDir;

const DAY: Duration = Duration::from_secs(86_400);

/// Scratch directory holding input files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub(super) fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Utf8PathBuf {
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        self.write(name, &payload)
    }
}

/// Activity starting `days` days from the real current time.
pub(super) fn upcoming(
    id: u64,
    category_id: u32,
    max_participants: u32,
    current_participants: u32,
    days: u32,
) -> Activity {
    Activity::new(
        id,
        category_id,
        max_participants,
        current_participants,
        SystemTime::now() + DAY * days,
    )
}

/// Request for user 1 who likes category 1 and shares history with user 2.
pub(super) fn sample_request() -> RecommendationRequest {
    RecommendationRequest::new(
        1,
        vec![
            upcoming(1, 1, 100, 50, 3).with_title("Chess tournament"),
            upcoming(2, 2, 10, 10, 3).with_title("Jazz evening"),
            upcoming(3, 1, 20, 2, 5).with_title("Chess lessons"),
        ],
    )
    .with_preferences(vec![UserPreference::new(1, 1, 0.8)])
    .with_interactions(InteractionMatrix::from([
        (1, [1].into()),
        (2, [1, 3].into()),
    ]))
}
