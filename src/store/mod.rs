//! Persists the most recently created meeting to a local JSON file.
//!
//! The file is a single snapshot, fully overwritten on every save. It
//! is never read back by this program.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::zoom::Meeting;

pub const DEFAULT_STORE_PATH: &str = "meeting_info.json";

/// Subset of a meeting worth keeping after the process exits.
#[derive(Debug, Serialize)]
struct StoredMeeting<'a> {
    meeting_id: u64,
    join_url: &'a str,
    start_time: &'a str,
}

pub struct MeetingStore {
    path: PathBuf,
}

impl MeetingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the store with the given meeting's id, join URL, and
    /// start time as indented JSON.
    pub fn save_last_created(&self, meeting: &Meeting) -> Result<()> {
        let snapshot = StoredMeeting {
            meeting_id: meeting.id,
            join_url: &meeting.join_url,
            start_time: &meeting.start_time,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create store directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize meeting info")?;

        std::fs::write(&self.path, content).context("Failed to write meeting info file")?;

        info!("Saved meeting details to {:?}", self.path);
        Ok(())
    }
}

impl Default for MeetingStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}
