//! Core types for the playback file queue

use crate::error::{QueueError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A media record from the metadata repository
///
/// This is the external contract for bulk loading: the repository hands the
/// queue a batch of these, typically deserialized from its JSON media lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Base directory of the data source holding the file
    #[serde(rename = "data_source_path")]
    pub source_path: String,

    /// Location of the file relative to the data source
    #[serde(rename = "path")]
    pub relative_path: String,

    /// Metadata record identifier
    pub id: i64,
}

/// One media file waiting in the playback queue
///
/// Entries are opaque to the queue: a resolved filesystem location plus the
/// identifier of the metadata record it came from, nothing format-aware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Resolved file path for playback
    pub path: PathBuf,

    /// Originating metadata record, if any
    pub source_id: Option<i64>,
}

impl QueueEntry {
    /// Create an entry from a resolved path
    pub fn new(path: impl Into<PathBuf>, source_id: Option<i64>) -> Self {
        Self {
            path: path.into(),
            source_id,
        }
    }

    /// Resolve a metadata record into an entry
    ///
    /// The source directory and relative path are joined with exactly one
    /// `/`. A record with an empty relative path does not name a file and is
    /// rejected.
    pub fn from_record(record: &MediaRecord) -> Result<Self> {
        let dir = record.source_path.trim_end_matches('/');
        let rel = record.relative_path.trim_start_matches('/');
        if rel.is_empty() {
            return Err(QueueError::InvalidRecord(format!(
                "record {} has an empty relative path",
                record.id
            )));
        }

        Ok(Self {
            path: PathBuf::from(format!("{}/{}", dir, rel)),
            source_id: Some(record.id),
        })
    }
}

/// Configuration for the playback queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of entries held at once (default: unbounded)
    ///
    /// When the bound is reached, append and insert report
    /// [`QueueError::CapacityExceeded`] so callers can apply backpressure.
    pub max_entries: Option<usize>,
}
