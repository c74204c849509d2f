//! Local round-history persistence.
//!
//! Completed rounds are appended to a single JSONL file; each line is one
//! [`crate::models::HistoryRecord`]. The scoring core never touches this
//! layer; it only produces the values the caller chooses to persist.

mod history;

pub use history::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the completed-rounds file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
