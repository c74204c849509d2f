//! Append-only JSONL store of completed rounds.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::models::HistoryRecord;

use super::{StorageConfig, StorageError};

/// Round-history file access.
///
/// One record is appended per finished round; existing lines are never
/// rewritten. Reads skip corrupt lines with a warning.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured history path.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.history_path())
    }

    /// Whether the history file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append one completed round.
    pub fn append(&self, record: &HistoryRecord) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended round to {:?}", self.path);
        Ok(())
    }

    /// Read all stored rounds, oldest first.
    pub fn read_all(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} rounds from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// The most recently completed round, if any.
    pub fn latest(&self) -> Result<Option<HistoryRecord>, StorageError> {
        let mut records = self.read_all()?;
        records.sort_by_key(|r| r.completed_at);
        Ok(records.pop())
    }

    /// Number of stored rounds.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read_all()?.len())
    }
}
