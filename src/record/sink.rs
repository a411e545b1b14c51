//! Destinations for finished games

use super::{GameRecord, Statistics};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while persisting game records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to access result store {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("result store {} is not valid JSON", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Receives each game once it has finished
pub trait ResultSink {
    /// Persist or collect `record`
    ///
    /// # Errors
    /// Returns [`SinkError`] if the record cannot be stored.
    fn record(&mut self, record: &GameRecord) -> Result<(), SinkError>;
}

/// Keeps records in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<GameRecord>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<GameRecord> {
        self.records
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, record: &GameRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// On-disk layout of a [`JsonStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub games_played: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    #[serde(default)]
    pub history: Vec<GameRecord>,
}

impl StoreDocument {
    fn push(&mut self, record: &GameRecord) {
        self.games_played += 1;
        if record.won {
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.history.push(record.clone());
    }
}

/// Game history kept in a JSON file
///
/// The file is created on the first recorded game. Every write goes to a
/// sibling temporary file that then replaces the store, so a crash never
/// leaves a half-written document behind.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    /// Returns [`SinkError`] if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        let document: StoreDocument = match File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                SinkError::Format {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "result store not found, starting empty");
                StoreDocument::default()
            }
            Err(source) => return Err(SinkError::Io { path, source }),
        };

        Ok(Self { path, document })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn document(&self) -> &StoreDocument {
        &self.document
    }

    #[must_use]
    pub fn history(&self) -> &[GameRecord] {
        &self.document.history
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_records(&self.document.history)
    }

    fn save(&self, document: &StoreDocument) -> Result<(), SinkError> {
        let io_error = |source| SinkError::Io {
            path: self.path.clone(),
            source,
        };

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        let mut writer = BufWriter::new(File::create(&staging).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
            SinkError::Format {
                path: staging.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)?;
        drop(writer);

        fs::rename(&staging, &self.path).map_err(io_error)?;
        debug!(path = %self.path.display(), games = document.games_played, "result store saved");
        Ok(())
    }
}

impl ResultSink for JsonStore {
    fn record(&mut self, record: &GameRecord) -> Result<(), SinkError> {
        let mut updated = self.document.clone();
        updated.push(record);
        self.save(&updated)?;
        self.document = updated;
        Ok(())
    }
}
