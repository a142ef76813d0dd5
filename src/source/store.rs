use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::record::RawAnimal;
use crate::transport::fs::{load_text, save_text};

/// On-disk dataset: the raw records of one lookup plus provenance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    /// Query that produced these records.
    pub query: String,
    /// When the records were fetched.
    pub fetched_at: DateTime<Utc>,
    /// Raw records exactly as delivered by the source.
    pub animals: Vec<RawAnimal>,
}

impl DatasetSnapshot {
    /// Build a snapshot stamped with the current time.
    pub fn new(query: impl Into<String>, animals: Vec<RawAnimal>) -> Self {
        Self {
            query: query.into(),
            fetched_at: Utc::now(),
            animals,
        }
    }
}

/// Whole-file JSON persistence for dataset snapshots.
///
/// The store holds only the path; it keeps no cached state, so every load
/// reflects the file as it currently is on disk.
#[derive(Clone, Debug)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Create a store for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot from disk.
    ///
    /// A missing file is reported as an unavailable source (the caller maps
    /// this to the empty-dataset path); invalid JSON is reported as a
    /// corrupted snapshot, both with the path attached.
    pub fn load(&self) -> Result<DatasetSnapshot, GeneratorError> {
        let text = load_text(&self.path).map_err(|err| match err {
            GeneratorError::FileRead { path, source } => GeneratorError::SourceUnavailable {
                source_id: "snapshot".to_string(),
                reason: format!("cannot read '{}': {source}", path.display()),
            },
            other => other,
        })?;
        let snapshot =
            serde_json::from_str(&text).map_err(|source| GeneratorError::InvalidSnapshot {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "loaded dataset snapshot");
        Ok(snapshot)
    }

    /// Save the snapshot to disk, fully replacing any prior content.
    pub fn save(&self, snapshot: &DatasetSnapshot) -> Result<(), GeneratorError> {
        let text = serde_json::to_string_pretty(snapshot).map_err(|source| {
            GeneratorError::InvalidSnapshot {
                path: self.path.clone(),
                source,
            }
        })?;
        save_text(&self.path, &text)?;
        debug!(
            path = %self.path.display(),
            animals = snapshot.animals.len(),
            "saved dataset snapshot"
        );
        Ok(())
    }
}
