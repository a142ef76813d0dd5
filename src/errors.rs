use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for record normalization, rendering, assembly, and source failures.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The record has neither a taxonomy nor a characteristics substructure.
    #[error("record '{record}' has neither taxonomy nor characteristics")]
    MalformedRecord {
        /// Record name when present, otherwise the dataset position.
        record: String,
    },
    /// A record selected for display cannot be titled.
    #[error("record at position {position} has no name and cannot be rendered")]
    UntitledRecord {
        /// Zero-based position within the selected sequence.
        position: usize,
    },
    /// The template does not contain the substitution marker.
    #[error("template does not contain placeholder '{placeholder}'")]
    PlaceholderMissing {
        /// The marker that was expected.
        placeholder: &'static str,
    },
    /// The destination re-read does not match what was just written.
    #[error("saved document '{path}' does not match the generated content")]
    SaveVerification {
        /// Destination path that failed verification.
        path: PathBuf,
    },
    /// An animal source could not produce records.
    #[error("animal source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Identifier of the failing source.
        source_id: SourceId,
        /// Human-readable failure cause.
        reason: String,
    },
    /// The dataset snapshot file is not valid JSON.
    #[error("dataset snapshot '{path}' is corrupted")]
    InvalidSnapshot {
        /// Snapshot path that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// A file could not be read.
    #[error("failed reading '{path}'")]
    FileRead {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A file could not be written.
    #[error("failed writing '{path}'")]
    FileWrite {
        /// Path that failed to save.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Runtime configuration is incomplete or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
}
