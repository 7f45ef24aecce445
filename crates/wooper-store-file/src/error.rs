//! Error types for save file operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use wooper_core::DateError;

/// Errors that can occur during `FileStore` operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Save file content cannot be turned back into tasks.
    #[error("save file is corrupted ({0})")]
    Corrupted(Corruption),

    /// Reading the save file failed.
    #[error("failed to read save file {}: {source}", .path.display())]
    Read {
        /// Location of the save file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the save file failed.
    #[error("failed to write save file {}: {source}", .path.display())]
    Write {
        /// Location of the save file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A task date could not be rendered for storage.
    #[error("failed to encode task date: {0}")]
    Render(#[from] DateError),

    /// Records could not be serialized.
    #[error("failed to encode tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the error stems from damaged save file content rather than I/O.
    #[must_use]
    pub const fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted(_))
    }
}

/// Reason a save file was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// Content is not an array of records.
    #[error("invalid structure")]
    InvalidStructure,
    /// Record has a blank or absent `desc`.
    #[error("missing description")]
    MissingDescription,
    /// Deadline record has a blank or absent `by`.
    #[error("missing deadline")]
    MissingDeadline,
    /// Event record has a blank or absent `from` or `to`.
    #[error("missing event time")]
    MissingEventTime,
    /// Event bounds infer to different temporal kinds.
    #[error("event time format mismatch")]
    EventTimeMismatch,
    /// Event start is not before its end.
    #[error("event ends before it starts")]
    EventOutOfOrder,
    /// Record `type` is not `T`, `D` or `E`.
    #[error("unknown task type")]
    UnknownTaskType,
    /// Stored date text does not parse.
    #[error("invalid date")]
    InvalidDate,
}

impl From<Corruption> for StoreError {
    fn from(reason: Corruption) -> Self {
        Self::Corrupted(reason)
    }
}
