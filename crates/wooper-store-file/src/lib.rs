//! JSON save file storage for wooper.

mod error;
mod record;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use wooper_core::Task;

pub use error::{Corruption, StoreError};
pub use record::{TaskRecord, decode_tasks, encode_tasks};

/// Save file location used when nothing else is configured.
pub const DEFAULT_SAVE_PATH: &str = "data/wooper.json";

/// Storage keeping the whole task list in one JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

impl FileStore {
    /// Storage backed by the file at `path`. Nothing is touched until load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the save file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every task from the save file.
    ///
    /// A missing or blank file yields an empty list.
    ///
    /// # Errors
    /// Returns [`StoreError::Read`] when the file cannot be read and
    /// [`StoreError::Corrupted`] when any part of it is damaged.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No save file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tasks = decode_tasks(&content)?;
        info!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Replace the save file with a snapshot of `tasks`.
    ///
    /// The parent directory is created when missing. Content goes to a temporary
    /// file next to the target which is then renamed over it, so readers see
    /// either the previous snapshot or the new one.
    ///
    /// # Errors
    /// Returns [`StoreError::Write`] on I/O failure, or an encoding error.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = encode_tasks(tasks)?;
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|source| self.write_error(source))?;
        file.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;

        debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
