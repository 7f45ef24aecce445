//! Storage seam used by [`TaskService`](crate::service::TaskService).

use anyhow::Error;
use wooper_core::Task;
use wooper_store_file::{FileStore, StoreError};

/// Minimal storage abstraction required by the task service.
///
/// The whole collection is read once at startup and written back in full
/// after every change.
pub trait TaskStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Load every stored task in order.
    ///
    /// # Errors
    /// Returns a store-specific error when the tasks cannot be read.
    fn load_tasks(&self) -> Result<Vec<Task>, Self::Error>;

    /// Replace the stored tasks with `tasks`.
    ///
    /// # Errors
    /// Returns a store-specific error when persisting fails.
    fn save_tasks(&self, tasks: &[Task]) -> Result<(), Self::Error>;
}

impl TaskStore for FileStore {
    type Error = StoreError;

    fn load_tasks(&self) -> Result<Vec<Task>, Self::Error> {
        self.load()
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        self.save(tasks)
    }
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    type Error = S::Error;

    fn load_tasks(&self) -> Result<Vec<Task>, Self::Error> {
        (**self).load_tasks()
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        (**self).save_tasks(tasks)
    }
}
