//! Task service running input lines against the stored task list.

use thiserror::Error;
use tracing::{debug, info, warn};
use wooper_core::Task;

use crate::command::{CommandKind, ParsedCommand, parse, task_index};
use crate::task_manager::{TaskError, TaskManager};
use crate::task_patch::TaskUpdate;
use crate::task_store::TaskStore;

/// Errors surfaced by [`TaskService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The command was rejected; nothing changed.
    #[error(transparent)]
    Task(#[from] TaskError),
    /// Stored tasks could not be loaded at startup.
    #[error("error loading tasks: {0}")]
    Load(#[source] anyhow::Error),
    /// The change could not be persisted and was rolled back.
    #[error("failed to save tasks: {0}")]
    Save(#[source] anyhow::Error),
}

impl ServiceError {
    /// Whether the session can carry on with the next command.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Task(_))
    }
}

/// What a successfully executed command did, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every task, in order.
    Listed(Vec<Task>),
    /// Task after being marked done.
    Marked(Task),
    /// Task after being marked not done.
    Unmarked(Task),
    /// Newly appended task and the new list size.
    Added {
        /// Appended task.
        task: Task,
        /// Number of tasks after the addition.
        total: usize,
    },
    /// Removed task and the remaining list size.
    Deleted {
        /// Removed task.
        task: Task,
        /// Number of tasks after the removal.
        total: usize,
    },
    /// Tasks matching a keyword, in list order.
    Found(Vec<Task>),
    /// Task after an update.
    Updated(Task),
    /// The session should end.
    Exit,
    /// The line was not a known command.
    Unknown,
}

/// Service façade running one command line at a time against the task list.
///
/// Every successful change is written through to the store before the outcome
/// is returned. When the write fails the change is undone in memory.
pub struct TaskService<S> {
    store: S,
    manager: TaskManager,
}

impl<S> TaskService<S> {
    /// Current task list.
    #[must_use]
    pub const fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TaskStore> TaskService<S> {
    /// Load the stored tasks and start a service over them.
    ///
    /// # Errors
    /// Returns [`ServiceError::Load`] when the store cannot produce the tasks.
    pub fn open(store: S) -> Result<Self, ServiceError> {
        let tasks = store
            .load_tasks()
            .map_err(|err| ServiceError::Load(err.into()))?;
        info!(count = tasks.len(), "Task list ready");
        Ok(Self {
            store,
            manager: TaskManager::from_tasks(tasks),
        })
    }

    /// Parse and run one input line.
    ///
    /// # Errors
    /// Returns [`ServiceError::Task`] for rejected input and
    /// [`ServiceError::Save`] when a change could not be persisted.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, ServiceError> {
        let command = parse(line);
        debug!(kind = ?command.kind, "Executing command");
        if !command.kind.is_mutating() {
            return Ok(self.query(&command)?);
        }

        let previous = self.manager.clone();
        let outcome = self.apply(&command)?;
        if let Err(err) = self.store.save_tasks(self.manager.tasks()) {
            let err: anyhow::Error = err.into();
            warn!(error = %err, "Save failed, restoring previous task list");
            self.manager = previous;
            return Err(ServiceError::Save(err));
        }
        Ok(outcome)
    }

    fn query(&self, command: &ParsedCommand) -> Result<Outcome, TaskError> {
        let outcome = match command.kind {
            CommandKind::List => Outcome::Listed(self.manager.tasks().to_vec()),
            CommandKind::Find => {
                let found = self.manager.find(command.arg(0))?;
                Outcome::Found(found.into_iter().cloned().collect())
            }
            CommandKind::Bye => Outcome::Exit,
            _ => Outcome::Unknown,
        };
        Ok(outcome)
    }

    fn apply(&mut self, command: &ParsedCommand) -> Result<Outcome, TaskError> {
        let outcome = match command.kind {
            CommandKind::Mark => {
                let index = task_index(command.arg(0))?;
                Outcome::Marked(self.manager.mark_done(index)?.clone())
            }
            CommandKind::Unmark => {
                let index = task_index(command.arg(0))?;
                Outcome::Unmarked(self.manager.unmark_done(index)?.clone())
            }
            CommandKind::ToDo => {
                let task = self.manager.add_todo(command.arg(0))?.clone();
                self.added(task)
            }
            CommandKind::Deadline => {
                let task = self
                    .manager
                    .add_deadline(command.arg(0), command.arg(1))?
                    .clone();
                self.added(task)
            }
            CommandKind::Event => {
                let task = self
                    .manager
                    .add_event(command.arg(0), command.arg(1), command.arg(2))?
                    .clone();
                self.added(task)
            }
            CommandKind::Delete => {
                let index = task_index(command.arg(0))?;
                let task = self.manager.delete(index)?;
                Outcome::Deleted {
                    task,
                    total: self.manager.len(),
                }
            }
            CommandKind::Update => {
                let index = task_index(command.arg(0))?;
                let update = TaskUpdate::from_command(command);
                Outcome::Updated(self.manager.update(index, &update)?.clone())
            }
            _ => return self.query(command),
        };
        Ok(outcome)
    }

    const fn added(&self, task: Task) -> Outcome {
        Outcome::Added {
            task,
            total: self.manager.len(),
        }
    }
}
