//! Ordered task collection and the operations that change it.

use thiserror::Error;
use wooper_core::{
    DateContext, DateError, Instant, Task, TaskType, TextMatcher, ValidationError, ensure_description,
};

use crate::task_patch::TaskUpdate;

/// Errors raised by [`TaskManager`] operations.
///
/// Both variants are user-correctable and leave the collection unchanged.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input failed a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Date text could not be resolved.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Owns the task list. Indices taken by the operations are 0-based.
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Collection hydrated from previously stored tasks, in order.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection holds no task.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a to-do.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankDescription`] for a blank description.
    pub fn add_todo(&mut self, description: &str) -> Result<&Task, TaskError> {
        let task = Task::todo(description.trim())?;
        Ok(self.push(task))
    }

    /// Append a deadline due at `by`.
    ///
    /// The description is checked before the date is resolved.
    ///
    /// # Errors
    /// Returns a validation error for a blank description and a [`DateError`]
    /// for missing or malformed date text.
    pub fn add_deadline(&mut self, description: &str, by: &str) -> Result<&Task, TaskError> {
        ensure_description(description, TaskType::Deadline)?;
        let by = Instant::resolve(by, DateContext::Deadline)?;
        let task = Task::deadline(description.trim(), by)?;
        Ok(self.push(task))
    }

    /// Append an event spanning `from` to `to`.
    ///
    /// # Errors
    /// Returns a validation error for a blank description, bounds of different
    /// kinds or a start not before the end, and a [`DateError`] for missing or
    /// malformed date text.
    pub fn add_event(&mut self, description: &str, from: &str, to: &str) -> Result<&Task, TaskError> {
        ensure_description(description, TaskType::Event)?;
        let from = Instant::resolve(from, DateContext::Event)?;
        let to = Instant::resolve(to, DateContext::Event)?;
        let task = Task::event(description.trim(), from, to)?;
        Ok(self.push(task))
    }

    /// Mark the task at `index` as done. Marking a done task again is allowed.
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] for a bad index.
    pub fn mark_done(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.set_done(index, true)
    }

    /// Mark the task at `index` as not done.
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] for a bad index.
    pub fn unmark_done(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.set_done(index, false)
    }

    /// Remove and return the task at `index`. Later tasks shift down by one.
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] for a bad index.
    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        if index >= self.tasks.len() {
            return Err(ValidationError::IndexOutOfRange.into());
        }
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `keyword`, ignoring case, in list order.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankKeyword`] for a blank keyword.
    pub fn find(&self, keyword: &str) -> Result<Vec<&Task>, TaskError> {
        let matcher = TextMatcher::new(keyword).ok_or(ValidationError::BlankKeyword)?;
        Ok(self.tasks.iter().filter(|task| matcher.matches(task)).collect())
    }

    /// Apply `update` to the task at `index`.
    ///
    /// The type hint must name the task's actual type. To-dos accept only a new
    /// name. Deadlines accept a name and `by`. Events accept a name and a
    /// `from`/`to` pair, which replaces both bounds after the usual span checks.
    /// Changes are applied to a copy and swapped in only when all succeed.
    ///
    /// # Errors
    /// Returns a validation error for a bad index, a missing or wrong type hint,
    /// an empty update or a field the task type does not have, and a
    /// [`DateError`] for malformed date text.
    pub fn update(&mut self, index: usize, update: &TaskUpdate) -> Result<&Task, TaskError> {
        let current = self.tasks.get(index).ok_or(ValidationError::IndexOutOfRange)?;
        let actual = current.task_type();

        let hint = update.task_type.trim();
        if hint.is_empty() {
            return Err(ValidationError::MissingTaskType.into());
        }
        if TaskType::from_name(hint) != Some(actual) {
            return Err(ValidationError::TaskTypeMismatch {
                actual,
                hint: hint.to_owned(),
            }
            .into());
        }
        if update.is_empty() {
            return Err(ValidationError::NothingToUpdate.into());
        }

        let mut task = current.clone();
        apply_update(&mut task, update)?;
        self.tasks[index] = task;
        Ok(&self.tasks[index])
    }

    fn set_done(&mut self, index: usize, done: bool) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange)?;
        task.set_done(done);
        Ok(&*task)
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }
}

fn apply_update(task: &mut Task, update: &TaskUpdate) -> Result<(), TaskError> {
    let kind = task.task_type();
    let by = update.by.trim();
    let from = update.from.trim();
    let to = update.to.trim();

    match kind {
        TaskType::ToDo => {
            if let Some(field) = first_present([("by", by), ("from", from), ("to", to)]) {
                return Err(ValidationError::FieldNotAllowed { kind, field }.into());
            }
        }
        TaskType::Deadline => {
            if let Some(field) = first_present([("from", from), ("to", to)]) {
                return Err(ValidationError::FieldNotAllowed { kind, field }.into());
            }
            if !by.is_empty() {
                task.set_due(Instant::resolve(by, DateContext::Deadline)?)?;
            }
        }
        TaskType::Event => {
            if !by.is_empty() {
                return Err(ValidationError::FieldNotAllowed { kind, field: "by" }.into());
            }
            match (from.is_empty(), to.is_empty()) {
                (true, true) => {}
                (false, false) => {
                    let from = Instant::resolve(from, DateContext::Event)?;
                    let to = Instant::resolve(to, DateContext::Event)?;
                    task.set_span(from, to)?;
                }
                _ => return Err(ValidationError::IncompleteEventRange.into()),
            }
        }
    }

    let name = update.name.trim();
    if !name.is_empty() {
        task.rename(name)?;
    }
    Ok(())
}

fn first_present<const N: usize>(fields: [(&'static str, &str); N]) -> Option<&'static str> {
    fields
        .into_iter()
        .find(|(_, value)| !value.is_empty())
        .map(|(field, _)| field)
}
