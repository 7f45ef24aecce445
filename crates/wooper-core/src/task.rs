//! Task entity and its variants.

use std::fmt;

use crate::error::ValidationError;
use crate::instant::Instant;

/// Closed set of task types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Plain to-do without dates.
    ToDo,
    /// Task due at one instant.
    Deadline,
    /// Task spanning a start and end instant.
    Event,
}

impl TaskType {
    /// Name used in commands and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    /// Single-letter code used in the save file and list rendering.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ToDo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
        }
    }

    /// Look up a type by its single-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Self::ToDo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            _ => None,
        }
    }

    /// Look up a type by its name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "todo" => Some(Self::ToDo),
            "deadline" => Some(Self::Deadline),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific task data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// No temporal fields.
    ToDo,
    /// Single due instant.
    Deadline {
        /// When the task is due.
        by: Instant,
    },
    /// Span with matching kinds and `from < to`.
    Event {
        /// Start of the event.
        from: Instant,
        /// End of the event.
        to: Instant,
    },
}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a to-do.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankDescription`] for a blank description.
    pub fn todo(description: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_kind(description.into(), TaskKind::ToDo)
    }

    /// Create a deadline due at `by`.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankDescription`] for a blank description.
    pub fn deadline(description: impl Into<String>, by: Instant) -> Result<Self, ValidationError> {
        Self::with_kind(description.into(), TaskKind::Deadline { by })
    }

    /// Create an event spanning `from` to `to`.
    ///
    /// # Errors
    /// Returns [`ValidationError`] for a blank description, instants of different
    /// kinds, or a start that is not strictly before the end.
    pub fn event(
        description: impl Into<String>,
        from: Instant,
        to: Instant,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        ensure_description(&description, TaskType::Event)?;
        check_span(from, to)?;
        Ok(Self {
            description,
            done: false,
            kind: TaskKind::Event { from, to },
        })
    }

    fn with_kind(description: String, kind: TaskKind) -> Result<Self, ValidationError> {
        let task = Self {
            description,
            done: false,
            kind,
        };
        ensure_description(&task.description, task.task_type())?;
        Ok(task)
    }

    /// Copy of this task with the completion flag set.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task is completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Variant-specific data.
    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Type of this task.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::ToDo => TaskType::ToDo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }

    /// Set or clear the completion flag.
    pub const fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Replace the description.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankDescription`] and keeps the old description
    /// when `description` is blank.
    pub fn rename(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        let description = description.into();
        ensure_description(&description, self.task_type())?;
        self.description = description;
        Ok(())
    }

    /// Replace the due instant of a deadline.
    ///
    /// # Errors
    /// Returns [`ValidationError::FieldNotAllowed`] for tasks that are not deadlines.
    pub const fn set_due(&mut self, by: Instant) -> Result<(), ValidationError> {
        let kind = self.task_type();
        match &mut self.kind {
            TaskKind::Deadline { by: due } => {
                *due = by;
                Ok(())
            }
            TaskKind::ToDo | TaskKind::Event { .. } => {
                Err(ValidationError::FieldNotAllowed { kind, field: "by" })
            }
        }
    }

    /// Replace both bounds of an event. Neither bound changes on error.
    ///
    /// # Errors
    /// Returns [`ValidationError::FieldNotAllowed`] for tasks that are not events and
    /// the [`check_span`] errors for an invalid span.
    pub fn set_span(&mut self, from: Instant, to: Instant) -> Result<(), ValidationError> {
        let kind = self.task_type();
        match &mut self.kind {
            TaskKind::Event { from: start, to: end } => {
                check_span(from, to)?;
                *start = from;
                *end = to;
                Ok(())
            }
            TaskKind::ToDo | TaskKind::Deadline { .. } => {
                Err(ValidationError::FieldNotAllowed { kind, field: "from" })
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "X" } else { " " };
        write!(f, "[{}][{mark}] {}", self.task_type().code(), self.description)?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {by})"),
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}

/// Validate an event span: same temporal kind and strictly increasing.
///
/// # Errors
/// Returns [`ValidationError::EventKindMismatch`] or [`ValidationError::EventOutOfOrder`].
pub fn check_span(from: Instant, to: Instant) -> Result<(), ValidationError> {
    if from.kind() != to.kind() {
        return Err(ValidationError::EventKindMismatch);
    }
    if from < to {
        Ok(())
    } else {
        Err(ValidationError::EventOutOfOrder)
    }
}

/// Reject a blank description for a task of type `kind`.
///
/// # Errors
/// Returns [`ValidationError::BlankDescription`] when `description` is blank.
pub fn ensure_description(description: &str, kind: TaskType) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        Err(ValidationError::BlankDescription(kind))
    } else {
        Ok(())
    }
}
