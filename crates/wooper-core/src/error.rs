//! Error types shared by the task model and date resolution.

use crate::task::TaskType;

/// Input problems the user can fix by re-entering the command.
///
/// Every operation that returns this error leaves the task list untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Task description is empty or whitespace only.
    #[error("please give the {0} a description")]
    BlankDescription(TaskType),

    /// Command needed a task number but none was given.
    #[error("task number is missing")]
    MissingIndex,

    /// Task number is not an integer.
    #[error("task number must be a valid integer, got '{0}'")]
    InvalidIndex(String),

    /// Task number does not address an existing task.
    #[error("choose a number from the task list")]
    IndexOutOfRange,

    /// Search keyword is empty or whitespace only.
    #[error("let me know which task you are trying to find")]
    BlankKeyword,

    /// Event start and end resolved to different temporal kinds.
    #[error("please give the same date format (DD/MM/YYYY or DD/MM/YYYY HH:mm) for both event start and end")]
    EventKindMismatch,

    /// Event start is not strictly before its end.
    #[error("event start must be before its end")]
    EventOutOfOrder,

    /// Update command is missing `/taskType`.
    #[error("please say which type of task to update with /taskType (todo, deadline or event)")]
    MissingTaskType,

    /// Update hint does not match the addressed task.
    #[error("that task is a {actual}, not '{hint}'")]
    TaskTypeMismatch {
        /// Actual type of the addressed task.
        actual: TaskType,
        /// Type hint supplied by the user.
        hint: String,
    },

    /// Update command carried no field to change.
    #[error("nothing to update, give at least one of /taskName, /by, /from or /to")]
    NothingToUpdate,

    /// Update touched a field the task type does not have.
    #[error("a {kind} has no /{field} to update")]
    FieldNotAllowed {
        /// Type of the addressed task.
        kind: TaskType,
        /// Offending flag name.
        field: &'static str,
    },

    /// Only one of the event bounds was supplied on update.
    #[error("event /from and /to must be updated together")]
    IncompleteEventRange,
}

/// Which command asked for a date, used to phrase the missing-date message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateContext {
    /// Due date of a deadline.
    Deadline,
    /// Start or end of an event.
    Event,
}

/// Date text that could not be resolved or rendered.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// No date text was supplied.
    #[error("{}", missing_message(*.0))]
    Missing(DateContext),

    /// Input matched neither accepted pattern.
    #[error("date must be DD/MM/YYYY or DD/MM/YYYY HH:mm, got '{input}'")]
    Unrecognized {
        /// Raw text supplied by the user.
        input: String,
    },

    /// Stored round-trip text could not be parsed back.
    #[error("'{input}' is not a valid stored date: {source}")]
    InvalidStored {
        /// Raw stored text.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: time::error::Parse,
    },

    /// Formatting an instant failed.
    #[error("failed to render date: {0}")]
    Render(#[from] time::error::Format),
}

const fn missing_message(context: DateContext) -> &'static str {
    match context {
        DateContext::Deadline => "please give a deadline",
        DateContext::Event => "please give the event's start and end",
    }
}
