//! Update request built from the arguments of a parsed command.

use crate::command::ParsedCommand;

/// Field changes requested by an `update` command.
///
/// Every field holds raw user text; an empty string means "leave unchanged".
/// Dates are resolved by the task manager when the update is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Expected type of the addressed task (`todo`, `deadline` or `event`).
    pub task_type: String,
    /// New description.
    pub name: String,
    /// New due date of a deadline.
    pub by: String,
    /// New event start.
    pub from: String,
    /// New event end.
    pub to: String,
}

impl TaskUpdate {
    /// Build an update from the arguments of a parsed `update` command.
    ///
    /// The leading task number is not part of the update and is skipped.
    #[must_use]
    pub fn from_command(command: &ParsedCommand) -> Self {
        Self {
            task_type: command.arg(1).to_owned(),
            name: command.arg(2).to_owned(),
            by: command.arg(3).to_owned(),
            from: command.arg(4).to_owned(),
            to: command.arg(5).to_owned(),
        }
    }

    /// Returns true when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.by, &self.from, &self.to]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}
