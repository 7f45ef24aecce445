//! Line parser turning raw input into a command tag and its arguments.
//!
//! Parsing never fails. Missing pieces come back as empty strings and are
//! rejected later by the task manager, which owns every user-facing message.

use wooper_core::ValidationError;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

/// Flags recognised by `update`, in output order after the task index.
const UPDATE_FLAGS: [&str; 5] = ["taskType", "taskName", "by", "from", "to"];

/// Command tag parsed from the first word of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Show every task.
    List,
    /// Mark a task as done.
    Mark,
    /// Mark a task as not done.
    Unmark,
    /// Add a to-do.
    ToDo,
    /// Add a deadline.
    Deadline,
    /// Add an event.
    Event,
    /// Remove a task.
    Delete,
    /// Search descriptions.
    Find,
    /// Change fields of a task.
    Update,
    /// End the session.
    Bye,
    /// Anything else, including a blank line.
    Unknown,
}

impl CommandKind {
    fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "list" => Self::List,
            "mark" => Self::Mark,
            "unmark" => Self::Unmark,
            "todo" => Self::ToDo,
            "deadline" => Self::Deadline,
            "event" => Self::Event,
            "delete" => Self::Delete,
            "find" => Self::Find,
            "update" => Self::Update,
            "bye" => Self::Bye,
            _ => Self::Unknown,
        }
    }

    /// Whether a successful run of this command changes the task list.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Mark
                | Self::Unmark
                | Self::ToDo
                | Self::Deadline
                | Self::Event
                | Self::Delete
                | Self::Update
        )
    }
}

/// Result of [`parse`]: a tag plus its positional arguments.
///
/// Argument layout per tag:
/// - `mark`, `unmark`, `delete`, `find`, `todo`: `[rest]`
/// - `deadline`: `[description, by]`
/// - `event`: `[description, from, to]`
/// - `update`: `[index, taskType, taskName, by, from, to]`
/// - `list`, `bye`, `unknown`: `[]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command tag.
    pub kind: CommandKind,
    /// Positional arguments.
    pub args: Vec<String>,
}

impl ParsedCommand {
    fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// Argument at `position`, or `""` when absent.
    #[must_use]
    pub fn arg(&self, position: usize) -> &str {
        self.args.get(position).map_or("", String::as_str)
    }
}

/// Parse one input line.
#[must_use]
pub fn parse(line: &str) -> ParsedCommand {
    let line = line.trim();
    if line.is_empty() {
        return ParsedCommand::new(CommandKind::Unknown, Vec::new());
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let kind = CommandKind::from_word(word);

    let args = match kind {
        CommandKind::Mark
        | CommandKind::Unmark
        | CommandKind::ToDo
        | CommandKind::Delete
        | CommandKind::Find => vec![rest.to_owned()],
        CommandKind::Deadline => split_deadline(rest),
        CommandKind::Event => split_event(rest),
        CommandKind::Update => split_update(rest),
        CommandKind::List | CommandKind::Bye | CommandKind::Unknown => Vec::new(),
    };
    ParsedCommand::new(kind, args)
}

fn split_deadline(rest: &str) -> Vec<String> {
    let lower = rest.to_ascii_lowercase();
    match lower.find(BY) {
        Some(at) => owned([&rest[..at], &rest[at + BY.len()..]]),
        None => owned([rest, ""]),
    }
}

fn split_event(rest: &str) -> Vec<String> {
    let lower = rest.to_ascii_lowercase();
    match (lower.find(FROM), lower.find(TO)) {
        (Some(from), Some(to)) if to >= from + FROM.len() => owned([
            &rest[..from],
            &rest[from + FROM.len()..to],
            &rest[to + TO.len()..],
        ]),
        _ => owned([rest, "", ""]),
    }
}

fn split_update(rest: &str) -> Vec<String> {
    let (index, flags) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    let mut values: [Option<&str>; 5] = [None; 5];
    let padded = format!(" {flags}");
    for segment in padded.split(" /").skip(1) {
        let (flag, value) = segment.split_once(char::is_whitespace).unwrap_or((segment, ""));
        if let Some(slot) = UPDATE_FLAGS
            .iter()
            .position(|known| known.eq_ignore_ascii_case(flag))
        {
            values[slot].get_or_insert(value);
        }
    }

    let mut args = vec![index.trim().to_owned()];
    args.extend(values.iter().map(|value| value.unwrap_or("").trim().to_owned()));
    args
}

fn owned<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|part| part.trim().to_owned()).collect()
}

/// Convert a user-facing 1-based task number into a 0-based index.
///
/// Range checking against the list is left to the task manager; numbers below 1
/// are already out of range here.
///
/// # Errors
/// Returns [`ValidationError::MissingIndex`] for blank input,
/// [`ValidationError::InvalidIndex`] for non-integers and
/// [`ValidationError::IndexOutOfRange`] for numbers below 1.
pub fn task_index(arg: &str) -> Result<usize, ValidationError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(ValidationError::MissingIndex);
    }
    let number: i64 = arg
        .parse()
        .map_err(|_| ValidationError::InvalidIndex(arg.to_owned()))?;
    usize::try_from(number)
        .ok()
        .and_then(|number| number.checked_sub(1))
        .ok_or(ValidationError::IndexOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parsed: &ParsedCommand) -> Vec<&str> {
        parsed.args.iter().map(String::as_str).collect()
    }

    #[test]
    fn blank_and_unknown_lines_have_no_arguments() {
        for line in ["", "   ", "\t\n", "hello there", "lists"] {
            let parsed = parse(line);
            assert_eq!(parsed.kind, CommandKind::Unknown, "{line:?}");
            assert!(parsed.args.is_empty(), "{line:?}");
        }
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(parse("LIST").kind, CommandKind::List);
        assert_eq!(parse("  ByE  ").kind, CommandKind::Bye);
        assert_eq!(parse("Todo read").kind, CommandKind::ToDo);
    }

    #[test]
    fn single_argument_commands_pass_rest_through() {
        let parsed = parse("mark 1");
        assert_eq!(parsed.kind, CommandKind::Mark);
        assert_eq!(args(&parsed), ["1"]);

        assert_eq!(args(&parse("unmark   2 ")), ["2"]);
        assert_eq!(args(&parse("delete")), [""]);
        assert_eq!(args(&parse("find   Book club ")), ["Book club"]);
        assert_eq!(args(&parse("todo read  the book")), ["read  the book"]);
        assert_eq!(args(&parse("todo")), [""]);
    }

    #[test]
    fn deadline_splits_on_first_by_marker() {
        let parsed = parse("deadline return book /by 06/06/2026");
        assert_eq!(parsed.kind, CommandKind::Deadline);
        assert_eq!(args(&parsed), ["return book", "06/06/2026"]);

        assert_eq!(args(&parse("deadline submit /BY 01/02/2026 10:00")), ["submit", "01/02/2026 10:00"]);
        assert_eq!(args(&parse("deadline a /by b /by c")), ["a", "b /by c"]);
        assert_eq!(args(&parse("deadline return book")), ["return book", ""]);
        assert_eq!(args(&parse("deadline /by 06/06/2026")), ["", "06/06/2026"]);
    }

    #[test]
    fn event_splits_on_from_and_to() {
        let parsed = parse("event project meeting /from 06/08/2026 14:00 /to 06/08/2026 16:00");
        assert_eq!(parsed.kind, CommandKind::Event);
        assert_eq!(
            args(&parsed),
            ["project meeting", "06/08/2026 14:00", "06/08/2026 16:00"]
        );
        assert_eq!(args(&parse("event camp /FROM 01/07/2026 /To 03/07/2026")), ["camp", "01/07/2026", "03/07/2026"]);
    }

    #[test]
    fn event_degrades_when_markers_are_missing_or_reversed() {
        assert_eq!(args(&parse("event camp /from 01/07/2026")), ["camp /from 01/07/2026", "", ""]);
        assert_eq!(args(&parse("event camp /to 03/07/2026")), ["camp /to 03/07/2026", "", ""]);
        assert_eq!(
            args(&parse("event camp /to 03/07/2026 /from 01/07/2026")),
            ["camp /to 03/07/2026 /from 01/07/2026", "", ""]
        );
        assert_eq!(args(&parse("event")), ["", "", ""]);
    }

    #[test]
    fn update_fills_six_fixed_slots() {
        let parsed = parse("update 1 /taskType todo /taskName newName");
        assert_eq!(parsed.kind, CommandKind::Update);
        assert_eq!(args(&parsed), ["1", "todo", "newName", "", "", ""]);

        assert_eq!(
            args(&parse("update 3 /from 01/07/2026 10:00 /to 01/07/2026 12:00 /tasktype EVENT")),
            ["3", "EVENT", "", "", "01/07/2026 10:00", "01/07/2026 12:00"]
        );
        assert_eq!(
            args(&parse("update 2 /taskType deadline /taskName write report /by 07/06/2026")),
            ["2", "deadline", "write report", "07/06/2026", "", ""]
        );
    }

    #[test]
    fn update_flag_without_value_is_empty() {
        assert_eq!(
            args(&parse("update 1 /taskType /taskName x")),
            ["1", "", "x", "", "", ""]
        );
        assert_eq!(args(&parse("update")), ["", "", "", "", "", ""]);
        assert_eq!(args(&parse("update 4")), ["4", "", "", "", "", ""]);
    }

    #[test]
    fn update_keeps_first_occurrence_and_ignores_unknown_flags() {
        assert_eq!(
            args(&parse("update 1 /taskType todo /taskName a /colour red /taskName b")),
            ["1", "todo", "a", "", "", ""]
        );
    }

    #[test]
    fn mutating_commands_are_flagged() {
        assert!(CommandKind::Update.is_mutating());
        assert!(CommandKind::Unmark.is_mutating());
        assert!(!CommandKind::Find.is_mutating());
        assert!(!CommandKind::List.is_mutating());
        assert!(!CommandKind::Bye.is_mutating());
    }

    #[test]
    fn task_index_converts_one_based_numbers() {
        assert_eq!(task_index("1"), Ok(0));
        assert_eq!(task_index(" 12 "), Ok(11));
        assert_eq!(task_index(""), Err(ValidationError::MissingIndex));
        assert_eq!(task_index("0"), Err(ValidationError::IndexOutOfRange));
        assert_eq!(task_index("-3"), Err(ValidationError::IndexOutOfRange));
        assert_eq!(task_index("two"), Err(ValidationError::InvalidIndex("two".into())));
        assert_eq!(task_index("1.5"), Err(ValidationError::InvalidIndex("1.5".into())));
    }
}
