//! Reply text for every command outcome.

use wooper_app::{Outcome, ServiceError};
use wooper_core::Task;

pub const GREETING: &str = "Woo-pah! I'm Wooper\nWhat can I do for you?\n\n\
                            Tell me your tasks and I can help you organise and track them!";
pub const FAREWELL: &str = "Woop Woop! Hope to see you again soon!";
const UNKNOWN: &str = "Wooooo-pah? I don't understand this command.";

/// Render the reply for a successful command.
#[must_use]
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Listed(tasks) if tasks.is_empty() => "Woop! Your task list is empty!".to_owned(),
        Outcome::Listed(tasks) => format!("Here are the tasks in your list:\n{}", numbered(tasks)),
        Outcome::Found(tasks) if tasks.is_empty() => "Woop! No matching tasks found.".to_owned(),
        Outcome::Found(tasks) => numbered(tasks),
        Outcome::Marked(task) => format!("Woo-pah! I've marked this task as done:\n{task}"),
        Outcome::Unmarked(task) => format!("OK, I've marked this task as not done yet:\n{task}"),
        Outcome::Added { task, total } => {
            format!("Got it. I've added this task:\n{task}\n{}", count_line(*total))
        }
        Outcome::Deleted { task, total } => {
            format!("Noted. I've removed this task:\n{task}\n{}", count_line(*total))
        }
        Outcome::Updated(task) => format!("Woo-pah! I've updated this task:\n{task}"),
        Outcome::Exit => FAREWELL.to_owned(),
        Outcome::Unknown => UNKNOWN.to_owned(),
    }
}

/// Render a rejected command.
#[must_use]
pub fn render_error(err: &ServiceError) -> String {
    format!("Woopsie! {}", capitalize(&err.to_string()))
}

fn numbered(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| format!(" {}. {task}", position + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_line(total: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("Now you have {total} {noun} in the list.")
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
