//! Save file record shape and conversion to and from tasks.

use serde::{Deserialize, Serialize};
use tracing::warn;
use wooper_core::instant::is_stored_date_time;
use wooper_core::{Instant, Task, TaskKind, TaskType, ValidationError};

use crate::error::{Corruption, StoreError};

/// One task as it appears in the save file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    /// `T`, `D` or `E`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Task description.
    #[serde(default)]
    pub desc: Option<String>,
    /// Completion flag, false when absent.
    #[serde(default)]
    pub done: Option<bool>,
    /// Deadline due instant in stored form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// Event start in stored form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Event end in stored form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl TaskRecord {
    /// Build the record for a task.
    ///
    /// # Errors
    /// Returns [`StoreError::Render`] if a date cannot be rendered.
    pub fn from_task(task: &Task) -> Result<Self, StoreError> {
        let mut record = Self {
            kind: Some(task.task_type().code().to_owned()),
            desc: Some(task.description().to_owned()),
            done: Some(task.is_done()),
            ..Self::default()
        };
        match task.kind() {
            TaskKind::ToDo => {}
            TaskKind::Deadline { by } => {
                record.by = Some(by.to_stored()?);
            }
            TaskKind::Event { from, to } => {
                record.from = Some(from.to_stored()?);
                record.to = Some(to.to_stored()?);
            }
        }
        Ok(record)
    }

    /// Rebuild the task described by this record.
    ///
    /// # Errors
    /// Returns the [`Corruption`] that makes the record unusable.
    pub fn into_task(self) -> Result<Task, Corruption> {
        let desc = non_blank(self.desc).ok_or(Corruption::MissingDescription)?;
        let kind = self
            .kind
            .as_deref()
            .and_then(TaskType::from_code)
            .ok_or(Corruption::UnknownTaskType)?;

        let task = match kind {
            TaskType::ToDo => Task::todo(desc),
            TaskType::Deadline => {
                let by = non_blank(self.by).ok_or(Corruption::MissingDeadline)?;
                Task::deadline(desc, stored_instant(&by)?)
            }
            TaskType::Event => {
                let (Some(from), Some(to)) = (non_blank(self.from), non_blank(self.to)) else {
                    return Err(Corruption::MissingEventTime);
                };
                if is_stored_date_time(&from) != is_stored_date_time(&to) {
                    return Err(Corruption::EventTimeMismatch);
                }
                Task::event(desc, stored_instant(&from)?, stored_instant(&to)?)
            }
        };

        task.map(|task| task.with_done(self.done.unwrap_or(false)))
            .map_err(|err| match err {
                ValidationError::EventKindMismatch => Corruption::EventTimeMismatch,
                ValidationError::EventOutOfOrder => Corruption::EventOutOfOrder,
                _ => Corruption::MissingDescription,
            })
    }
}

/// Decode save file content. Blank content decodes to an empty list.
///
/// Any corrupt record rejects the whole file.
///
/// # Errors
/// Returns [`StoreError::Corrupted`] for malformed content or records.
pub fn decode_tasks(content: &str) -> Result<Vec<Task>, StoreError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<TaskRecord> = serde_json::from_str(content).map_err(|err| {
        warn!(error = %err, "Save file is not an array of task records");
        Corruption::InvalidStructure
    })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record.into_task().map_err(|reason| {
                warn!(record = index + 1, %reason, "Rejecting corrupted save file");
                StoreError::Corrupted(reason)
            })
        })
        .collect()
}

/// Encode tasks, in order, as pretty-printed JSON.
///
/// # Errors
/// Returns [`StoreError`] if a task cannot be encoded.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StoreError> {
    let records = tasks
        .iter()
        .map(TaskRecord::from_task)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string_pretty(&records)?)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn stored_instant(text: &str) -> Result<Instant, Corruption> {
    Instant::from_stored(text).map_err(|_| Corruption::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wooper_core::{DateContext, InstantKind};

    fn decode_err(content: &str) -> Corruption {
        match decode_tasks(content) {
            Err(StoreError::Corrupted(reason)) => reason,
            other => panic!("expected corruption for {content}, got {other:?}"),
        }
    }

    #[test]
    fn blank_content_is_an_empty_list() {
        assert!(decode_tasks("").unwrap_or_else(|err| panic!("{err}")).is_empty());
        assert!(decode_tasks(" \n\t").unwrap_or_else(|err| panic!("{err}")).is_empty());
        assert!(decode_tasks("[]").unwrap_or_else(|err| panic!("{err}")).is_empty());
    }

    #[test]
    fn non_array_payloads_are_invalid_structure() {
        assert_eq!(decode_err("{\"type\":\"T\"}"), Corruption::InvalidStructure);
        assert_eq!(decode_err("[1, 2]"), Corruption::InvalidStructure);
        assert_eq!(decode_err("not json"), Corruption::InvalidStructure);
        assert_eq!(decode_err("[{\"type\":\"T\",\"desc\":\"x\"}"), Corruption::InvalidStructure);
    }

    #[test]
    fn record_level_corruption_is_reported() {
        assert_eq!(decode_err(r#"[{"type":"T","desc":"  "}]"#), Corruption::MissingDescription);
        assert_eq!(decode_err(r#"[{"type":"T"}]"#), Corruption::MissingDescription);
        assert_eq!(decode_err(r#"[{"type":"X","desc":"a"}]"#), Corruption::UnknownTaskType);
        assert_eq!(decode_err(r#"[{"desc":"a"}]"#), Corruption::UnknownTaskType);
        assert_eq!(decode_err(r#"[{"type":"D","desc":"a","by":" "}]"#), Corruption::MissingDeadline);
        assert_eq!(
            decode_err(r#"[{"type":"E","desc":"a","from":"2026-01-01"}]"#),
            Corruption::MissingEventTime
        );
        assert_eq!(
            decode_err(r#"[{"type":"E","desc":"a","from":"2026-01-01","to":"2026-01-02T10:00"}]"#),
            Corruption::EventTimeMismatch
        );
        assert_eq!(
            decode_err(r#"[{"type":"E","desc":"a","from":"2026-01-03","to":"2026-01-02"}]"#),
            Corruption::EventOutOfOrder
        );
        assert_eq!(decode_err(r#"[{"type":"D","desc":"a","by":"06/06/2026"}]"#), Corruption::InvalidDate);
    }

    #[test]
    fn one_bad_record_rejects_the_whole_file() {
        let content = r#"[
            {"type":"T","desc":"fine","done":true},
            {"type":"D","desc":"broken","by":""}
        ]"#;
        assert_eq!(decode_err(content), Corruption::MissingDeadline);
    }

    #[test]
    fn done_defaults_to_false_and_kind_follows_separator() {
        let content = r#"[
            {"type":"T","desc":"read"},
            {"type":"D","desc":"submit","done":true,"by":"2026-01-30T18:30"},
            {"type":"E","desc":"camp","from":"2026-07-01","to":"2026-07-03"}
        ]"#;
        let tasks = decode_tasks(content).unwrap_or_else(|err| panic!("decode: {err}"));
        assert_eq!(tasks.len(), 3);
        assert!(!tasks[0].is_done());
        assert!(tasks[1].is_done());
        match tasks[1].kind() {
            TaskKind::Deadline { by } => assert_eq!(by.kind(), InstantKind::DateTime),
            other => panic!("expected deadline, got {other:?}"),
        }
        match tasks[2].kind() {
            TaskKind::Event { from, to } => {
                assert_eq!(from.kind(), InstantKind::Date);
                assert_eq!(to.kind(), InstantKind::Date);
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn encoded_records_use_stored_dates() {
        let by = Instant::resolve("06/06/2026", DateContext::Deadline)
            .unwrap_or_else(|err| panic!("resolve: {err}"));
        let task = Task::deadline("return book", by).unwrap_or_else(|err| panic!("deadline: {err}"));
        let json = encode_tasks(&[task]).unwrap_or_else(|err| panic!("encode: {err}"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_else(|err| panic!("json: {err}"));
        assert_eq!(
            value,
            serde_json::json!([{"type": "D", "desc": "return book", "done": false, "by": "2026-06-06"}])
        );
    }
}
