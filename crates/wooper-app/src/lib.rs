//! Application layer logic for wooper.
//!
//! This crate turns input lines into task list changes: command parsing, the task
//! manager, configuration and the service that writes every change through to
//! storage.

pub mod command;
pub mod config;
pub mod service;
pub mod task_manager;
pub mod task_patch;
pub mod task_store;

// Re-exports for convenience
pub use command::{CommandKind, ParsedCommand, parse, task_index};
pub use config::{ProjectConfig, StorageConfig};
pub use service::{Outcome, ServiceError, TaskService};
pub use task_manager::{TaskError, TaskManager};
pub use task_patch::TaskUpdate;
pub use task_store::TaskStore;
