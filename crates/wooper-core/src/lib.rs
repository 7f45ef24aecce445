//! Domain types for wooper: tasks, instants and validation errors.

/// Error types.
pub mod error;
/// Date resolution and rendering.
pub mod instant;
/// Task entity.
pub mod task;
/// Description search.
pub mod text_matcher;

pub use error::{DateContext, DateError, ValidationError};
pub use instant::{Instant, InstantKind};
pub use task::{Task, TaskKind, TaskType, check_span, ensure_description};
pub use text_matcher::TextMatcher;
