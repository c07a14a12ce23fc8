//! Storage adapters for the core's port traits
//!
//! File-backed implementations living under `.taskflow/` in the
//! workspace:
//! - `task`: tasks in a TOML file (hand-editable)
//! - `notification`: issued notifications in JSON
//! - `comment`: task comments in JSON

/// Comment storage
pub mod comment;
/// Notification storage
pub mod notification;
/// Task storage
pub mod task;

pub use comment::FileCommentStore;
pub use notification::FileNotificationStore;
pub use task::{DecodeError, FileTaskStore};
