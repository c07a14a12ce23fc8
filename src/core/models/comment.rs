//! Comment model
//!
//! Comments are written by the surrounding application; this core only reads
//! them as input to the comment-added notification rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier (auto-generated: CMT-N)
    pub id: String,

    /// Task this comment belongs to
    pub task_id: String,

    /// Author's user id
    pub author_id: String,

    /// Author's display name, used in notification text
    pub author_name: String,

    /// Comment body
    pub content: String,

    /// When this comment was posted
    pub created_at: DateTime<Utc>,
}
