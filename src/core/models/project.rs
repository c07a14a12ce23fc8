//! Project model
//!
//! Only the fields the classifier and rule engine need. Full project CRUD
//! lives with the surrounding application, not in this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project grouping tasks for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (auto-generated: PRJ-N)
    pub id: String,

    /// Project name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owning user
    pub user_id: String,

    /// When this project was created
    pub created_at: DateTime<Utc>,
}
