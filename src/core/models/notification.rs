//! Notification model
//!
//! A notification is immutable once issued, except for the `read` flag and
//! deletion. Notifications are synthesized by the rule engine or by explicit
//! user-facing events - never by the classifier.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification kind (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// General information
    Info,
    /// Something good happened
    Success,
    /// Something needs attention
    Warning,
    /// Something went wrong
    Error,
    /// A task was created/assigned
    TaskAssigned,
    /// A task was completed
    TaskCompleted,
    /// A task is due within the due-soon window
    TaskDueSoon,
    /// A task slipped past its due date
    TaskOverdue,
    /// Someone commented on a task
    CommentAdded,
    /// A project-level change
    ProjectUpdate,
    /// System-originated message
    System,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::TaskAssigned => write!(f, "task_assigned"),
            Self::TaskCompleted => write!(f, "task_completed"),
            Self::TaskDueSoon => write!(f, "task_due_soon"),
            Self::TaskOverdue => write!(f, "task_overdue"),
            Self::CommentAdded => write!(f, "comment_added"),
            Self::ProjectUpdate => write!(f, "project_update"),
            Self::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "task_assigned" => Ok(Self::TaskAssigned),
            "task_completed" => Ok(Self::TaskCompleted),
            "task_due_soon" => Ok(Self::TaskDueSoon),
            "task_overdue" => Ok(Self::TaskOverdue),
            "comment_added" => Ok(Self::CommentAdded),
            "project_update" => Ok(Self::ProjectUpdate),
            "system" => Ok(Self::System),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

/// An issued notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier (auto-generated: NTF-N)
    pub id: String,

    /// Short headline
    pub title: String,

    /// Optional message body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Notification kind
    pub kind: NotificationType,

    /// Whether the owning user has read this notification
    #[serde(default)]
    pub read: bool,

    /// Owning user
    pub user_id: String,

    /// Related task, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Related project, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Deep link into the dashboard, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// When this notification was issued
    pub created_at: DateTime<Utc>,

    /// When this notification was last updated (read flag only)
    pub updated_at: DateTime<Utc>,
}

/// Data for issuing a new notification
///
/// The store assigns the identifier and timestamps on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// Short headline
    pub title: String,

    /// Optional message body
    pub message: Option<String>,

    /// Notification kind
    pub kind: NotificationType,

    /// Owning user
    pub user_id: String,

    /// Related task, if any
    pub task_id: Option<String>,

    /// Related project, if any
    pub project_id: Option<String>,

    /// Deep link into the dashboard, if any
    pub link: Option<String>,

    /// Free-form metadata
    pub metadata: Option<HashMap<String, String>>,
}

impl NewNotification {
    /// Create a notification payload with the given kind, title and owner
    #[must_use]
    pub fn new(
        kind: NotificationType,
        title: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: None,
            kind,
            user_id: user_id.into(),
            task_id: None,
            project_id: None,
            link: None,
            metadata: None,
        }
    }

    /// Set the message body
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a related task and its dashboard deep link
    #[must_use]
    pub fn for_task(mut self, task_id: impl Into<String>) -> Self {
        let id = task_id.into();
        self.link = Some(format!("/dashboard/tasks/{id}"));
        self.task_id = Some(id);
        self
    }

    /// Attach a related project
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<String>) -> Self {
        let id = project_id.into();
        if self.link.is_none() {
            self.link = Some(format!("/dashboard/projects/{id}"));
        }
        self.project_id = Some(id);
        self
    }

    /// Attach a metadata entry
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(HashMap::new).insert(key.into(), value.into());
        self
    }
}
