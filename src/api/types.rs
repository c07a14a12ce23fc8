//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{Priority, TaskStatus, Urgency};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Priority label (low, medium, high, urgent)
    #[serde(default)]
    pub priority: Option<String>,
    /// Due date (RFC3339)
    #[serde(default)]
    pub due_date: Option<String>,
    /// Owning project id
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Request body for changing a task's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status label (todo, in_progress, review, done)
    pub status: String,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Task counts for the status endpoint
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskCounts {
    /// All tasks
    pub total: usize,
    /// Tasks in todo
    pub todo: usize,
    /// Tasks in progress
    pub in_progress: usize,
    /// Completed tasks
    pub done: usize,
}

/// Overall workspace status
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusData {
    /// Task counts
    pub tasks: TaskCounts,
    /// Percentage of tasks completed (0-100)
    pub completion_rate: u8,
    /// Unread notifications for the configured user
    pub unread_notifications: usize,
}

/// One task in a list response
#[derive(Debug, Serialize)]
pub struct TaskItem {
    /// Task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Status
    pub status: TaskStatus,
    /// Priority
    pub priority: Priority,
    /// Derived urgency
    pub urgency: Urgency,
    /// Due date (RFC3339), if scheduled
    pub due_date: Option<String>,
    /// Owning project, if any
    pub project_id: Option<String>,
}

/// Task list response
#[derive(Debug, Serialize)]
pub struct TasksData {
    /// Tasks in canonical order
    pub tasks: Vec<TaskItem>,
}

/// Task detail response
#[derive(Debug, Serialize)]
pub struct TaskDetailData {
    /// Task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Longer description, if any
    pub description: Option<String>,
    /// Status
    pub status: TaskStatus,
    /// Priority
    pub priority: Priority,
    /// Derived urgency
    pub urgency: Urgency,
    /// Due date (RFC3339), if scheduled
    pub due_date: Option<String>,
    /// Owning project, if any
    pub project_id: Option<String>,
    /// When created (RFC3339)
    pub created_at: String,
    /// When last updated (RFC3339)
    pub updated_at: String,
}

/// Response for a created task
#[derive(Debug, Serialize)]
pub struct TaskCreateData {
    /// Assigned task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Initial status
    pub status: TaskStatus,
    /// Priority
    pub priority: Priority,
}

/// Response for a task mutation
#[derive(Debug, Serialize)]
pub struct TaskMutationData {
    /// Task ID
    pub id: String,
    /// Status after the mutation
    pub status: TaskStatus,
}

/// One notification in a list response
#[derive(Debug, Serialize)]
pub struct NotificationItem {
    /// Notification ID
    pub id: String,
    /// Kind label
    pub kind: String,
    /// Headline
    pub title: String,
    /// Message body, if any
    pub message: Option<String>,
    /// Whether it has been read
    pub read: bool,
    /// Related task, if any
    pub task_id: Option<String>,
    /// Deep link, if any
    pub link: Option<String>,
    /// When issued (RFC3339)
    pub created_at: String,
}

/// Notification list response
#[derive(Debug, Serialize)]
pub struct NotificationsData {
    /// Notifications, newest first
    pub notifications: Vec<NotificationItem>,
}

/// Sweep response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepData {
    /// Due-soon notifications issued
    pub due_soon: usize,
    /// Overdue notifications issued
    pub overdue: usize,
}
