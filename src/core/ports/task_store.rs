//! Task store port
//!
//! Defines the read/write interface for task persistence.

use chrono::{DateTime, Utc};

use super::super::models::{NewTask, Task, TaskStatus};

/// Filter for task queries
///
/// All criteria are optional and combined with AND. Tasks without a due
/// date never match a due-date bound.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks owned by this user
    pub user_id: Option<String>,
    /// Exclude tasks in this status
    pub status_not: Option<TaskStatus>,
    /// Only tasks due at or after this instant
    pub due_after: Option<DateTime<Utc>>,
    /// Only tasks due strictly before this instant
    pub due_before: Option<DateTime<Utc>>,
}

impl TaskFilter {
    /// Restrict to one user's tasks
    #[must_use]
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Exclude tasks in the given status
    #[must_use]
    pub const fn excluding(mut self, status: TaskStatus) -> Self {
        self.status_not = Some(status);
        self
    }

    /// Restrict to tasks due at or after the given instant
    #[must_use]
    pub const fn due_after(mut self, at: DateTime<Utc>) -> Self {
        self.due_after = Some(at);
        self
    }

    /// Restrict to tasks due strictly before the given instant
    #[must_use]
    pub const fn due_before(mut self, at: DateTime<Utc>) -> Self {
        self.due_before = Some(at);
        self
    }

    /// Check whether a task satisfies every criterion of this filter
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(user) = &self.user_id {
            if &task.user_id != user {
                return false;
            }
        }
        if let Some(excluded) = self.status_not {
            if task.status == excluded {
                return false;
            }
        }
        if self.due_after.is_some() || self.due_before.is_some() {
            let Some(due) = task.due_date else {
                return false;
            };
            if self.due_after.is_some_and(|at| due < at) {
                return false;
            }
            if self.due_before.is_some_and(|at| due >= at) {
                return false;
            }
        }
        true
    }
}

/// Repository for task records
///
/// Implementations handle persistence and retrieval (TOML files here, a
/// relational store in a larger deployment).
pub trait TaskStore: Send + Sync {
    /// Find tasks matching the filter, in insertion order
    fn find(&self, filter: &TaskFilter) -> anyhow::Result<Vec<Task>>;

    /// Get a single task by id
    fn get(&self, id: &str) -> anyhow::Result<Option<Task>>;

    /// Persist a new task, assigning id and timestamps
    fn create(&self, data: &NewTask) -> anyhow::Result<Task>;

    /// Overwrite an existing task record, refreshing `updated_at`
    fn update(&self, task: &Task) -> anyhow::Result<Task>;

    /// Delete a task by id; returns true if it existed
    fn delete(&self, id: &str) -> anyhow::Result<bool>;
}
