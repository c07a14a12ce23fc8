//! Notification store port
//!
//! Defines the interface the rule engine uses for duplicate-suppression
//! queries and notification creation.

use chrono::{DateTime, Utc};

use super::super::models::{NewNotification, Notification, NotificationType};

/// Repository for notification records
pub trait NotificationStore: Send + Sync {
    /// Find notifications of one kind for one task created at or after
    /// `since`, used for dedup checks
    fn find_recent(
        &self,
        task_id: &str,
        kind: NotificationType,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Notification>>;

    /// Persist a new notification, assigning id and timestamps
    fn create(&self, data: &NewNotification) -> anyhow::Result<Notification>;

    /// List a user's notifications, newest first
    fn list(&self, user_id: &str) -> anyhow::Result<Vec<Notification>>;

    /// Set the read flag on a notification; returns the updated record
    fn mark_read(&self, id: &str) -> anyhow::Result<Option<Notification>>;

    /// Delete a notification by id; returns true if it existed
    fn delete(&self, id: &str) -> anyhow::Result<bool>;
}
