//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing without
//! real I/O operations.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use taskflow::core::models::{
    NewNotification, NewTask, Notification, NotificationType, Task,
};
use taskflow::core::ports::{Clock, NotificationStore, TaskFilter, TaskStore};

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Mock implementation of TaskStore
pub struct MockTaskStore {
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<u32>,
}

impl MockTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            next_id: Mutex::new(1),
        }
    }
}

impl Default for MockTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MockTaskStore {
    fn find(&self, filter: &TaskFilter) -> anyhow::Result<Vec<Task>> {
        let tasks = self.tasks.lock().expect("task store lock");
        Ok(tasks.iter().filter(|t| filter.matches(t)).cloned().collect())
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Task>> {
        let tasks = self.tasks.lock().expect("task store lock");
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    fn create(&self, data: &NewTask) -> anyhow::Result<Task> {
        let mut next_id = self.next_id.lock().expect("task id lock");
        let now = Utc::now();
        let task = Task {
            id: format!("TSK-{}", *next_id),
            title: data.title.clone(),
            description: data.description.clone(),
            status: data.status.unwrap_or_default(),
            priority: data.priority.unwrap_or_default(),
            due_date: data.due_date,
            project_id: data.project_id.clone(),
            user_id: data.user_id.clone(),
            created_at: now,
            updated_at: now,
        };
        *next_id += 1;
        self.tasks.lock().expect("task store lock").push(task.clone());
        Ok(task)
    }

    fn update(&self, task: &Task) -> anyhow::Result<Task> {
        let mut tasks = self.tasks.lock().expect("task store lock");
        let existing = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| anyhow::anyhow!("Task '{}' not found", task.id))?;
        *existing = task.clone();
        Ok(task.clone())
    }

    fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let mut tasks = self.tasks.lock().expect("task store lock");
        let len_before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() < len_before)
    }
}

/// Mock implementation of NotificationStore
///
/// Stamps created notifications with a configurable instant so dedup
/// windows are deterministic, and can be configured to fail creation to
/// exercise the best-effort contract.
pub struct MockNotificationStore {
    notifications: Mutex<Vec<Notification>>,
    next_id: Mutex<u32>,
    now: DateTime<Utc>,
    fail_create: bool,
}

impl MockNotificationStore {
    pub fn new() -> Self {
        Self::stamping(Utc::now())
    }

    /// Stamp created notifications with the given instant
    pub fn stamping(now: DateTime<Utc>) -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            now,
            fail_create: false,
        }
    }

    /// Fail every create call
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    /// Pre-seed an issued notification with an explicit `created_at`
    pub fn seed(&self, kind: NotificationType, task_id: &str, created_at: DateTime<Utc>) {
        let mut next_id = self.next_id.lock().expect("notification id lock");
        let notification = Notification {
            id: format!("NTF-{}", *next_id),
            title: "seeded".to_string(),
            message: None,
            kind,
            read: false,
            user_id: "u1".to_string(),
            task_id: Some(task_id.to_string()),
            project_id: None,
            link: None,
            metadata: None,
            created_at,
            updated_at: created_at,
        };
        *next_id += 1;
        self.notifications.lock().expect("notification store lock").push(notification);
    }

    /// All notifications created so far
    pub fn created(&self) -> Vec<Notification> {
        self.notifications.lock().expect("notification store lock").clone()
    }
}

impl Default for MockNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for MockNotificationStore {
    fn find_recent(
        &self,
        task_id: &str,
        kind: NotificationType,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Notification>> {
        let notifications = self.notifications.lock().expect("notification store lock");
        Ok(notifications
            .iter()
            .filter(|n| {
                n.kind == kind
                    && n.task_id.as_deref() == Some(task_id)
                    && n.created_at >= since
            })
            .cloned()
            .collect())
    }

    fn create(&self, data: &NewNotification) -> anyhow::Result<Notification> {
        if self.fail_create {
            anyhow::bail!("notification store unavailable");
        }
        let mut next_id = self.next_id.lock().expect("notification id lock");
        let notification = Notification {
            id: format!("NTF-{}", *next_id),
            title: data.title.clone(),
            message: data.message.clone(),
            kind: data.kind,
            read: false,
            user_id: data.user_id.clone(),
            task_id: data.task_id.clone(),
            project_id: data.project_id.clone(),
            link: data.link.clone(),
            metadata: data.metadata.clone(),
            created_at: self.now,
            updated_at: self.now,
        };
        *next_id += 1;
        self.notifications
            .lock()
            .expect("notification store lock")
            .push(notification.clone());
        Ok(notification)
    }

    fn list(&self, user_id: &str) -> anyhow::Result<Vec<Notification>> {
        let notifications = self.notifications.lock().expect("notification store lock");
        let mut result: Vec<Notification> =
            notifications.iter().filter(|n| n.user_id == user_id).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    fn mark_read(&self, id: &str) -> anyhow::Result<Option<Notification>> {
        let mut notifications = self.notifications.lock().expect("notification store lock");
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                Ok(Some(n.clone()))
            },
            None => Ok(None),
        }
    }

    fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let mut notifications = self.notifications.lock().expect("notification store lock");
        let len_before = notifications.len();
        notifications.retain(|n| n.id != id);
        Ok(notifications.len() < len_before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_task_store_create_and_get() {
        let store = MockTaskStore::new();
        let task = store.create(&NewTask::new("Test task", "u1")).unwrap();
        assert_eq!(task.id, "TSK-1");

        let fetched = store.get("TSK-1").unwrap();
        assert_eq!(fetched.unwrap().title, "Test task");
    }

    #[test]
    fn test_mock_notification_store_failing_create() {
        let store = MockNotificationStore::failing();
        let payload = NewNotification::new(NotificationType::Info, "t", "u1");
        assert!(store.create(&payload).is_err());
        assert!(store.created().is_empty());
    }
}
