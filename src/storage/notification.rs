//! Notification storage
//!
//! Stores issued notifications in `.taskflow/notifications.json`. The
//! chrono serde representation is used directly; unlike tasks there is no
//! hand-edited file format to stay lenient about.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{NewNotification, Notification, NotificationType};
use crate::core::ports::NotificationStore;
use crate::paths;

/// Notification file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct NotificationFile {
    /// Next numeric id to assign
    #[serde(default)]
    next_id: u32,

    /// Issued notifications, in issue order
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// JSON-file-backed notification store
#[derive(Debug, Clone)]
pub struct FileNotificationStore {
    root: PathBuf,
}

impl FileNotificationStore {
    /// Create a store rooted at the given workspace directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load(&self) -> anyhow::Result<NotificationFile> {
        let path = paths::notifications_file(&self.root);
        if !path.exists() {
            return Ok(NotificationFile::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    fn store(&self, file: &NotificationFile) -> anyhow::Result<()> {
        let dir = paths::taskflow_dir(&self.root);
        fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(file)?;
        fs::write(paths::notifications_file(&self.root), content)?;
        Ok(())
    }
}

impl NotificationStore for FileNotificationStore {
    fn find_recent(
        &self,
        task_id: &str,
        kind: NotificationType,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Notification>> {
        let file = self.load()?;
        Ok(file
            .notifications
            .into_iter()
            .filter(|n| {
                n.kind == kind
                    && n.task_id.as_deref() == Some(task_id)
                    && n.created_at >= since
            })
            .collect())
    }

    fn create(&self, data: &NewNotification) -> anyhow::Result<Notification> {
        let mut file = self.load()?;
        let numeric = file.next_id.max(1);
        file.next_id = numeric + 1;

        let now = Utc::now();
        let notification = Notification {
            id: format!("NTF-{numeric}"),
            title: data.title.clone(),
            message: data.message.clone(),
            kind: data.kind,
            read: false,
            user_id: data.user_id.clone(),
            task_id: data.task_id.clone(),
            project_id: data.project_id.clone(),
            link: data.link.clone(),
            metadata: data.metadata.clone(),
            created_at: now,
            updated_at: now,
        };

        file.notifications.push(notification.clone());
        self.store(&file)?;
        Ok(notification)
    }

    fn list(&self, user_id: &str) -> anyhow::Result<Vec<Notification>> {
        let file = self.load()?;
        let mut notifications: Vec<Notification> =
            file.notifications.into_iter().filter(|n| n.user_id == user_id).collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    fn mark_read(&self, id: &str) -> anyhow::Result<Option<Notification>> {
        let mut file = self.load()?;
        let Some(notification) = file.notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        notification.read = true;
        notification.updated_at = Utc::now();
        let updated = notification.clone();
        self.store(&file)?;
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let mut file = self.load()?;
        let len_before = file.notifications.len();
        file.notifications.retain(|n| n.id != id);
        let removed = file.notifications.len() < len_before;
        if removed {
            self.store(&file)?;
        }
        Ok(removed)
    }
}
