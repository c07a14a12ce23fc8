//! List notifications and mark them read

use taskflow::config::TaskFlowConfig;
use taskflow::core::ports::NotificationStore as _;
use taskflow::output::{NotificationListResult, NotificationRow, OperationResult, OutputMode};
use taskflow::storage::FileNotificationStore;

/// List the configured user's notifications, newest first
pub fn notifications(unread_only: bool, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config = TaskFlowConfig::load(&root);
    let store = FileNotificationStore::new(&root);

    let mut notifications = store.list(&config.default_user)?;
    if unread_only {
        notifications.retain(|n| !n.read);
    }

    let rows = notifications
        .into_iter()
        .map(|n| NotificationRow {
            id: n.id,
            kind: n.kind.to_string(),
            title: n.title,
            message: n.message,
            read: n.read,
            task_id: n.task_id,
            created_at: n.created_at.to_rfc3339(),
        })
        .collect();

    NotificationListResult {
        notifications: rows,
    }
    .render(mode);
    Ok(())
}

/// Mark one notification read
pub fn mark_read(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let store = FileNotificationStore::new(&root);

    let Some(notification) = store.mark_read(id)? else {
        anyhow::bail!("Notification '{id}' not found");
    };

    OperationResult {
        success: true,
        message: format!("Marked {} read", notification.id),
    }
    .render(mode);
    Ok(())
}
