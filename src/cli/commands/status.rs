//! Change a task's status

use taskflow::core::models::TaskStatus;
use taskflow::core::ports::{SystemClock, TaskStore as _};
use taskflow::core::services::notifier::{NotificationRuleEngine, TaskEvent};
use taskflow::output::{OperationResult, OutputMode};
use taskflow::storage::{FileNotificationStore, FileTaskStore};

/// Set a task's status and fire the matching transition rule
pub fn set_status(id: &str, status: &str, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let store = FileTaskStore::new(&root);

    let new_status: TaskStatus = status.parse().map_err(anyhow::Error::msg)?;

    let Some(mut task) = store.get(id)? else {
        anyhow::bail!("Task '{id}' not found");
    };

    let old_status = task.status;
    task.status = new_status;
    let task = store.update(&task)?;

    // Best-effort: a failed notification must not fail the status change
    let notifications = FileNotificationStore::new(&root);
    let clock = SystemClock;
    let engine = NotificationRuleEngine::new(&notifications, &clock);
    let event = TaskEvent::StatusChanged {
        old: old_status,
        new: new_status,
    };
    if let Err(err) = engine.handle(&task, &event) {
        log::warn!("notification for {} failed: {err:#}", task.id);
    }

    OperationResult {
        success: true,
        message: format!("{}: {old_status} -> {new_status}", task.id),
    }
    .render(mode);
    Ok(())
}
