//! Issue due-soon and overdue notifications

use taskflow::config::TaskFlowConfig;
use taskflow::core::models::TaskStatus;
use taskflow::core::ports::{SystemClock, TaskFilter, TaskStore as _};
use taskflow::core::services::notifier::NotificationRuleEngine;
use taskflow::output::{OutputMode, SweepResult};
use taskflow::storage::{FileNotificationStore, FileTaskStore};

/// Run both periodic sweeps over the open tasks
///
/// Safe to run on a schedule: repeats inside the dedup windows issue
/// nothing.
pub fn sweep(mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config = TaskFlowConfig::load(&root);

    let tasks = FileTaskStore::new(&root)
        .find(&TaskFilter::default().excluding(TaskStatus::Done))?;

    let notifications = FileNotificationStore::new(&root);
    let clock = SystemClock;
    let engine = NotificationRuleEngine::new(&notifications, &clock);

    let due_soon = engine.due_soon_sweep(&tasks, config.due_soon_hours);
    let overdue = engine.overdue_sweep(&tasks);

    SweepResult { due_soon, overdue }.render(mode);
    Ok(())
}
