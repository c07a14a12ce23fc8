//! List tasks due within the upcoming window

use taskflow::config::TaskFlowConfig;
use taskflow::core::ports::{Clock as _, SystemClock, TaskFilter, TaskStore as _};
use taskflow::core::services::classifier;
use taskflow::output::{OutputMode, TaskListResult, TaskRow};
use taskflow::storage::FileTaskStore;

/// List open tasks due within the configured window, soonest first
pub fn upcoming(window_days: Option<i64>, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config = TaskFlowConfig::load(&root);
    let window = window_days.unwrap_or(config.upcoming_window_days);

    let tasks = FileTaskStore::new(&root).find(&TaskFilter::default())?;

    let now = SystemClock.now();
    let rows = classifier::upcoming_tasks(&tasks, now, window)
        .into_iter()
        .map(|t| TaskRow {
            urgency: classifier::task_urgency(&t, now),
            id: t.id,
            title: t.title,
            status: t.status,
            priority: t.priority,
            due_date: t.due_date.map(|d| d.to_rfc3339()),
            project_id: t.project_id,
        })
        .collect();

    TaskListResult { tasks: rows }.render(mode);
    Ok(())
}
