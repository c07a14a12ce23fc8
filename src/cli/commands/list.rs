//! List tasks in canonical order

use taskflow::core::models::TaskStatus;
use taskflow::core::ports::{Clock as _, SystemClock, TaskFilter, TaskStore as _};
use taskflow::core::services::classifier;
use taskflow::output::{OutputMode, TaskListResult, TaskRow};
use taskflow::storage::FileTaskStore;

/// List tasks, optionally filtered by status or a search query
pub fn list(status: Option<&str>, search: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let store = FileTaskStore::new(&root);

    let mut tasks = store.find(&TaskFilter::default())?;

    if let Some(status) = status {
        let status: TaskStatus = status.parse().map_err(anyhow::Error::msg)?;
        tasks.retain(|t| t.status == status);
    }

    if let Some(query) = search {
        tasks = classifier::filter_tasks(&tasks, &[], query);
    }

    let now = SystemClock.now();
    let rows = classifier::sort_tasks(&tasks)
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
