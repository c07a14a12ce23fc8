//! Show one task with its comments

use taskflow::core::ports::{Clock as _, SystemClock, TaskStore as _};
use taskflow::core::services::classifier;
use taskflow::output::{CommentRow, OutputMode, TaskDetailResult};
use taskflow::storage::{FileCommentStore, FileTaskStore};

/// Show a task's details and comment thread
pub fn show(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let store = FileTaskStore::new(&root);

    let Some(task) = store.get(id)? else {
        anyhow::bail!("Task '{id}' not found");
    };

    let comments = FileCommentStore::new(&root)
        .list_for_task(&task.id)?
        .into_iter()
        .map(|c| CommentRow {
            id: c.id,
            author: c.author_name,
            content: c.content,
            created_at: c.created_at.to_rfc3339(),
        })
        .collect();

    let now = SystemClock.now();
    TaskDetailResult {
        urgency: classifier::task_urgency(&task, now),
        id: task.id,
        title: task.title,
        description: task.description,
        status: task.status,
        priority: task.priority,
        due_date: task.due_date.map(|d| d.to_rfc3339()),
        project_id: task.project_id,
        created_at: task.created_at.to_rfc3339(),
        comments,
    }
    .render(mode);
    Ok(())
}
