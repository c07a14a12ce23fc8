//! Comment on a task

use taskflow::config::TaskFlowConfig;
use taskflow::core::ports::{SystemClock, TaskStore as _};
use taskflow::core::services::notifier::{NotificationRuleEngine, TaskEvent};
use taskflow::output::{OperationResult, OutputMode};
use taskflow::storage::{FileCommentStore, FileNotificationStore, FileTaskStore};

/// Append a comment and fire the comment-added rule
///
/// The comment itself must land even when the notification write fails;
/// only the notification is best-effort.
pub fn comment(
    id: &str,
    text: &str,
    author: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config = TaskFlowConfig::load(&root);
    let store = FileTaskStore::new(&root);

    let Some(task) = store.get(id)? else {
        anyhow::bail!("Task '{id}' not found");
    };

    let author = author.unwrap_or(&config.default_user);
    let comment = FileCommentStore::new(&root).add(&task.id, author, author, text)?;

    let notifications = FileNotificationStore::new(&root);
    let clock = SystemClock;
    let engine = NotificationRuleEngine::new(&notifications, &clock);
    if let Err(err) = engine.handle(&task, &TaskEvent::CommentAdded { comment: &comment }) {
        log::warn!("notification for {} failed: {err:#}", task.id);
    }

    OperationResult {
        success: true,
        message: format!("Comment {} added to {}", comment.id, task.id),
    }
    .render(mode);
    Ok(())
}
