//! Notification rule engine
//!
//! Decides, per task lifecycle trigger, whether to synthesize a
//! notification, suppresses duplicates against recently-issued ones, and
//! hands the constructed record to the notification store.
//!
//! Notification creation is best-effort: callers of [`NotificationRuleEngine::handle`]
//! log and continue on error so the originating task or comment operation
//! never fails because a notification could not be written. The sweeps
//! apply the same policy per task internally.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::core::models::{
    Comment, NewNotification, Notification, NotificationType, Project, Task, TaskStatus,
};
use crate::core::ports::{Clock, NotificationStore};

/// Maximum comment preview length, in UTF-16 code units
const COMMENT_PREVIEW_UNITS: usize = 100;

/// A task lifecycle trigger
#[derive(Debug, Clone, Copy)]
pub enum TaskEvent<'a> {
    /// The task was just created
    Created {
        /// Owning project, when known - woven into the message text
        project: Option<&'a Project>,
    },
    /// The task's status changed
    StatusChanged {
        /// Status before the change
        old: TaskStatus,
        /// Status after the change
        new: TaskStatus,
    },
    /// A comment was posted on the task
    CommentAdded {
        /// The comment that was posted
        comment: &'a Comment,
    },
}

/// Rule engine over a notification store and a clock
///
/// Both collaborators are borrowed so tests can supply in-memory fakes and
/// a pinned clock.
#[derive(Clone, Copy)]
pub struct NotificationRuleEngine<'a> {
    store: &'a dyn NotificationStore,
    clock: &'a dyn Clock,
}

impl std::fmt::Debug for NotificationRuleEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationRuleEngine").finish_non_exhaustive()
    }
}

impl<'a> NotificationRuleEngine<'a> {
    /// Create an engine over the given store and clock
    #[must_use]
    pub fn new(store: &'a dyn NotificationStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Run the rule for one event against one task
    ///
    /// Returns the created notification, or `None` when no rule fires for
    /// the event. Store failures surface as errors; callers log them and
    /// carry on (the triggering operation must not fail).
    pub fn handle(&self, task: &Task, event: &TaskEvent<'_>) -> anyhow::Result<Option<Notification>> {
        let payload = match event {
            TaskEvent::Created { project } => Some(Self::created_payload(task, *project)),
            TaskEvent::StatusChanged { old, new } => Self::status_payload(task, *old, *new),
            TaskEvent::CommentAdded { comment } => Self::comment_payload(task, comment),
        };

        match payload {
            Some(payload) => Ok(Some(self.store.create(&payload)?)),
            None => Ok(None),
        }
    }

    fn created_payload(task: &Task, project: Option<&Project>) -> NewNotification {
        let message = project.map_or_else(
            || format!("Task \"{}\" has been created", task.title),
            |p| format!("Task \"{}\" has been created in {}", task.title, p.name),
        );

        let mut payload =
            NewNotification::new(NotificationType::TaskAssigned, "New task created", &task.user_id)
                .message(message)
                .for_task(&task.id);
        if let Some(project_id) = &task.project_id {
            payload = payload.for_project(project_id);
        }
        payload
    }

    fn status_payload(task: &Task, old: TaskStatus, new: TaskStatus) -> Option<NewNotification> {
        match (old, new) {
            (TaskStatus::Todo, TaskStatus::InProgress) => Some(
                NewNotification::new(NotificationType::Info, "Task in progress", &task.user_id)
                    .message(format!("You started working on \"{}\"", task.title))
                    .for_task(&task.id),
            ),
            // Fire only on transitions *into* done; a no-op save of an
            // already-done task must not congratulate twice.
            (old_status, TaskStatus::Done) if old_status != TaskStatus::Done => Some(
                NewNotification::new(
                    NotificationType::TaskCompleted,
                    "Task completed!",
                    &task.user_id,
                )
                .message(format!("Congratulations! You completed \"{}\"", task.title))
                .for_task(&task.id),
            ),
            _ => None,
        }
    }

    fn comment_payload(task: &Task, comment: &Comment) -> Option<NewNotification> {
        if comment.author_id == task.user_id {
            return None;
        }
        Some(
            NewNotification::new(
                NotificationType::CommentAdded,
                "New comment on your task",
                &task.user_id,
            )
            .message(format!(
                "{} commented: {}",
                comment.author_name,
                comment_preview(&comment.content)
            ))
            .for_task(&task.id)
            .meta("comment_id", &comment.id),
        )
    }

    /// Notify about tasks due within the next `window_hours`
    ///
    /// Designed for a periodic (e.g. daily) invocation over all non-done
    /// tasks with due dates. Idempotent within the dedup window: a repeat
    /// for a task that was already notified inside the last `window_hours`
    /// is suppressed. Returns the number of notifications issued.
    ///
    /// Two sweeps racing can both pass the dedup read before either
    /// writes; resolving that needs a uniqueness constraint in the store,
    /// which this core does not assume.
    pub fn due_soon_sweep(&self, tasks: &[Task], window_hours: i64) -> usize {
        let now = self.clock.now();
        let horizon = now + Duration::hours(window_hours);
        let dedup_since = now - Duration::hours(window_hours);

        let mut issued = 0;
        for task in tasks {
            let due_soon =
                task.is_open() && task.due_date.is_some_and(|due| due >= now && due <= horizon);
            if !due_soon {
                continue;
            }
            match self.notify_once(task, NotificationType::TaskDueSoon, dedup_since, || {
                NewNotification::new(
                    NotificationType::TaskDueSoon,
                    "Task due soon",
                    &task.user_id,
                )
                .message(format!(
                    "\"{}\" is due soon. Don't forget to complete it!",
                    task.title
                ))
                .for_task(&task.id)
            }) {
                Ok(true) => issued += 1,
                Ok(false) => {},
                Err(err) => {
                    log::warn!("due-soon notification for {} failed: {err:#}", task.id);
                },
            }
        }
        issued
    }

    /// Notify about tasks past their due date
    ///
    /// Idempotent within the current calendar day: a repeat for a task
    /// that was already flagged overdue since the start of today is
    /// suppressed. Returns the number of notifications issued. Carries
    /// the same unresolved sweep race as [`Self::due_soon_sweep`].
    pub fn overdue_sweep(&self, tasks: &[Task]) -> usize {
        let now = self.clock.now();
        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();

        let mut issued = 0;
        for task in tasks {
            let overdue = task.is_open() && task.due_date.is_some_and(|due| due < now);
            if !overdue {
                continue;
            }
            match self.notify_once(task, NotificationType::TaskOverdue, day_start, || {
                NewNotification::new(
                    NotificationType::TaskOverdue,
                    "Task overdue!",
                    &task.user_id,
                )
                .message(format!(
                    "\"{}\" is overdue. Update its status or move the due date.",
                    task.title
                ))
                .for_task(&task.id)
            }) {
                Ok(true) => issued += 1,
                Ok(false) => {},
                Err(err) => {
                    log::warn!("overdue notification for {} failed: {err:#}", task.id);
                },
            }
        }
        issued
    }

    /// Create a notification unless one of the same kind exists for the
    /// task since `since`
    ///
    /// Any match count above zero suppresses - an unexpected duplicate
    /// from the store errs toward silence rather than double-notifying.
    fn notify_once(
        &self,
        task: &Task,
        kind: NotificationType,
        since: DateTime<Utc>,
        build: impl FnOnce() -> NewNotification,
    ) -> anyhow::Result<bool> {
        let recent = self.store.find_recent(&task.id, kind, since)?;
        if !recent.is_empty() {
            log::debug!("suppressing duplicate {kind} notification for {}", task.id);
            return Ok(false);
        }
        self.store.create(&build())?;
        Ok(true)
    }
}

/// First 100 UTF-16 code units of a comment, with `...` when truncated
fn comment_preview(content: &str) -> String {
    let units: Vec<u16> = content.encode_utf16().collect();
    if units.len() <= COMMENT_PREVIEW_UNITS {
        return content.to_string();
    }
    let mut preview = String::from_utf16_lossy(&units[..COMMENT_PREVIEW_UNITS]);
    preview.push_str("...");
    preview
}
