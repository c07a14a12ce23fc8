//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic. They take
//! typed input plus an [`ApiContext`] of collaborators and return
//! `Result<T, ApiError>`.

use crate::config::TaskFlowConfig;
use crate::core::models::{NewTask, Task, TaskStatus};
use crate::core::ports::{Clock, NotificationStore, TaskFilter, TaskStore};
use crate::core::services::classifier;
use crate::core::services::notifier::{NotificationRuleEngine, TaskEvent};

use super::error::ApiError;
use super::types::{
    CreateTaskRequest, NotificationItem, NotificationsData, StatusData, SweepData,
    TaskCounts, TaskCreateData, TaskDetailData, TaskItem, TaskMutationData, TasksData,
    UpdateStatusRequest,
};

/// Collaborators the handlers operate on
///
/// Passed explicitly so the handlers stay testable with in-memory fakes
/// and a pinned clock.
#[derive(Clone, Copy)]
pub struct ApiContext<'a> {
    /// Task persistence
    pub tasks: &'a dyn TaskStore,
    /// Notification persistence
    pub notifications: &'a dyn NotificationStore,
    /// Time source for date-relative views
    pub clock: &'a dyn Clock,
    /// Workspace configuration
    pub config: &'a TaskFlowConfig,
}

impl std::fmt::Debug for ApiContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext").finish_non_exhaustive()
    }
}

fn task_item(task: Task, ctx: &ApiContext<'_>) -> TaskItem {
    TaskItem {
        urgency: classifier::task_urgency(&task, ctx.clock.now()),
        id: task.id,
        title: task.title,
        status: task.status,
        priority: task.priority,
        due_date: task.due_date.map(|d| d.to_rfc3339()),
        project_id: task.project_id,
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Get overall workspace status
pub fn get_status(ctx: &ApiContext<'_>) -> Result<StatusData, ApiError> {
    let tasks = ctx.tasks.find(&TaskFilter::default())?;
    let counts = classifier::compute_stats(&tasks);

    let unread = ctx
        .notifications
        .list(&ctx.config.default_user)?
        .iter()
        .filter(|n| !n.read)
        .count();

    Ok(StatusData {
        tasks: TaskCounts {
            total: counts.total,
            todo: counts.todo,
            in_progress: counts.in_progress,
            done: counts.done,
        },
        completion_rate: classifier::completion_rate(&tasks),
        unread_notifications: unread,
    })
}

// =============================================================================
// TASKS
// =============================================================================

/// List all tasks in canonical order
pub fn list_tasks(ctx: &ApiContext<'_>) -> Result<TasksData, ApiError> {
    let tasks = ctx.tasks.find(&TaskFilter::default())?;
    let items = classifier::sort_tasks(&tasks)
        .into_iter()
        .map(|t| task_item(t, ctx))
        .collect();
    Ok(TasksData { tasks: items })
}

/// Get a single task by ID
pub fn get_task(ctx: &ApiContext<'_>, id: &str) -> Result<TaskDetailData, ApiError> {
    let Some(task) = ctx.tasks.get(id)? else {
        return Err(ApiError::not_found(format!("Task '{id}' not found")));
    };

    Ok(TaskDetailData {
        urgency: classifier::task_urgency(&task, ctx.clock.now()),
        id: task.id,
        title: task.title,
        description: task.description,
        status: task.status,
        priority: task.priority,
        due_date: task.due_date.map(|d| d.to_rfc3339()),
        project_id: task.project_id,
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
    })
}

/// Create a new task and fire the task-created rule
pub fn create_task(
    ctx: &ApiContext<'_>,
    req: &CreateTaskRequest,
) -> Result<TaskCreateData, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Task title cannot be empty"));
    }

    let mut data = NewTask::new(&req.title, &ctx.config.default_user);
    data.description = req.description.clone();
    data.project_id = req.project_id.clone();
    if let Some(priority) = &req.priority {
        data.priority = Some(priority.parse().map_err(ApiError::bad_request)?);
    }
    if let Some(due) = &req.due_date {
        let due = chrono::DateTime::parse_from_rfc3339(due)
            .map_err(|e| ApiError::bad_request(format!("Invalid due_date: {e}")))?;
        data.due_date = Some(due.with_timezone(&chrono::Utc));
    }

    let task = ctx.tasks.create(&data)?;

    let engine = NotificationRuleEngine::new(ctx.notifications, ctx.clock);
    if let Err(err) = engine.handle(&task, &TaskEvent::Created { project: None }) {
        log::warn!("notification for {} failed: {err:#}", task.id);
    }

    Ok(TaskCreateData {
        id: task.id,
        title: task.title,
        status: task.status,
        priority: task.priority,
    })
}

/// Change a task's status and fire the matching transition rule
pub fn set_task_status(
    ctx: &ApiContext<'_>,
    id: &str,
    req: &UpdateStatusRequest,
) -> Result<TaskMutationData, ApiError> {
    let new_status: TaskStatus = req.status.parse().map_err(ApiError::bad_request)?;

    let Some(mut task) = ctx.tasks.get(id)? else {
        return Err(ApiError::not_found(format!("Task '{id}' not found")));
    };

    let old_status = task.status;
    task.status = new_status;
    let task = ctx.tasks.update(&task)?;

    let engine = NotificationRuleEngine::new(ctx.notifications, ctx.clock);
    let event = TaskEvent::StatusChanged {
        old: old_status,
        new: new_status,
    };
    if let Err(err) = engine.handle(&task, &event) {
        log::warn!("notification for {} failed: {err:#}", task.id);
    }

    Ok(TaskMutationData {
        id: task.id,
        status: task.status,
    })
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Get the full dashboard summary
pub fn get_analytics(ctx: &ApiContext<'_>) -> Result<classifier::TaskAnalytics, ApiError> {
    let tasks = ctx.tasks.find(&TaskFilter::default())?;
    Ok(classifier::task_analytics(&tasks, ctx.clock.now()))
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

fn notification_item(n: crate::core::models::Notification) -> NotificationItem {
    NotificationItem {
        id: n.id,
        kind: n.kind.to_string(),
        title: n.title,
        message: n.message,
        read: n.read,
        task_id: n.task_id,
        link: n.link,
        created_at: n.created_at.to_rfc3339(),
    }
}

/// List the configured user's notifications, newest first
pub fn list_notifications(ctx: &ApiContext<'_>) -> Result<NotificationsData, ApiError> {
    let notifications = ctx
        .notifications
        .list(&ctx.config.default_user)?
        .into_iter()
        .map(notification_item)
        .collect();
    Ok(NotificationsData { notifications })
}

/// Mark one notification read
pub fn read_notification(ctx: &ApiContext<'_>, id: &str) -> Result<NotificationItem, ApiError> {
    match ctx.notifications.mark_read(id)? {
        Some(n) => Ok(notification_item(n)),
        None => Err(ApiError::not_found(format!("Notification '{id}' not found"))),
    }
}

// =============================================================================
// SWEEPS
// =============================================================================

/// Run the due-soon and overdue sweeps over the open tasks
pub fn run_sweep(ctx: &ApiContext<'_>) -> Result<SweepData, ApiError> {
    let tasks = ctx.tasks.find(&TaskFilter::default().excluding(TaskStatus::Done))?;

    let engine = NotificationRuleEngine::new(ctx.notifications, ctx.clock);
    Ok(SweepData {
        due_soon: engine.due_soon_sweep(&tasks, ctx.config.due_soon_hours),
        overdue: engine.overdue_sweep(&tasks),
    })
}
