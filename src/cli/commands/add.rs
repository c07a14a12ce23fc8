//! Add a task

use anyhow::Context as _;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use taskflow::config::TaskFlowConfig;
use taskflow::core::models::NewTask;
use taskflow::core::ports::{SystemClock, TaskStore as _};
use taskflow::core::services::notifier::{NotificationRuleEngine, TaskEvent};
use taskflow::output::{OperationResult, OutputMode};
use taskflow::storage::{FileNotificationStore, FileTaskStore};

/// Create a task and fire the task-created notification rule
pub fn add(
    title: &str,
    description: Option<String>,
    priority: &str,
    due: Option<&str>,
    project: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config = TaskFlowConfig::load(&root);

    let priority = priority.parse().map_err(anyhow::Error::msg)?;
    let due_date = due.map(parse_due).transpose()?;

    let store = FileTaskStore::new(&root);
    let mut data = NewTask::new(title, &config.default_user);
    data.description = description;
    data.priority = Some(priority);
    data.due_date = due_date;
    data.project_id = project;

    let task = store.create(&data)?;

    // Best-effort: a failed notification must not fail the add
    let notifications = FileNotificationStore::new(&root);
    let clock = SystemClock;
    let engine = NotificationRuleEngine::new(&notifications, &clock);
    if let Err(err) = engine.handle(&task, &TaskEvent::Created { project: None }) {
        log::warn!("notification for {} failed: {err:#}", task.id);
    }

    OperationResult {
        success: true,
        message: format!("Created {}: {}", task.id, task.title),
    }
    .render(mode);
    Ok(())
}

/// Parse a due date: RFC3339, `YYYY-MM-DD` (end of day), or relative
/// (`+12h`, `+3d`)
fn parse_due(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Some(rest) = value.strip_prefix('+') {
        if let Some(hours) = rest.strip_suffix('h') {
            let hours: i64 =
                hours.parse().with_context(|| format!("invalid relative due date: {value}"))?;
            return Ok(Utc::now() + Duration::hours(hours));
        }
        if let Some(days) = rest.strip_suffix('d') {
            let days: i64 =
                days.parse().with_context(|| format!("invalid relative due date: {value}"))?;
            return Ok(Utc::now() + Duration::days(days));
        }
        anyhow::bail!("Invalid relative due date: {value}. Use +Nh or +Nd");
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let end_of_day =
            NaiveTime::from_hms_opt(23, 59, 59).context("constructing end-of-day time")?;
        return Ok(date.and_time(end_of_day).and_utc());
    }

    anyhow::bail!("Invalid due date: {value}. Use RFC3339, YYYY-MM-DD, +Nh or +Nd")
}
