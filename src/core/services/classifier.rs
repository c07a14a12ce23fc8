//! Task classifier - derives statistics and urgency buckets
//!
//! Pure, deterministic derivations over an in-memory task collection.
//! No I/O and no mutation of inputs; safe to call from any number of
//! concurrent callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::core::models::{Priority, Project, Task, TaskStatus, Urgency};

/// Status counts for the dashboard
///
/// Review-status tasks are counted in `total` but have no dedicated bucket
/// in this aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TaskStats {
    /// All tasks, regardless of status
    pub total: usize,
    /// Tasks in todo
    pub todo: usize,
    /// Tasks in progress
    pub in_progress: usize,
    /// Completed tasks
    pub done: usize,
}

/// One-shot summary combining the individual classifier views
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TaskAnalytics {
    /// Status counts
    pub stats: TaskStats,
    /// Tasks past their due date and not done
    pub overdue: usize,
    /// Tasks due within the current calendar day and not done
    pub due_today: usize,
    /// Tasks due within the next seven days and not done
    pub upcoming: usize,
    /// Percentage of tasks completed (0-100)
    pub completion_rate: u8,
    /// Tasks at high or urgent priority
    pub high_priority: usize,
    /// Tasks created per day, averaged over a week
    ///
    /// Display heuristic (total / 7, one decimal place), not a true rate
    /// over the actual creation timestamps.
    pub created_per_day: f64,
}

/// Count tasks by status
#[must_use]
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Done => stats.done += 1,
            TaskStatus::Review => {},
        }
    }
    stats
}

/// Partition tasks into the four status buckets
///
/// Every bucket is present in the result, empty or not. Input order is
/// preserved within each bucket.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> BTreeMap<TaskStatus, Vec<Task>> {
    let mut groups: BTreeMap<TaskStatus, Vec<Task>> =
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done]
            .into_iter()
            .map(|s| (s, Vec::new()))
            .collect();
    for task in tasks {
        groups.entry(task.status).or_default().push(task.clone());
    }
    groups
}

/// Partition tasks into the four priority buckets
#[must_use]
pub fn group_by_priority(tasks: &[Task]) -> BTreeMap<Priority, Vec<Task>> {
    let mut groups: BTreeMap<Priority, Vec<Task>> =
        [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent]
            .into_iter()
            .map(|p| (p, Vec::new()))
            .collect();
    for task in tasks {
        groups.entry(task.priority).or_default().push(task.clone());
    }
    groups
}

/// Tasks with a due date strictly before `now` that are not done
///
/// Input order is preserved. Done tasks never count as overdue, even with
/// a past due date.
#[must_use]
pub fn overdue_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.is_open() && t.due_date.is_some_and(|due| due < now))
        .cloned()
        .collect()
}

/// Tasks due within the current calendar day that are not done
#[must_use]
pub fn tasks_due_today(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::hours(24);
    tasks
        .iter()
        .filter(|t| {
            t.is_open() && t.due_date.is_some_and(|due| due >= day_start && due < day_end)
        })
        .cloned()
        .collect()
}

/// Tasks due within `[now, now + window_days]` that are not done
///
/// Sorted ascending by due date; tasks without a due date are excluded.
#[must_use]
pub fn upcoming_tasks(tasks: &[Task], now: DateTime<Utc>, window_days: i64) -> Vec<Task> {
    let horizon = now + Duration::days(window_days);
    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|t| t.is_open() && t.due_date.is_some_and(|due| due >= now && due <= horizon))
        .cloned()
        .collect();
    upcoming.sort_by_key(|t| t.due_date);
    upcoming
}

/// Percentage of tasks completed, rounded to the nearest integer
///
/// Defined as 0 for an empty collection.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn completion_rate(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    (100.0 * done as f64 / tasks.len() as f64).round() as u8
}

/// Sort tasks into the canonical dashboard order
///
/// Precedence: status progression ascending, priority score descending,
/// due date ascending (dated before undated), then creation time
/// descending. The sort is stable - equal-key tasks keep their relative
/// input order.
#[must_use]
pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        a.status
            .progression()
            .cmp(&b.status.progression())
            .then_with(|| b.priority.score().cmp(&a.priority.score()))
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted
}

/// Classify a single task's urgency
///
/// Uses whole-calendar-day differences, so a task due later today is
/// critical no matter the hour, and a task due at 00:01 tomorrow is not
/// confused with one due in 25 hours.
#[must_use]
pub fn task_urgency(task: &Task, now: DateTime<Utc>) -> Urgency {
    let Some(due) = task.due_date else {
        return if task.priority == Priority::Urgent {
            Urgency::High
        } else {
            Urgency::Low
        };
    };

    let days_until_due = (due.date_naive() - now.date_naive()).num_days();

    if days_until_due <= 0 {
        Urgency::Critical
    } else if days_until_due <= 2 && matches!(task.priority, Priority::High | Priority::Urgent) {
        Urgency::High
    } else if days_until_due <= 7 {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Filter tasks by a case-insensitive substring query
///
/// Matches against title, description, priority label, and the owning
/// project's name when the project is known. A blank query returns the
/// input unchanged.
#[must_use]
pub fn filter_tasks(tasks: &[Task], projects: &[Project], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.as_ref().is_some_and(|d| d.to_lowercase().contains(&needle))
                || t.priority.to_string().contains(&needle)
                || t.project_id.as_ref().is_some_and(|pid| {
                    projects
                        .iter()
                        .find(|p| &p.id == pid)
                        .is_some_and(|p| p.name.to_lowercase().contains(&needle))
                })
        })
        .cloned()
        .collect()
}

/// Combine the individual views into one dashboard summary
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn task_analytics(tasks: &[Task], now: DateTime<Utc>) -> TaskAnalytics {
    let high_priority = tasks
        .iter()
        .filter(|t| matches!(t.priority, Priority::High | Priority::Urgent))
        .count();
    let created_per_day = (tasks.len() as f64 / 7.0 * 10.0).round() / 10.0;

    TaskAnalytics {
        stats: compute_stats(tasks),
        overdue: overdue_tasks(tasks, now).len(),
        due_today: tasks_due_today(tasks, now).len(),
        upcoming: upcoming_tasks(tasks, now, 7).len(),
        completion_rate: completion_rate(tasks),
        high_priority,
        created_per_day,
    }
}
