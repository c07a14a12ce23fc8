//! Tests for the notification rule engine

use crate::common::fixtures::{at, comment, project, task, task_due};
use crate::common::mocks::{FixedClock, MockNotificationStore};
use taskflow::core::models::{NotificationType, Priority, TaskStatus};
use taskflow::core::services::notifier::{NotificationRuleEngine, TaskEvent};

// =============================================================================
// EVENT RULES
// =============================================================================

#[test]
fn test_created_event_fires_task_assigned() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    let created = engine.handle(&t, &TaskEvent::Created { project: None }).unwrap().unwrap();

    assert_eq!(created.kind, NotificationType::TaskAssigned);
    assert_eq!(created.title, "New task created");
    assert_eq!(created.message.as_deref(), Some("Task \"task TSK-1\" has been created"));
    assert_eq!(created.task_id.as_deref(), Some("TSK-1"));
    assert_eq!(created.link.as_deref(), Some("/dashboard/tasks/TSK-1"));
    assert_eq!(created.user_id, "u1");
}

#[test]
fn test_created_event_includes_project_name() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let mut t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    t.project_id = Some("PRJ-1".to_string());
    let p = project("PRJ-1", "Website Redesign");

    let created =
        engine.handle(&t, &TaskEvent::Created { project: Some(&p) }).unwrap().unwrap();
    assert_eq!(
        created.message.as_deref(),
        Some("Task \"task TSK-1\" has been created in Website Redesign")
    );
    assert_eq!(created.project_id.as_deref(), Some("PRJ-1"));
}

#[test]
fn test_started_transition_fires_info() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::InProgress, Priority::Medium);
    let event = TaskEvent::StatusChanged {
        old: TaskStatus::Todo,
        new: TaskStatus::InProgress,
    };
    let created = engine.handle(&t, &event).unwrap().unwrap();

    assert_eq!(created.kind, NotificationType::Info);
    assert_eq!(created.title, "Task in progress");
    assert_eq!(created.message.as_deref(), Some("You started working on \"task TSK-1\""));
}

#[test]
fn test_other_transitions_fire_nothing() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Review, Priority::Medium);
    for (old, new) in [
        (TaskStatus::Todo, TaskStatus::Review),
        (TaskStatus::InProgress, TaskStatus::Review),
        (TaskStatus::Review, TaskStatus::Todo),
        (TaskStatus::Done, TaskStatus::Todo),
    ] {
        let result =
            engine.handle(&t, &TaskEvent::StatusChanged { old, new }).unwrap();
        assert!(result.is_none(), "unexpected notification for {old:?} -> {new:?}");
    }
    assert!(store.created().is_empty());
}

#[test]
fn test_completion_fires_on_transition_into_done() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Done, Priority::Medium);
    let event = TaskEvent::StatusChanged {
        old: TaskStatus::Review,
        new: TaskStatus::Done,
    };
    let created = engine.handle(&t, &event).unwrap().unwrap();

    assert_eq!(created.kind, NotificationType::TaskCompleted);
    assert_eq!(created.title, "Task completed!");
    assert_eq!(
        created.message.as_deref(),
        Some("Congratulations! You completed \"task TSK-1\"")
    );
}

#[test]
fn test_done_to_done_does_not_refire() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Done, Priority::Medium);
    let event = TaskEvent::StatusChanged {
        old: TaskStatus::Done,
        new: TaskStatus::Done,
    };
    let result = engine.handle(&t, &event).unwrap();

    assert!(result.is_none());
    assert!(store.created().is_empty());
}

// =============================================================================
// COMMENT RULE
// =============================================================================

#[test]
fn test_comment_by_other_user_fires() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    let c = comment("TSK-1", "u2", "Alex", "Looks good to me");
    let created =
        engine.handle(&t, &TaskEvent::CommentAdded { comment: &c }).unwrap().unwrap();

    assert_eq!(created.kind, NotificationType::CommentAdded);
    assert_eq!(created.title, "New comment on your task");
    assert_eq!(created.message.as_deref(), Some("Alex commented: Looks good to me"));
    let metadata = created.metadata.unwrap();
    assert_eq!(metadata.get("comment_id").map(String::as_str), Some("CMT-1"));
}

#[test]
fn test_comment_by_owner_is_silent() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    let c = comment("TSK-1", "u1", "Me", "note to self");
    let result = engine.handle(&t, &TaskEvent::CommentAdded { comment: &c }).unwrap();

    assert!(result.is_none());
    assert!(store.created().is_empty());
}

#[test]
fn test_comment_preview_truncated_at_100_units() {
    let store = MockNotificationStore::new();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    let c = comment("TSK-1", "u2", "Alex", &"y".repeat(150));
    let created =
        engine.handle(&t, &TaskEvent::CommentAdded { comment: &c }).unwrap().unwrap();

    let message = created.message.unwrap();
    let preview = message.strip_prefix("Alex commented: ").unwrap();
    assert_eq!(preview.len(), 103);
    assert!(preview.ends_with("..."));
    assert_eq!(&preview[..100], "y".repeat(100));
}

// =============================================================================
// DUE-SOON SWEEP
// =============================================================================

#[test]
fn test_due_soon_sweep_fires_once_within_window() {
    let now = at("2026-03-10T12:00:00Z");
    let store = MockNotificationStore::stamping(now);
    let clock = FixedClock(now);
    let engine = NotificationRuleEngine::new(&store, &clock);

    // Due 12 hours from now, inside the 24h window
    let tasks = vec![task_due("TSK-1", TaskStatus::Todo, Priority::Medium, "2026-03-11T00:00:00Z")];

    assert_eq!(engine.due_soon_sweep(&tasks, 24), 1);
    // Second run inside the same window issues nothing
    assert_eq!(engine.due_soon_sweep(&tasks, 24), 0);

    let created = store.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].kind, NotificationType::TaskDueSoon);
    assert_eq!(created[0].title, "Task due soon");
}

#[test]
fn test_due_soon_sweep_skips_done_and_distant_tasks() {
    let now = at("2026-03-10T12:00:00Z");
    let store = MockNotificationStore::stamping(now);
    let clock = FixedClock(now);
    let engine = NotificationRuleEngine::new(&store, &clock);

    let tasks = vec![
        task_due("done", TaskStatus::Done, Priority::Medium, "2026-03-11T00:00:00Z"),
        task_due("distant", TaskStatus::Todo, Priority::Medium, "2026-03-12T00:00:00Z"),
        task_due("past", TaskStatus::Todo, Priority::Medium, "2026-03-10T11:00:00Z"),
        task("undated", TaskStatus::Todo, Priority::Medium),
    ];

    assert_eq!(engine.due_soon_sweep(&tasks, 24), 0);
    assert!(store.created().is_empty());
}

// =============================================================================
// OVERDUE SWEEP
// =============================================================================

#[test]
fn test_overdue_sweep_fires_once_per_day() {
    let now = at("2026-03-10T09:00:00Z");
    let store = MockNotificationStore::stamping(now);
    let clock = FixedClock(now);
    let engine = NotificationRuleEngine::new(&store, &clock);

    let tasks = vec![task_due("TSK-1", TaskStatus::Todo, Priority::Medium, "2026-03-08T00:00:00Z")];

    assert_eq!(engine.overdue_sweep(&tasks), 1);
    assert_eq!(engine.overdue_sweep(&tasks), 0);

    let created = store.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].kind, NotificationType::TaskOverdue);
}

#[test]
fn test_overdue_sweep_refires_on_a_new_day() {
    let now = at("2026-03-10T01:00:00Z");
    let store = MockNotificationStore::stamping(now);
    let clock = FixedClock(now);
    let engine = NotificationRuleEngine::new(&store, &clock);

    // Flagged yesterday evening; today's sweep flags again
    store.seed(NotificationType::TaskOverdue, "TSK-1", at("2026-03-09T23:30:00Z"));

    let tasks = vec![task_due("TSK-1", TaskStatus::Todo, Priority::Medium, "2026-03-08T00:00:00Z")];
    assert_eq!(engine.overdue_sweep(&tasks), 1);
}

#[test]
fn test_overdue_sweep_never_flags_done_tasks() {
    let now = at("2026-03-10T09:00:00Z");
    let store = MockNotificationStore::stamping(now);
    let clock = FixedClock(now);
    let engine = NotificationRuleEngine::new(&store, &clock);

    let tasks = vec![task_due("TSK-1", TaskStatus::Done, Priority::Medium, "2026-03-08T00:00:00Z")];
    assert_eq!(engine.overdue_sweep(&tasks), 0);
}

// =============================================================================
// BEST-EFFORT CONTRACT
// =============================================================================

#[test]
fn test_sweep_swallows_store_failures() {
    let store = MockNotificationStore::failing();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    let tasks = vec![
        task_due("TSK-1", TaskStatus::Todo, Priority::Medium, "2026-03-10T18:00:00Z"),
        task_due("TSK-2", TaskStatus::Todo, Priority::Medium, "2026-03-09T00:00:00Z"),
    ];

    // Sweeps report zero issued and do not propagate the store error
    assert_eq!(engine.due_soon_sweep(&tasks, 24), 0);
    assert_eq!(engine.overdue_sweep(&tasks), 0);
}

#[test]
fn test_handle_surfaces_store_failure_to_caller() {
    let store = MockNotificationStore::failing();
    let clock = FixedClock(at("2026-03-10T12:00:00Z"));
    let engine = NotificationRuleEngine::new(&store, &clock);

    // The caller decides what to do with the failure (log and continue)
    let t = task("TSK-1", TaskStatus::Todo, Priority::Medium);
    assert!(engine.handle(&t, &TaskEvent::Created { project: None }).is_err());
}
