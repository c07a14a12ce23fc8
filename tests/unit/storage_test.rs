//! Tests for the file-backed stores

use std::fs;

use tempfile::TempDir;

use crate::common::fixtures::at;
use taskflow::core::models::{NewNotification, NewTask, NotificationType, Priority, TaskStatus};
use taskflow::core::ports::{NotificationStore, TaskFilter, TaskStore};
use taskflow::storage::{FileCommentStore, FileNotificationStore, FileTaskStore};

// =============================================================================
// TASK STORE
// =============================================================================

#[test]
fn test_task_store_create_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let store = FileTaskStore::new(dir.path());

    let first = store.create(&NewTask::new("First", "u1")).unwrap();
    let second = store.create(&NewTask::new("Second", "u1")).unwrap();

    assert_eq!(first.id, "TSK-1");
    assert_eq!(second.id, "TSK-2");
    assert_eq!(first.status, TaskStatus::Todo);
    assert_eq!(first.priority, Priority::Medium);
}

#[test]
fn test_task_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileTaskStore::new(dir.path());

    let mut data = NewTask::new("Ship release", "u1");
    data.description = Some("cut the tag, push artifacts".to_string());
    data.priority = Some(Priority::Urgent);
    data.due_date = Some(at("2026-03-10T12:00:00Z"));
    data.project_id = Some("PRJ-1".to_string());
    store.create(&data).unwrap();

    // Fresh store instance reads the same file
    let reread = FileTaskStore::new(dir.path()).get("TSK-1").unwrap().unwrap();
    assert_eq!(reread.title, "Ship release");
    assert_eq!(reread.description.as_deref(), Some("cut the tag, push artifacts"));
    assert_eq!(reread.priority, Priority::Urgent);
    assert_eq!(reread.due_date, Some(at("2026-03-10T12:00:00Z")));
    assert_eq!(reread.project_id.as_deref(), Some("PRJ-1"));
}

#[test]
fn test_task_store_find_applies_filter() {
    let dir = TempDir::new().unwrap();
    let store = FileTaskStore::new(dir.path());

    let mut open = NewTask::new("Open", "u1");
    open.due_date = Some(at("2026-03-10T12:00:00Z"));
    store.create(&open).unwrap();

    let mut done = NewTask::new("Done", "u1");
    done.status = Some(TaskStatus::Done);
    done.due_date = Some(at("2026-03-10T12:00:00Z"));
    store.create(&done).unwrap();

    let mut other_user = NewTask::new("Other", "u2");
    other_user.due_date = Some(at("2026-03-10T12:00:00Z"));
    store.create(&other_user).unwrap();

    let undated = NewTask::new("Undated", "u1");
    store.create(&undated).unwrap();

    let filter = TaskFilter::default()
        .for_user("u1")
        .excluding(TaskStatus::Done)
        .due_before(at("2026-03-11T00:00:00Z"));
    let found = store.find(&filter).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Open");
}

#[test]
fn test_task_store_update_and_delete() {
    let dir = TempDir::new().unwrap();
    let store = FileTaskStore::new(dir.path());

    let mut task = store.create(&NewTask::new("Edit me", "u1")).unwrap();
    task.status = TaskStatus::InProgress;
    let updated = store.update(&task).unwrap();
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert!(updated.updated_at >= task.created_at);

    assert!(store.delete("TSK-1").unwrap());
    assert!(!store.delete("TSK-1").unwrap());
    assert!(store.get("TSK-1").unwrap().is_none());
}

#[test]
fn test_task_store_update_missing_task_errors() {
    let dir = TempDir::new().unwrap();
    let store = FileTaskStore::new(dir.path());

    let task = crate::common::fixtures::task("TSK-9", TaskStatus::Todo, Priority::Low);
    let result = store.update(&task);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_task_store_rejects_malformed_status() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".taskflow")).unwrap();
    fs::write(
        dir.path().join(".taskflow/tasks.toml"),
        r#"
[meta]
next_id = 2

[[task]]
id = "TSK-1"
title = "Broken"
status = "cancelled"
priority = "medium"
user_id = "u1"
created_at = "2026-01-01T00:00:00+00:00"
updated_at = "2026-01-01T00:00:00+00:00"
"#,
    )
    .unwrap();

    let store = FileTaskStore::new(dir.path());
    let result = store.find(&TaskFilter::default());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid status"));
}

// =============================================================================
// NOTIFICATION STORE
// =============================================================================

#[test]
fn test_notification_store_create_and_find_recent() {
    let dir = TempDir::new().unwrap();
    let store = FileNotificationStore::new(dir.path());

    let payload = NewNotification::new(NotificationType::TaskDueSoon, "Task due soon", "u1")
        .for_task("TSK-1");
    let created = store.create(&payload).unwrap();
    assert_eq!(created.id, "NTF-1");
    assert!(!created.read);
    assert_eq!(created.link.as_deref(), Some("/dashboard/tasks/TSK-1"));

    let since = created.created_at - chrono::Duration::hours(1);
    let recent = store.find_recent("TSK-1", NotificationType::TaskDueSoon, since).unwrap();
    assert_eq!(recent.len(), 1);

    // Different kind or task does not match
    assert!(store.find_recent("TSK-1", NotificationType::TaskOverdue, since).unwrap().is_empty());
    assert!(store.find_recent("TSK-2", NotificationType::TaskDueSoon, since).unwrap().is_empty());

    // A later cutoff excludes it
    let after = created.created_at + chrono::Duration::seconds(1);
    assert!(store.find_recent("TSK-1", NotificationType::TaskDueSoon, after).unwrap().is_empty());
}

#[test]
fn test_notification_store_list_newest_first_and_mark_read() {
    let dir = TempDir::new().unwrap();
    let store = FileNotificationStore::new(dir.path());

    store.create(&NewNotification::new(NotificationType::Info, "first", "u1")).unwrap();
    store.create(&NewNotification::new(NotificationType::Info, "second", "u1")).unwrap();
    store.create(&NewNotification::new(NotificationType::Info, "other", "u2")).unwrap();

    let listed = store.list("u1").unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].created_at >= listed[1].created_at);

    let marked = store.mark_read("NTF-1").unwrap().unwrap();
    assert!(marked.read);
    assert!(store.mark_read("NTF-99").unwrap().is_none());

    assert!(store.delete("NTF-1").unwrap());
    assert!(!store.delete("NTF-1").unwrap());
}

// =============================================================================
// COMMENT STORE
// =============================================================================

#[test]
fn test_comment_store_add_and_list() {
    let dir = TempDir::new().unwrap();
    let store = FileCommentStore::new(dir.path());

    store.add("TSK-1", "u2", "Alex", "First comment").unwrap();
    store.add("TSK-1", "u1", "Me", "Second comment").unwrap();
    store.add("TSK-2", "u2", "Alex", "Unrelated").unwrap();

    let comments = store.list_for_task("TSK-1").unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, "CMT-1");
    assert_eq!(comments[0].author_name, "Alex");
    assert_eq!(comments[1].content, "Second comment");
}
