//! Tests for output serialization
//!
//! Human rendering goes straight to stdout; these tests pin down the JSON
//! shapes clients script against.

use serde_json::json;

use taskflow::core::models::{Priority, TaskStatus, Urgency};
use taskflow::output::{OperationResult, StatsResult, SweepResult, TaskListResult, TaskRow};

#[test]
fn test_task_row_serializes_labels() {
    let result = TaskListResult {
        tasks: vec![TaskRow {
            id: "TSK-1".to_string(),
            title: "Fix login".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            urgency: Urgency::Critical,
            due_date: Some("2026-03-10T12:00:00+00:00".to_string()),
            project_id: None,
        }],
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["tasks"][0]["status"], json!("in_progress"));
    assert_eq!(value["tasks"][0]["priority"], json!("high"));
    assert_eq!(value["tasks"][0]["urgency"], json!("critical"));
    assert_eq!(value["tasks"][0]["due_date"], json!("2026-03-10T12:00:00+00:00"));
    assert_eq!(value["tasks"][0]["project_id"], serde_json::Value::Null);
}

#[test]
fn test_stats_result_shape() {
    let result = StatsResult {
        total: 4,
        todo: 2,
        in_progress: 1,
        done: 1,
        completion_rate: 25,
    };

    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["total"], json!(4));
    assert_eq!(value["completion_rate"], json!(25));
}

#[test]
fn test_sweep_result_shape() {
    let value = serde_json::to_value(SweepResult {
        due_soon: 2,
        overdue: 1,
    })
    .unwrap();
    assert_eq!(value["due_soon"], json!(2));
    assert_eq!(value["overdue"], json!(1));
}

#[test]
fn test_operation_result_shape() {
    let value = serde_json::to_value(OperationResult {
        success: true,
        message: "Created TSK-1: Fix login".to_string(),
    })
    .unwrap();
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["message"], json!("Created TSK-1: Fix login"));
}
