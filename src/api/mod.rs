//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and business
//! logic handlers that can be used by any HTTP server implementation
//! (`tiny_http`, axum, etc.) or directly by clients.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take typed input plus an
//!   [`ApiContext`] of collaborators, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    ApiContext, create_task, get_analytics, get_status, get_task, list_notifications,
    list_tasks, read_notification, run_sweep, set_task_status,
};
pub use types::{
    ApiResponse, CreateTaskRequest, NotificationItem, NotificationsData, StatusData,
    SweepData, TaskCounts, TaskCreateData, TaskDetailData, TaskItem, TaskMutationData,
    TasksData, UpdateStatusRequest,
};
