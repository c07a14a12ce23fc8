//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::Cursor;
use std::io::Read as _;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiContext, ApiError, ApiResponse, CreateTaskRequest, UpdateStatusRequest,
};
use crate::config::TaskFlowConfig;
use crate::core::ports::SystemClock;
use crate::storage::{FileNotificationStore, FileTaskStore};

/// Serve the JSON API for the workspace at `root` (blocks)
pub fn serve(root: &Path, port: u16) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let server =
        Server::http(&addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    let tasks = FileTaskStore::new(root);
    let notifications = FileNotificationStore::new(root);
    let config = TaskFlowConfig::load(root);
    let clock = SystemClock;

    log::info!("taskflow API listening on http://{addr}");
    println!("taskflow API listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let ctx = ApiContext {
            tasks: &tasks,
            notifications: &notifications,
            clock: &clock,
            config: &config,
        };
        let response = handle_api_request(&mut request, &ctx);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
fn handle_api_request(
    request: &mut Request,
    ctx: &ApiContext<'_>,
) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();

    // Supports both /api/v1/... (versioned) and /api/... (legacy)
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(&path);

    match (&method, api_path) {
        // GET endpoints
        (&Method::Get, "/status") => handle_result(api::get_status(ctx)),
        (&Method::Get, "/tasks") => handle_result(api::list_tasks(ctx)),
        (&Method::Get, "/analytics") => handle_result(api::get_analytics(ctx)),
        (&Method::Get, "/notifications") => handle_result(api::list_notifications(ctx)),

        // POST /tasks - create task
        (&Method::Post, "/tasks") => match read_json_body::<CreateTaskRequest>(request) {
            Ok(req) => handle_result(api::create_task(ctx, &req)),
            Err(e) => error_response(&e),
        },

        // POST /sweep - issue due-soon and overdue notifications
        (&Method::Post, "/sweep") => handle_result(api::run_sweep(ctx)),

        // Task status: POST /tasks/{id}/status
        _ if method == Method::Post
            && api_path.starts_with("/tasks/")
            && api_path.ends_with("/status") =>
        {
            let id = api_path
                .strip_prefix("/tasks/")
                .and_then(|s| s.strip_suffix("/status"))
                .unwrap_or("");
            match read_json_body::<UpdateStatusRequest>(request) {
                Ok(req) => handle_result(api::set_task_status(ctx, id, &req)),
                Err(e) => error_response(&e),
            }
        },

        // Notification read: POST /notifications/{id}/read
        _ if method == Method::Post
            && api_path.starts_with("/notifications/")
            && api_path.ends_with("/read") =>
        {
            let id = api_path
                .strip_prefix("/notifications/")
                .and_then(|s| s.strip_suffix("/read"))
                .unwrap_or("");
            handle_result(api::read_notification(ctx, id))
        },

        // Task detail: GET /tasks/{id}
        _ if method == Method::Get && api_path.starts_with("/tasks/") => {
            let id = api_path.strip_prefix("/tasks/").unwrap_or("");
            if id.contains('/') {
                not_found_response(&format!("API endpoint not found: {method} {api_path}"))
            } else {
                handle_result(api::get_task(ctx, id))
            }
        },

        // 404 for unknown API routes
        _ => not_found_response(&format!("API endpoint not found: {method} {api_path}")),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_response(&response, 404)
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response = response.with_header(header);
    }
    response
}
