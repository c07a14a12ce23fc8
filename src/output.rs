//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize as _;
use serde::Serialize;

use crate::core::models::{Priority, TaskStatus, Urgency};
use crate::core::services::classifier::TaskAnalytics;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn paint_status(status: TaskStatus) -> String {
    let label = status.to_string();
    match status {
        TaskStatus::Todo => label.yellow().to_string(),
        TaskStatus::InProgress => label.cyan().to_string(),
        TaskStatus::Review => label.magenta().to_string(),
        TaskStatus::Done => label.green().to_string(),
    }
}

fn paint_priority(priority: Priority) -> String {
    let label = priority.to_string();
    match priority {
        Priority::Urgent => label.red().bold().to_string(),
        Priority::High => label.red().to_string(),
        Priority::Medium => label.yellow().to_string(),
        Priority::Low => label.dimmed().to_string(),
    }
}

fn paint_urgency(urgency: Urgency) -> String {
    let label = urgency.to_string();
    match urgency {
        Urgency::Critical => label.red().bold().to_string(),
        Urgency::High => label.red().to_string(),
        Urgency::Medium => label.yellow().to_string(),
        Urgency::Low => label.dimmed().to_string(),
    }
}

/// One task in a list
#[derive(Debug, Serialize)]
pub struct TaskRow {
    /// Task ID (e.g. "TSK-1")
    pub id: String,
    /// Task title
    pub title: String,
    /// Status label
    pub status: TaskStatus,
    /// Priority label
    pub priority: Priority,
    /// Derived urgency
    pub urgency: Urgency,
    /// Due date (RFC3339), if scheduled
    pub due_date: Option<String>,
    /// Owning project, if any
    pub project_id: Option<String>,
}

/// Result of a task list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Listed tasks, in canonical order
    pub tasks: Vec<TaskRow>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks found.");
            return;
        }

        println!("Tasks:\n");
        for t in &self.tasks {
            println!("  [{}] {}", t.id, t.title);
            let due = t.due_date.as_deref().unwrap_or("-");
            println!(
                "          status: {}  priority: {}  urgency: {}  due: {}",
                paint_status(t.status),
                paint_priority(t.priority),
                paint_urgency(t.urgency),
                due
            );
        }
    }
}

/// One comment under a task detail view
#[derive(Debug, Serialize)]
pub struct CommentRow {
    /// Comment ID
    pub id: String,
    /// Author display name
    pub author: String,
    /// Comment body
    pub content: String,
    /// When posted (RFC3339)
    pub created_at: String,
}

/// Result of a task detail operation
#[derive(Debug, Serialize)]
pub struct TaskDetailResult {
    /// Task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Status label
    pub status: TaskStatus,
    /// Priority label
    pub priority: Priority,
    /// Derived urgency
    pub urgency: Urgency,
    /// Due date (RFC3339), if scheduled
    pub due_date: Option<String>,
    /// Owning project, if any
    pub project_id: Option<String>,
    /// When created (RFC3339)
    pub created_at: String,
    /// Comments on this task
    pub comments: Vec<CommentRow>,
}

impl TaskDetailResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("[{}] {}", self.id, self.title);
        if let Some(description) = &self.description {
            println!("{description}");
        }
        println!();
        println!("  status:   {}", paint_status(self.status));
        println!("  priority: {}", paint_priority(self.priority));
        println!("  urgency:  {}", paint_urgency(self.urgency));
        if let Some(due) = &self.due_date {
            println!("  due:      {due}");
        }
        if let Some(project) = &self.project_id {
            println!("  project:  {project}");
        }
        println!("  created:  {}", self.created_at);

        if !self.comments.is_empty() {
            println!("\nComments:");
            for c in &self.comments {
                println!("  {} ({}):", c.author, c.created_at);
                println!("    {}", c.content);
            }
        }
    }
}

/// Result of a stats operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResult {
    /// All tasks
    pub total: usize,
    /// Tasks in todo
    pub todo: usize,
    /// Tasks in progress
    pub in_progress: usize,
    /// Completed tasks
    pub done: usize,
    /// Percentage of tasks completed (0-100)
    pub completion_rate: u8,
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Tasks: {} total", self.total);
        println!("  todo:        {}", self.todo);
        println!("  in_progress: {}", self.in_progress);
        println!("  done:        {}", self.done);
        println!("Completion: {}%", self.completion_rate);
    }
}

/// Result of an analytics operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalyticsResult {
    /// The full dashboard summary
    #[serde(flatten)]
    pub analytics: TaskAnalytics,
}

impl AnalyticsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let a = &self.analytics;
        println!("Tasks: {} total", a.stats.total);
        println!("  todo:        {}", a.stats.todo);
        println!("  in_progress: {}", a.stats.in_progress);
        println!("  done:        {}", a.stats.done);
        println!();
        println!("  overdue:       {}", a.overdue);
        println!("  due today:     {}", a.due_today);
        println!("  upcoming (7d): {}", a.upcoming);
        println!("  high priority: {}", a.high_priority);
        println!();
        println!("Completion: {}%", a.completion_rate);
        println!("Created per day (7d avg): {}", a.created_per_day);
    }
}

/// One notification in a list
#[derive(Debug, Serialize)]
pub struct NotificationRow {
    /// Notification ID (e.g. "NTF-1")
    pub id: String,
    /// Notification kind label
    pub kind: String,
    /// Headline
    pub title: String,
    /// Message body, if any
    pub message: Option<String>,
    /// Whether the notification has been read
    pub read: bool,
    /// Related task, if any
    pub task_id: Option<String>,
    /// When issued (RFC3339)
    pub created_at: String,
}

/// Result of a notification list operation
#[derive(Debug, Serialize)]
pub struct NotificationListResult {
    /// Listed notifications, newest first
    pub notifications: Vec<NotificationRow>,
}

impl NotificationListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.notifications.is_empty() {
            println!("No notifications.");
            return;
        }

        println!("Notifications:\n");
        for n in &self.notifications {
            let marker = if n.read { " " } else { "*" };
            println!("{marker} [{}] {} ({})", n.id, n.title.bold(), n.kind);
            if let Some(message) = &n.message {
                println!("          {message}");
            }
        }
    }
}

/// Result of a notification sweep
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepResult {
    /// Due-soon notifications issued
    pub due_soon: usize,
    /// Overdue notifications issued
    pub overdue: usize,
}

impl SweepResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "Sweep issued {} due-soon and {} overdue notification(s).",
            self.due_soon, self.overdue
        );
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
