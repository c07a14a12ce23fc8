//! Task model
//!
//! A task is a unit of work owned by one user, with a status progression
//! and a priority. Urgency is derived from both plus the due date, see
//! the classifier service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task status
///
/// The progression order (todo -> `in_progress` -> review -> done) is used
/// as an ordinal for sorting, not as an enforced state machine - any status
/// can be set directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Todo,
    /// Currently being worked on
    InProgress,
    /// Awaiting review
    Review,
    /// Completed
    Done,
}

impl TaskStatus {
    /// Position in the status progression (todo = 0 .. done = 3)
    #[must_use]
    pub const fn progression(self) -> u8 {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Review => write!(f, "review"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" | "inprogress" | "started" => Ok(Self::InProgress),
            "review" | "in_review" => Ok(Self::Review),
            "done" | "complete" | "completed" => Ok(Self::Done),
            _ => Err(format!("Invalid status: {s}. Use: todo, in_progress, review, done")),
        }
    }
}

/// Task priority, ordered by severity (low < medium < high < urgent)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal work (default)
    #[default]
    Medium,
    /// Should be done soon
    High,
    /// Drop everything
    Urgent,
}

impl Priority {
    /// Numeric severity used for comparison (urgent = 4 .. low = 1)
    ///
    /// Comparison only - not exposed as a public statistic.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Urgent => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" | "critical" => Ok(Self::Urgent),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high, urgent")),
        }
    }
}

/// A task - a unit of work owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (auto-generated: TSK-N)
    pub id: String,

    /// What needs to be done
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Priority level
    pub priority: Priority,

    /// When this task is due, if scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Owning project, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Owning user
    pub user_id: String,

    /// When this task was created
    pub created_at: DateTime<Utc>,

    /// When this task was last updated
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check whether this task still counts as open work
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done
    }
}

/// Data for creating a new task
///
/// The store assigns the identifier and timestamps on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// What needs to be done
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Initial status (defaults to todo)
    pub status: Option<TaskStatus>,

    /// Priority level (defaults to medium)
    pub priority: Option<Priority>,

    /// When this task is due, if scheduled
    pub due_date: Option<DateTime<Utc>>,

    /// Owning project, if any
    pub project_id: Option<String>,

    /// Owning user
    pub user_id: String,
}

impl NewTask {
    /// Create a new task payload with the given title and owner
    #[must_use]
    pub fn new(title: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            project_id: None,
            user_id: user_id.into(),
        }
    }
}
