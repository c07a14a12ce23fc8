//! Task storage
//!
//! Stores tasks in a single TOML file: `.taskflow/tasks.toml`. Every
//! operation reloads the file and writes it back, which gives
//! read-your-writes consistency within a process - enough for the dedup
//! queries the rule engine runs in this single-process CLI.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{NewTask, Task};
use crate::core::ports::{TaskFilter, TaskStore};
use crate::paths;

/// Errors that can occur decoding a task entry from the file
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Status string is not a known status
    #[error("task {id}: {message}")]
    InvalidStatus {
        /// Task the bad value belongs to
        id: String,
        /// Parse error detail
        message: String,
    },

    /// Priority string is not a known priority
    #[error("task {id}: {message}")]
    InvalidPriority {
        /// Task the bad value belongs to
        id: String,
        /// Parse error detail
        message: String,
    },

    /// Timestamp is not valid RFC3339
    #[error("task {id}: invalid {field}: {value}")]
    InvalidTimestamp {
        /// Task the bad value belongs to
        id: String,
        /// Which timestamp field was malformed
        field: &'static str,
        /// The malformed value
        value: String,
    },
}

/// Task file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskFile {
    /// File metadata
    #[serde(default)]
    meta: TaskFileMeta,

    /// Task records
    #[serde(default, rename = "task")]
    tasks: Vec<TaskEntry>,
}

/// Task file metadata
#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskFileMeta {
    /// Next numeric id to assign
    #[serde(default)]
    next_id: u32,
}

/// Task entry in TOML (serialization format)
///
/// Enum and timestamp fields are stored as strings and parsed strictly on
/// load; a malformed value is a load error, not a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskEntry {
    /// Task ID (TSK-N)
    id: String,
    /// Task title
    title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Status: todo, in_progress, review, done
    status: String,
    /// Priority: low, medium, high, urgent
    priority: String,
    /// Due date (RFC3339), if scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    /// Owning project, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    /// Owning user
    user_id: String,
    /// When created (RFC3339)
    created_at: String,
    /// When last updated (RFC3339)
    updated_at: String,
}

fn parse_timestamp(value: &str, field: &'static str, id: &str) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc)).map_err(|_| {
        DecodeError::InvalidTimestamp {
            id: id.to_string(),
            field,
            value: value.to_string(),
        }
    })
}

impl TaskEntry {
    /// Convert to the Task model, rejecting malformed fields
    fn to_task(&self) -> Result<Task, DecodeError> {
        Ok(Task {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.parse().map_err(|message| DecodeError::InvalidStatus {
                id: self.id.clone(),
                message,
            })?,
            priority: self.priority.parse().map_err(|message| DecodeError::InvalidPriority {
                id: self.id.clone(),
                message,
            })?,
            due_date: self
                .due_date
                .as_deref()
                .map(|s| parse_timestamp(s, "due_date", &self.id))
                .transpose()?,
            project_id: self.project_id.clone(),
            user_id: self.user_id.clone(),
            created_at: parse_timestamp(&self.created_at, "created_at", &self.id)?,
            updated_at: parse_timestamp(&self.updated_at, "updated_at", &self.id)?,
        })
    }

    /// Create from the Task model
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            due_date: task.due_date.map(|d| d.to_rfc3339()),
            project_id: task.project_id.clone(),
            user_id: task.user_id.clone(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

/// TOML-file-backed task store
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    root: PathBuf,
}

impl FileTaskStore {
    /// Create a store rooted at the given workspace directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load(&self) -> anyhow::Result<TaskFile> {
        let path = paths::tasks_file(&self.root);
        if !path.exists() {
            return Ok(TaskFile::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    fn store(&self, file: &TaskFile) -> anyhow::Result<()> {
        let dir = paths::taskflow_dir(&self.root);
        fs::create_dir_all(&dir)?;
        let content = toml::to_string_pretty(file)?;
        fs::write(paths::tasks_file(&self.root), content)?;
        Ok(())
    }
}

impl TaskStore for FileTaskStore {
    fn find(&self, filter: &TaskFilter) -> anyhow::Result<Vec<Task>> {
        let file = self.load()?;
        let mut tasks = Vec::new();
        for entry in &file.tasks {
            let task = entry.to_task()?;
            if filter.matches(&task) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Task>> {
        let file = self.load()?;
        Ok(file.tasks.iter().find(|e| e.id == id).map(TaskEntry::to_task).transpose()?)
    }

    fn create(&self, data: &NewTask) -> anyhow::Result<Task> {
        let mut file = self.load()?;
        let numeric = file.meta.next_id.max(1);
        file.meta.next_id = numeric + 1;

        let now = Utc::now();
        let task = Task {
            id: format!("TSK-{numeric}"),
            title: data.title.clone(),
            description: data.description.clone(),
            status: data.status.unwrap_or_default(),
            priority: data.priority.unwrap_or_default(),
            due_date: data.due_date,
            project_id: data.project_id.clone(),
            user_id: data.user_id.clone(),
            created_at: now,
            updated_at: now,
        };

        file.tasks.push(TaskEntry::from_task(&task));
        self.store(&file)?;
        Ok(task)
    }

    fn update(&self, task: &Task) -> anyhow::Result<Task> {
        let mut file = self.load()?;
        let entry = file
            .tasks
            .iter_mut()
            .find(|e| e.id == task.id)
            .with_context(|| format!("Task '{}' not found", task.id))?;

        let mut updated = task.clone();
        updated.updated_at = Utc::now();
        *entry = TaskEntry::from_task(&updated);
        self.store(&file)?;
        Ok(updated)
    }

    fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let mut file = self.load()?;
        let len_before = file.tasks.len();
        file.tasks.retain(|e| e.id != id);
        let removed = file.tasks.len() < len_before;
        if removed {
            self.store(&file)?;
        }
        Ok(removed)
    }
}
