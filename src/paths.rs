//! Centralized path definitions for taskflow
//!
//! Single source of truth for all filesystem paths.
//!
//! ## Storage Layout
//!
//! ### Per-Workspace (working directory)
//!
//! ```text
//! workspace/
//! └── .taskflow/                  # Local state
//!     ├── config.toml             # Workspace configuration
//!     ├── tasks.toml              # Task records
//!     ├── notifications.json      # Issued notifications
//!     └── comments.json           # Task comments
//! ```
//!
//! ### Global (user-level)
//!
//! ```text
//! ~/.taskflow/
//! └── config.toml                 # User-level defaults
//! ```

use std::path::{Path, PathBuf};

/// Directory name for local taskflow state
pub const TASKFLOW_DIR: &str = ".taskflow";

/// Workspace configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Task records filename
const TASKS_FILE: &str = "tasks.toml";

/// Issued notifications filename
const NOTIFICATIONS_FILE: &str = "notifications.json";

/// Task comments filename
const COMMENTS_FILE: &str = "comments.json";

/// Get the `.taskflow/` state directory under a workspace root
#[must_use]
pub fn taskflow_dir(root: &Path) -> PathBuf {
    root.join(TASKFLOW_DIR)
}

/// Get the workspace config file path
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    taskflow_dir(root).join(CONFIG_FILE)
}

/// Get the task records file path
#[must_use]
pub fn tasks_file(root: &Path) -> PathBuf {
    taskflow_dir(root).join(TASKS_FILE)
}

/// Get the issued notifications file path
#[must_use]
pub fn notifications_file(root: &Path) -> PathBuf {
    taskflow_dir(root).join(NOTIFICATIONS_FILE)
}

/// Get the task comments file path
#[must_use]
pub fn comments_file(root: &Path) -> PathBuf {
    taskflow_dir(root).join(COMMENTS_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".taskflow";

/// Get the global taskflow directory.
///
/// Returns `~/.taskflow/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.taskflow/config.toml`. Used as a fallback when the
/// workspace has no config of its own.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
