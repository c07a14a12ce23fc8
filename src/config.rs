//! Workspace configuration
//!
//! Settings are stored at `.taskflow/config.toml` in the workspace, with
//! `~/.taskflow/config.toml` as a user-level fallback. Missing files and
//! missing keys fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Workspace taskflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFlowConfig {
    /// Due-soon window in hours (tasks due inside it get flagged)
    #[serde(default = "default_due_soon_hours")]
    pub due_soon_hours: i64,

    /// Upcoming-tasks window in days
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// User that owns tasks created from this workspace
    #[serde(default = "default_user")]
    pub default_user: String,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_due_soon_hours() -> i64 {
    24
}

fn default_upcoming_window_days() -> i64 {
    7
}

fn default_user() -> String {
    "me".to_string()
}

impl Default for TaskFlowConfig {
    fn default() -> Self {
        Self {
            due_soon_hours: default_due_soon_hours(),
            upcoming_window_days: default_upcoming_window_days(),
            default_user: default_user(),
            ui: UiConfig::default(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme preference
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl TaskFlowConfig {
    /// Load config for a workspace
    ///
    /// Tries `.taskflow/config.toml` under `root`, then the global
    /// `~/.taskflow/config.toml`, then defaults. A file that fails to
    /// parse is treated as absent.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        for path in [paths::config_file(root), paths::global_config()] {
            if path.exists() {
                if let Some(config) =
                    fs::read_to_string(&path).ok().and_then(|content| toml::from_str(&content).ok())
                {
                    return config;
                }
                log::warn!("ignoring unreadable config at {}", path.display());
            }
        }
        Self::default()
    }

    /// Save config into a workspace
    pub fn save(&self, root: &Path) -> anyhow::Result<()> {
        let dir = paths::taskflow_dir(root);
        fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(paths::config_file(root), content)?;
        Ok(())
    }
}
