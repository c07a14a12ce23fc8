//! Derived urgency classification
//!
//! Urgency is distinct from priority: it factors in the due date, priority
//! alone does not. It is computed on demand and never persisted.

use serde::{Deserialize, Serialize};

/// Urgency bucket for a task, ordered most-urgent-first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Overdue or due today
    Critical,
    /// Due within two days at high/urgent priority, or undated urgent work
    High,
    /// Due within the week
    Medium,
    /// Everything else
    Low,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}
