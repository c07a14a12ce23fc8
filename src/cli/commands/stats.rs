//! Dashboard statistics and analytics

use taskflow::core::ports::{Clock as _, SystemClock, TaskFilter, TaskStore as _};
use taskflow::core::services::classifier;
use taskflow::output::{AnalyticsResult, OutputMode, StatsResult};
use taskflow::storage::FileTaskStore;

/// Show status counts and the completion rate
pub fn stats(mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let tasks = FileTaskStore::new(&root).find(&TaskFilter::default())?;

    let counts = classifier::compute_stats(&tasks);
    StatsResult {
        total: counts.total,
        todo: counts.todo,
        in_progress: counts.in_progress,
        done: counts.done,
        completion_rate: classifier::completion_rate(&tasks),
    }
    .render(mode);
    Ok(())
}

/// Show the full dashboard summary
pub fn analytics(mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let tasks = FileTaskStore::new(&root).find(&TaskFilter::default())?;

    let now = SystemClock.now();
    AnalyticsResult {
        analytics: classifier::task_analytics(&tasks, now),
    }
    .render(mode);
    Ok(())
}
