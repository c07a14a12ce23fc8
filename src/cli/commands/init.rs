//! Initialize taskflow in the current directory

use taskflow::config::TaskFlowConfig;
use taskflow::output::{OperationResult, OutputMode};
use taskflow::paths;

/// Create `.taskflow/` with a default configuration
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    let config_path = paths::config_file(&root);

    if config_path.exists() && !force {
        OperationResult {
            success: true,
            message: "taskflow already initialized (use --force to reset the config)".to_string(),
        }
        .render(mode);
        return Ok(());
    }

    TaskFlowConfig::default().save(&root)?;

    OperationResult {
        success: true,
        message: format!("Initialized taskflow in {}/", paths::TASKFLOW_DIR),
    }
    .render(mode);
    Ok(())
}
