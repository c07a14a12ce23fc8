//! CLI command implementations
//!
//! Each command opens the file stores at the current working directory,
//! calls into the core, and renders a result via the output module.

use std::path::PathBuf;

mod add;
mod comment;
mod init;
mod list;
mod notifications;
#[cfg(feature = "api")]
mod serve;
mod show;
mod stats;
mod status;
mod sweep;
mod upcoming;

pub use add::add;
pub use comment::comment;
pub use init::init;
pub use list::list;
pub use notifications::{mark_read, notifications};
#[cfg(feature = "api")]
pub use serve::serve;
pub use show::show;
pub use stats::{analytics, stats};
pub use status::set_status;
pub use sweep::sweep;
pub use upcoming::upcoming;

/// The workspace root all commands operate on
pub(crate) fn workspace_root() -> anyhow::Result<PathBuf> {
    Ok(std::env::current_dir()?)
}
