//! Comment storage
//!
//! Stores task comments in `.taskflow/comments.json`. Comments feed the
//! comment-added notification rule and the `show` command; there is no
//! port trait for them because the core only ever receives a comment by
//! value.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::models::Comment;
use crate::paths;

/// Comment file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct CommentFile {
    /// Next numeric id to assign
    #[serde(default)]
    next_id: u32,

    /// Comments, in post order
    #[serde(default)]
    comments: Vec<Comment>,
}

/// JSON-file-backed comment store
#[derive(Debug, Clone)]
pub struct FileCommentStore {
    root: PathBuf,
}

impl FileCommentStore {
    /// Create a store rooted at the given workspace directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load(&self) -> anyhow::Result<CommentFile> {
        let path = paths::comments_file(&self.root);
        if !path.exists() {
            return Ok(CommentFile::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    fn store(&self, file: &CommentFile) -> anyhow::Result<()> {
        let dir = paths::taskflow_dir(&self.root);
        fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(file)?;
        fs::write(paths::comments_file(&self.root), content)?;
        Ok(())
    }

    /// Append a comment to a task
    pub fn add(
        &self,
        task_id: &str,
        author_id: &str,
        author_name: &str,
        content: &str,
    ) -> anyhow::Result<Comment> {
        let mut file = self.load()?;
        let numeric = file.next_id.max(1);
        file.next_id = numeric + 1;

        let comment = Comment {
            id: format!("CMT-{numeric}"),
            task_id: task_id.to_string(),
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };

        file.comments.push(comment.clone());
        self.store(&file)?;
        Ok(comment)
    }

    /// List comments for a task, in post order
    pub fn list_for_task(&self, task_id: &str) -> anyhow::Result<Vec<Comment>> {
        let file = self.load()?;
        Ok(file.comments.into_iter().filter(|c| c.task_id == task_id).collect())
    }
}
