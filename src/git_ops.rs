use git2::{DiffStatsFormat, Repository};
use std::path::Path;

use crate::error::{BumpError, Result};

/// Wrapper around git2 Repository for diff inspection.
///
/// Provides the single high-level operation git-bump needs: the textual
/// stat summary of the change-set between HEAD and its immediate parent.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        Self::open(".")
    }

    /// Opens a repository discovered from an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| BumpError::diff(format!("Not in a git repository: {}", e)))?;
        Ok(GitRepo { repo })
    }

    /// Renders the diff between HEAD~1 and HEAD as a textual stat summary.
    ///
    /// The output matches the `git diff --stat` format, including the trailing
    /// `N files changed, X insertions(+), Y deletions(-)` summary line.
    ///
    /// # Returns
    /// * `Ok(String)` - The stat summary text
    /// * `Err` - If HEAD is missing or has no parent (root commit)
    pub fn diff_stat_since_parent(&self) -> Result<String> {
        let head = self
            .repo
            .head()?
            .peel_to_commit()
            .map_err(|e| BumpError::diff(format!("Cannot resolve HEAD commit: {}", e)))?;

        let parent = head.parent(0).map_err(|_| {
            BumpError::diff("HEAD has no parent commit; nothing to compare against")
        })?;

        let old_tree = parent.tree()?;
        let new_tree = head.tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)?;
        let stats = diff.stats()?;
        let buf = stats.to_buf(DiffStatsFormat::FULL, 80)?;

        let text = buf
            .as_str()
            .ok_or_else(|| BumpError::diff("Diff stat output is not valid UTF-8"))?;

        Ok(text.to_string())
    }
}
