use std::path::Path;

use crate::error::Result;

/// The git operations needed to find new commits and publish the changelog.
pub trait GitPort {
    /// Hashes of the commits reachable from `HEAD` but not from `tag`. With no
    /// tag, the whole history.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<String>>;

    fn current_branch(&self) -> Result<String>;

    /// Create `branch` and switch to it.
    fn create_branch(&self, branch: &str) -> Result<()>;

    fn add(&self, path: &Path) -> Result<()>;

    fn commit(&self, message: &str) -> Result<()>;

    /// Push `branch` to `origin`, setting it as upstream.
    fn push(&self, branch: &str) -> Result<()>;
}
