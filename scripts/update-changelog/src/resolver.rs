use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    adapters::system_git::SystemGit,
    domain::models::{RemoteRepository, RepoName, OWNER},
    error::Result,
    ports::github::GitHubPort,
};

/// Parent directory of the checkout this tool was built from. The repositories
/// it releases are expected to be cloned next to it.
pub fn default_repos_dir() -> Result<PathBuf> {
    let own_checkout = SystemGit::open(Path::new(env!("CARGO_MANIFEST_DIR")))?;
    let work_tree = own_checkout.work_tree();

    Ok(work_tree
        .parent()
        .unwrap_or(work_tree)
        .to_path_buf())
}

/// Opens `<repos_dir>/<repo>` and makes it the working directory.
pub fn resolve_local(repos_dir: &Path, repo: RepoName) -> Result<SystemGit> {
    let git = SystemGit::open(&repos_dir.join(repo.as_str()))?;
    env::set_current_dir(git.work_tree())?;
    tracing::info!(path = %git.work_tree().display(), "using local checkout");

    Ok(git)
}

pub async fn resolve_remote<G: GitHubPort>(github: &G, repo: RepoName) -> Result<RemoteRepository> {
    let remote = github.get_repository(OWNER, repo.as_str()).await?;
    tracing::info!(
        owner = %remote.owner,
        name = %remote.name,
        default_branch = ?remote.default_branch,
        "resolved remote repository"
    );

    Ok(remote)
}
