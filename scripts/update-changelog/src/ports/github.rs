use crate::{
    domain::models::{NewRelease, PullRequest, Release, RemoteRepository},
    error::Result,
};

#[allow(async_fn_in_trait)]
pub trait GitHubPort {
    /// Look up the repository record, failing if it does not exist.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RemoteRepository>;

    /// Retrieve every release of the repository, drafts included.
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>>;

    /// Retrieve every closed pull request of the repository, in API order.
    async fn list_closed_pull_requests(&self, owner: &str, repo: &str)
        -> Result<Vec<PullRequest>>;

    async fn create_release(&self, owner: &str, repo: &str, release: &NewRelease)
        -> Result<Release>;
}
