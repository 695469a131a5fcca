use octocrab::{models, params, Octocrab};
use url::Url;

use crate::{
    domain::models::{NewRelease, PullRequest, Release, RemoteRepository},
    error::Result,
    ports::github::GitHubPort,
};

pub struct OctocrabAdapter {
    client: Octocrab,
}

impl OctocrabAdapter {
    pub fn new(token: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { client })
    }

    fn to_pull_request(
        owner: &str,
        repo: &str,
        pr: models::pulls::PullRequest,
    ) -> Result<PullRequest> {
        let html_url = match pr.html_url {
            Some(url) => url,
            None => Url::parse(&format!(
                "https://github.com/{owner}/{repo}/pull/{}",
                pr.number
            ))?,
        };

        Ok(PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            author: pr.user.map(|user| user.login).unwrap_or_default(),
            labels: pr
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|label| label.name)
                .collect(),
            merge_commit_sha: pr.merge_commit_sha,
            html_url,
            merged_at: pr.merged_at,
        })
    }

    fn to_release(release: models::repos::Release) -> Release {
        Release {
            tag_name: release.tag_name,
            draft: release.draft,
            prerelease: release.prerelease,
            body: release.body,
            html_url: Some(release.html_url),
            created_at: release.created_at,
            published_at: release.published_at,
        }
    }
}

impl GitHubPort for OctocrabAdapter {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RemoteRepository> {
        let repository = self.client.repos(owner, repo).get().await?;

        Ok(RemoteRepository {
            owner: repository
                .owner
                .map(|owner| owner.login)
                .unwrap_or_else(|| owner.to_string()),
            name: repository.name,
            default_branch: repository.default_branch,
        })
    }

    /// Query GitHub for all releases in the repository.
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let first_page = self
            .client
            .repos(owner, repo)
            .releases()
            .list()
            .per_page(100)
            .send()
            .await?;
        let releases = self.client.all_pages(first_page).await?;

        Ok(releases.into_iter().map(Self::to_release).collect())
    }

    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>> {
        let first_page = self
            .client
            .pulls(owner, repo)
            .list()
            .state(params::State::Closed)
            .per_page(100)
            .send()
            .await?;
        let pulls = self.client.all_pages(first_page).await?;
        tracing::debug!(count = pulls.len(), "fetched closed pull requests");

        pulls
            .into_iter()
            .map(|pr| Self::to_pull_request(owner, repo, pr))
            .collect()
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &NewRelease,
    ) -> Result<Release> {
        let created = self
            .client
            .repos(owner, repo)
            .releases()
            .create(&release.tag_name)
            .name(&release.name)
            .body(&release.body)
            .draft(release.draft)
            .prerelease(release.prerelease)
            .send()
            .await?;

        Ok(Self::to_release(created))
    }
}
