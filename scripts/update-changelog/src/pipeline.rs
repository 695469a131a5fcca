use chrono::NaiveDate;

use crate::{
    domain::{
        bullet::format_bullets,
        changelog::{generate_section, insert_section, DayStyle},
        collector::collect_merged_pull_requests,
        config::ChangelogConfig,
        models::{PullRequest, Release, RemoteRepository, RepoName, Version},
    },
    error::Result,
    ports::{changelog_writer::ChangelogWriter, git::GitPort, github::GitHubPort},
    publisher::{commit_changelog, draft_release, CommitGate},
};

/// What a completed run produced.
#[derive(Debug)]
pub struct Outcome {
    pub pull_requests: Vec<PullRequest>,
    pub section: Vec<String>,
    pub committed: bool,
    pub release: Release,
}

/// Collect, format, write, commit, draft. Stops at the first error, which may
/// leave the changelog written but not committed.
pub struct Pipeline<'a, G, V, W> {
    pub remote: &'a RemoteRepository,
    pub github: &'a G,
    pub git: &'a V,
    pub changelog: &'a W,
    pub config: &'a ChangelogConfig,
}

impl<G, V, W> Pipeline<'_, G, V, W>
where
    G: GitHubPort,
    V: GitPort,
    W: ChangelogWriter,
{
    pub async fn run(
        &self,
        repo: RepoName,
        version: &Version,
        date: NaiveDate,
        gate: CommitGate,
    ) -> Result<Outcome> {
        let pull_requests =
            collect_merged_pull_requests(self.github, self.git, self.remote, self.config).await?;
        let bullets = format_bullets(&pull_requests, repo, self.config)?;

        let existing = self.changelog.read_changelog()?;
        let section = generate_section(version, date, DayStyle::detect(&existing), &bullets);
        let updated = insert_section(self.changelog.path(), &existing, &section)?;
        self.changelog.write_changelog(&updated)?;
        tracing::info!(path = %self.changelog.path().display(), "updated changelog");

        let prompt = format!(
            "Commit and push {} on {}?",
            self.changelog.path().display(),
            version.release_branch()
        );
        let committed = gate.allows(&prompt)?;
        if committed {
            commit_changelog(self.git, version, self.changelog.path())?;
        } else {
            tracing::info!("skipping commit");
        }

        let release = draft_release(self.github, self.remote, version, section.join("\n")).await?;

        Ok(Outcome {
            pull_requests,
            section,
            committed,
            release,
        })
    }
}
