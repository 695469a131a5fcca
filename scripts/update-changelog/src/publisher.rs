use std::path::Path;

use dialoguer::Confirm;

use crate::{
    domain::models::{NewRelease, Release, RemoteRepository, Version},
    error::Result,
    ports::{git::GitPort, github::GitHubPort},
};

/// Decides whether the changelog gets committed and pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitGate {
    /// Never commit.
    DryRun,
    /// Ask on the terminal.
    Prompt,
    /// Commit without asking.
    Proceed,
}

impl CommitGate {
    pub fn from_flags(dry_run: bool, yes: bool) -> Self {
        match (dry_run, yes) {
            (true, _) => CommitGate::DryRun,
            (false, true) => CommitGate::Proceed,
            (false, false) => CommitGate::Prompt,
        }
    }

    pub fn allows(&self, prompt: &str) -> Result<bool> {
        match self {
            CommitGate::DryRun => Ok(false),
            CommitGate::Proceed => Ok(true),
            CommitGate::Prompt => Ok(Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?),
        }
    }
}

pub fn commit_message(version: &Version) -> String {
    format!("Update CHANGELOG for `{version}`")
}

/// Commits `changelog` on the release branch, creating it when needed, and pushes it.
pub fn commit_changelog<V: GitPort>(git: &V, version: &Version, changelog: &Path) -> Result<()> {
    let branch = version.release_branch();
    if git.current_branch()?.trim() != branch {
        tracing::info!(%branch, "creating release branch");
        git.create_branch(&branch)?;
    }

    git.add(changelog)?;
    git.commit(&commit_message(version))?;
    git.push(&branch)?;
    tracing::info!(%branch, "pushed changelog");

    Ok(())
}

pub async fn draft_release<G: GitHubPort>(
    github: &G,
    remote: &RemoteRepository,
    version: &Version,
    body: String,
) -> Result<Release> {
    let release = NewRelease::draft(version, body);
    let created = github
        .create_release(&remote.owner, &remote.name, &release)
        .await?;
    tracing::info!(
        tag = %created.tag_name,
        prerelease = created.prerelease,
        url = created.html_url.as_ref().map(|url| url.as_str()).unwrap_or_default(),
        "drafted release"
    );

    Ok(created)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingGit {
        branch: String,
        calls: RefCell<Vec<String>>,
    }

    impl GitPort for RecordingGit {
        fn commits_since(&self, _tag: Option<&str>) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn current_branch(&self) -> Result<String> {
            Ok(self.branch.clone())
        }

        fn create_branch(&self, branch: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("checkout -b {branch}"));
            Ok(())
        }

        fn add(&self, path: &Path) -> Result<()> {
            self.calls.borrow_mut().push(format!("add {}", path.display()));
            Ok(())
        }

        fn commit(&self, message: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("commit {message}"));
            Ok(())
        }

        fn push(&self, branch: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("push {branch}"));
            Ok(())
        }
    }

    #[test]
    fn release_branch_is_created_when_missing() {
        // given
        let git = RecordingGit {
            branch: "main".to_string(),
            ..Default::default()
        };
        let version: Version = "v2023.5.0".parse().unwrap();

        // when
        commit_changelog(&git, &version, Path::new("CHANGELOG.md")).unwrap();

        // then
        assert_eq!(
            git.calls.into_inner(),
            vec![
                "checkout -b release/v2023.5.0",
                "add CHANGELOG.md",
                "commit Update CHANGELOG for `v2023.5.0`",
                "push release/v2023.5.0",
            ]
        );
    }

    #[test]
    fn existing_release_branch_is_reused() {
        let git = RecordingGit {
            branch: "release/v2023.5.0\n".to_string(),
            ..Default::default()
        };
        let version: Version = "v2023.5.0".parse().unwrap();

        commit_changelog(&git, &version, Path::new("CHANGELOG.md")).unwrap();

        assert!(!git.calls.borrow().iter().any(|call| call.starts_with("checkout")));
    }

    #[test]
    fn gate_follows_flags() {
        assert_eq!(CommitGate::from_flags(true, false), CommitGate::DryRun);
        assert_eq!(CommitGate::from_flags(false, true), CommitGate::Proceed);
        assert_eq!(CommitGate::from_flags(false, false), CommitGate::Prompt);
        assert!(!CommitGate::DryRun.allows("commit?").unwrap());
        assert!(CommitGate::Proceed.allows("commit?").unwrap());
    }
}
