use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use url::Url;

use crate::error::Error;

/// Organization that owns every repository this tool releases.
pub const OWNER: &str = "PowerShell";

/// Marker that turns a version into a GitHub pre-release.
pub const PRERELEASE_MARKER: &str = "-preview";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RepoName {
    #[value(name = "vscode-powershell")]
    VscodePowerShell,
    #[value(name = "PowerShellEditorServices")]
    PowerShellEditorServices,
}

impl RepoName {
    pub const ALL: [RepoName; 2] = [RepoName::VscodePowerShell, RepoName::PowerShellEditorServices];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepoName::VscodePowerShell => "vscode-powershell",
            RepoName::PowerShellEditorServices => "PowerShellEditorServices",
        }
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoName::ALL
            .into_iter()
            .find(|repo| repo.as_str() == s)
            .ok_or_else(|| Error::UnknownRepository(s.to_string()))
    }
}

/// A release version such as `v2023.5.0` or `v2023.5.1-preview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_prerelease(&self) -> bool {
        self.0.contains(PRERELEASE_MARKER)
    }

    /// Branch the changelog commit is pushed to.
    pub fn release_branch(&self) -> String {
        format!("release/{}", self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('v') {
            Ok(Version(s.to_string()))
        } else {
            Err(Error::InvalidVersion(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub labels: Vec<String>,
    pub merge_commit_sha: Option<String>,
    pub html_url: Url,
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    pub draft: bool,
    pub prerelease: bool,
    pub body: Option<String>,
    pub html_url: Option<Url>,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for a release that is about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl NewRelease {
    pub fn draft(version: &Version, body: String) -> Self {
        Self {
            tag_name: version.to_string(),
            name: version.to_string(),
            body,
            draft: true,
            prerelease: version.is_prerelease(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub owner: String,
    pub name: String,
    pub default_branch: Option<String>,
}
