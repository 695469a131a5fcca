use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown repository '{0}', expected one of: vscode-powershell, PowerShellEditorServices")]
    UnknownRepository(String),
    #[error("Invalid version '{0}': versions must start with 'v'")]
    InvalidVersion(String),
    #[error("Repository directory {0:?} does not exist")]
    RepositoryNotFound(PathBuf),
    #[error("{0:?} is not a git working tree")]
    NotAGitRepository(PathBuf),
    #[error("GITHUB_TOKEN is not set in the environment")]
    MissingToken,
    #[error("PR #{number} ({url}) references an issue without a number: '{reference}'")]
    MalformedIssueReference {
        number: u64,
        url: String,
        reference: String,
    },
    #[error("Changelog {path:?} is malformed: {reason}")]
    MalformedChangelog { path: PathBuf, reason: String },
    #[error("`{command}` failed: {source}")]
    Git {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("GitHub error: {0}")]
    GitHub(#[from] octocrab::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
