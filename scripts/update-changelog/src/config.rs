use std::{env, path::PathBuf};

use crate::{
    cli::Cli,
    domain::models::{RepoName, Version},
    error::{Error, Result},
    publisher::CommitGate,
    resolver::default_repos_dir,
};

/// Everything a run needs, gathered from the command line and the environment.
#[derive(Debug)]
pub struct Settings {
    pub github_token: String,
    pub repository: RepoName,
    pub version: Version,
    pub repos_dir: PathBuf,
    pub changelog_file: PathBuf,
    pub gate: CommitGate,
}

impl Settings {
    /// Loads `.env` if present, then reads `GITHUB_TOKEN`.
    pub fn load(cli: Cli) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_cli(cli, env::var("GITHUB_TOKEN").ok())
    }

    pub fn from_cli(cli: Cli, github_token: Option<String>) -> Result<Self> {
        let github_token = github_token
            .filter(|token| !token.trim().is_empty())
            .ok_or(Error::MissingToken)?;
        let repos_dir = match cli.repos_dir {
            Some(dir) => dir,
            None => default_repos_dir()?,
        };

        Ok(Self {
            github_token,
            repository: cli.repository,
            version: cli.version,
            repos_dir,
            changelog_file: cli.changelog,
            gate: CommitGate::from_flags(cli.dry_run, cli.yes),
        })
    }
}
