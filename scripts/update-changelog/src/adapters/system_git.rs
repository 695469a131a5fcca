use std::path::{Path, PathBuf};

use duct::cmd;

use crate::{
    error::{Error, Result},
    ports::git::GitPort,
};

/// Runs the system `git` inside one working tree.
pub struct SystemGit {
    work_tree: PathBuf,
}

impl SystemGit {
    /// Opens the working tree at `path`, failing if it is missing or not under git.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::RepositoryNotFound(path.to_path_buf()));
        }

        let inside = cmd!("git", "rev-parse", "--is-inside-work-tree")
            .dir(path)
            .stderr_null()
            .unchecked()
            .read()
            .map_err(|source| Error::Git {
                command: "git rev-parse --is-inside-work-tree".to_string(),
                source,
            })?;
        if inside.trim() != "true" {
            return Err(Error::NotAGitRepository(path.to_path_buf()));
        }

        let top_level = Self::run_in(path, &["rev-parse", "--show-toplevel"])?;

        Ok(Self {
            work_tree: PathBuf::from(top_level),
        })
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        Self::run_in(&self.work_tree, args)
    }

    fn run_in(dir: &Path, args: &[&str]) -> Result<String> {
        tracing::debug!(dir = %dir.display(), "git {}", args.join(" "));
        cmd("git", args)
            .dir(dir)
            .stdin_null()
            .read()
            .map_err(|source| Error::Git {
                command: format!("git {}", args.join(" ")),
                source,
            })
    }
}

impl GitPort for SystemGit {
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        let range = match tag {
            Some(tag) => format!("{tag}..HEAD"),
            None => "HEAD".to_string(),
        };
        let output = self.run(&["rev-list", &range])?;

        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["branch", "--show-current"])
    }

    fn create_branch(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch]).map(|_| ())
    }

    fn add(&self, path: &Path) -> Result<()> {
        let path = path.to_string_lossy();
        self.run(&["add", &path]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn push(&self, branch: &str) -> Result<()> {
        self.run(&["push", "--set-upstream", "origin", branch])
            .map(|_| ())
    }
}
