use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::{RepoName, Version};

#[derive(Debug, Parser)]
#[command(about = "Updates CHANGELOG.md with the pull requests merged since the last release and drafts the GitHub release.")]
pub struct Cli {
    /// Repository to release
    #[arg(value_enum)]
    pub repository: RepoName,

    /// Version being released, e.g. v2023.5.0
    #[arg(value_parser = parse_version)]
    pub version: Version,

    /// Update the changelog and draft the release, but never commit or push
    #[arg(long)]
    pub dry_run: bool,

    /// Commit and push without asking first
    #[arg(short, long, conflicts_with = "dry_run")]
    pub yes: bool,

    /// Directory holding the repository checkouts. Defaults to the parent of
    /// the checkout this tool was built from.
    #[arg(long, env = "UPDATE_CHANGELOG_REPOS_DIR")]
    pub repos_dir: Option<PathBuf>,

    /// Changelog file, relative to the repository root
    #[arg(long, default_value = "CHANGELOG.md")]
    pub changelog: PathBuf,
}

fn parse_version(value: &str) -> Result<Version, String> {
    value.parse().map_err(|err: crate::error::Error| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_and_version_are_required() {
        // given
        let cli = "update-changelog vscode-powershell v2023.5.0";

        // when
        let cli = Cli::try_parse_from(cli.split_whitespace()).unwrap();

        // then
        assert_eq!(cli.repository, RepoName::VscodePowerShell);
        assert_eq!(cli.version.as_str(), "v2023.5.0");
        assert_eq!(cli.changelog, PathBuf::from("CHANGELOG.md"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn unknown_repository_is_rejected() {
        // given
        let cli = "update-changelog PowerShell v2023.5.0";

        // when
        let result = Cli::try_parse_from(cli.split_whitespace());

        // then
        assert!(result.is_err());
    }

    #[test]
    fn version_must_start_with_v() {
        // given
        let cli = "update-changelog PowerShellEditorServices 2023.5.0";

        // when
        let result = Cli::try_parse_from(cli.split_whitespace());

        // then
        assert!(result.is_err());
    }

    #[test]
    fn dry_run_conflicts_with_yes() {
        // given
        let cli = "update-changelog vscode-powershell v2023.5.0 --dry-run --yes";

        // when
        let result = Cli::try_parse_from(cli.split_whitespace());

        // then
        assert!(result.is_err());
    }
}
