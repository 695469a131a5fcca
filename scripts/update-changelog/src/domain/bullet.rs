use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    domain::{
        config::ChangelogConfig,
        models::{PullRequest, RepoName},
    },
    error::{Error, Result},
};

/// A closing keyword followed by something that looks like an issue reference:
/// `#12`, `PowerShell/vscode-powershell#12` or a full issue/pull URL. The number
/// is the digit run right after the first marker, so anything trailing it
/// (`#12's`, `/issues/12#issuecomment-99`) is ignored.
static CLOSING_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:close[sd]?|fix(?:es|ed)?|resolve[sd]?):?\s+(?P<reference>(?P<qualifier>\S*?)(?:#|/issues/|/pull/)(?P<number>[0-9]+)?)",
    )
    .unwrap()
});

/// Where a bullet links to: `<repo> #<number>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLink {
    pub repo: String,
    pub number: u64,
}

impl std::fmt::Display for IssueLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.repo, self.number)
    }
}

pub fn emoji_for(labels: &[String], config: &ChangelogConfig) -> String {
    let emoji: String = labels
        .iter()
        .filter_map(|label| config.emoji.get(label))
        .map(String::as_str)
        .collect();

    if emoji.is_empty() {
        config.placeholder.clone()
    } else {
        emoji
    }
}

/// Finds the issue a pull request closes. Falls back to the pull request itself
/// when its body has no closing keyword.
pub fn issue_link(
    pr: &PullRequest,
    repo: RepoName,
    config: &ChangelogConfig,
) -> Result<IssueLink> {
    let Some(captures) = CLOSING_REFERENCE.captures(&pr.body) else {
        return Ok(IssueLink {
            repo: repo.to_string(),
            number: pr.number,
        });
    };

    let number = captures
        .name("number")
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .ok_or_else(|| Error::MalformedIssueReference {
            number: pr.number,
            url: pr.html_url.to_string(),
            reference: captures["reference"].to_string(),
        })?;

    let lowered = captures["qualifier"].to_lowercase();
    let target = config
        .known_repos
        .iter()
        .find(|known| lowered.contains(&known.as_str().to_lowercase()))
        .copied()
        .unwrap_or(repo);

    Ok(IssueLink {
        repo: target.to_string(),
        number,
    })
}

pub fn thanks(author: &str, config: &ChangelogConfig) -> Option<String> {
    config
        .should_thank(author)
        .then(|| format!("(Thanks @{author}!)"))
}

/// Renders one changelog line for a pull request merged into `repo`.
pub fn format_bullet(pr: &PullRequest, repo: RepoName, config: &ChangelogConfig) -> Result<String> {
    let emoji = emoji_for(&pr.labels, config);
    let link = issue_link(pr, repo, config)?;
    let title = pr.title.trim().trim_end_matches('.');

    let mut parts = vec![
        "-".to_string(),
        emoji,
        format!("[{link}]({})", pr.html_url),
        "-".to_string(),
        format!("{title}."),
    ];
    parts.extend(thanks(&pr.author, config));

    Ok(parts.join(" "))
}

/// Formats every pull request, stopping at the first malformed one.
pub fn format_bullets(
    prs: &[PullRequest],
    repo: RepoName,
    config: &ChangelogConfig,
) -> Result<Vec<String>> {
    prs.iter()
        .map(|pr| format_bullet(pr, repo, config))
        .collect()
}
