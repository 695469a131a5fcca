use std::collections::HashSet;

use crate::{
    domain::{
        config::ChangelogConfig,
        models::{PullRequest, Release, RemoteRepository},
    },
    error::Result,
    ports::{git::GitPort, github::GitHubPort},
};

/// Why a closed pull request is left out of the changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    OutOfRange,
    Bot,
    Ignored,
}

/// The most recently published, non-draft release.
pub fn select_baseline(releases: &[Release]) -> Option<&Release> {
    releases
        .iter()
        .filter(|release| !release.draft)
        .max_by_key(|release| release.published_at.or(release.created_at))
}

pub fn exclusion(
    pr: &PullRequest,
    commit_range: &HashSet<String>,
    config: &ChangelogConfig,
) -> Option<Exclusion> {
    let in_range = pr
        .merge_commit_sha
        .as_ref()
        .is_some_and(|sha| commit_range.contains(sha));

    if !in_range {
        Some(Exclusion::OutOfRange)
    } else if config.is_bot(&pr.author) {
        Some(Exclusion::Bot)
    } else if pr.labels.iter().any(|label| *label == config.ignore_label) {
        Some(Exclusion::Ignored)
    } else {
        None
    }
}

/// Splits closed pull requests into those that belong in the changelog and
/// those left out, both in their original order.
pub fn partition_merged(
    prs: Vec<PullRequest>,
    commit_range: &HashSet<String>,
    config: &ChangelogConfig,
) -> (Vec<PullRequest>, Vec<(PullRequest, Exclusion)>) {
    let mut kept = Vec::new();
    let mut excluded = Vec::new();
    for pr in prs {
        match exclusion(&pr, commit_range, config) {
            None => kept.push(pr),
            Some(reason) => {
                tracing::debug!(
                    number = pr.number,
                    author = %pr.author,
                    ?reason,
                    "skipping pull request"
                );
                excluded.push((pr, reason));
            }
        }
    }
    (kept, excluded)
}

/// Keeps the pull requests that belong in the changelog, in their original order.
pub fn retain_merged(
    prs: Vec<PullRequest>,
    commit_range: &HashSet<String>,
    config: &ChangelogConfig,
) -> Vec<PullRequest> {
    partition_merged(prs, commit_range, config).0
}

/// Pull requests merged since the latest release of `remote`.
pub async fn collect_merged_pull_requests<G, V>(
    github: &G,
    git: &V,
    remote: &RemoteRepository,
    config: &ChangelogConfig,
) -> Result<Vec<PullRequest>>
where
    G: GitHubPort,
    V: GitPort,
{
    let releases = github.list_releases(&remote.owner, &remote.name).await?;
    let baseline = select_baseline(&releases).map(|release| release.tag_name.as_str());
    match baseline {
        Some(tag) => tracing::info!(
            repo = %remote.name,
            baseline = tag,
            "collecting changes since last release"
        ),
        None => tracing::warn!(
            repo = %remote.name,
            "no previous release found, using the whole history"
        ),
    }

    let commit_range: HashSet<String> = git.commits_since(baseline)?.into_iter().collect();
    tracing::info!(commits = commit_range.len(), "commits in range");

    let closed = github
        .list_closed_pull_requests(&remote.owner, &remote.name)
        .await?;
    let merged = retain_merged(closed, &commit_range, config);
    for pr in &merged {
        tracing::debug!(
            number = pr.number,
            merged_at = ?pr.merged_at,
            title = %pr.title,
            "including pull request"
        );
    }
    tracing::info!(count = merged.len(), "pull requests selected");

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::*;

    fn pull_request(number: u64, sha: &str, author: &str, labels: &[&str]) -> PullRequest {
        PullRequest {
            number,
            title: format!("Change {number}"),
            body: String::new(),
            author: author.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            merge_commit_sha: Some(sha.to_string()),
            html_url: Url::parse(&format!(
                "https://github.com/PowerShell/vscode-powershell/pull/{number}"
            ))
            .unwrap(),
            merged_at: None,
        }
    }

    fn release(tag: &str, draft: bool, day: u32) -> Release {
        Release {
            tag_name: tag.to_string(),
            draft,
            prerelease: false,
            body: None,
            html_url: None,
            created_at: Some(Utc.with_ymd_and_hms(2023, 4, day, 0, 0, 0).unwrap()),
            published_at: (!draft).then(|| Utc.with_ymd_and_hms(2023, 4, day, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn only_qualifying_pull_requests_are_kept() {
        // given
        let range: HashSet<String> = ["a", "b", "c", "d"].map(String::from).into();
        let prs = vec![
            pull_request(1, "a", "someuser", &["Issue-Bug"]),
            pull_request(2, "z", "someuser", &[]),
            pull_request(3, "b", "dependabot[bot]", &[]),
            pull_request(4, "c", "someuser", &["Ignore"]),
            pull_request(5, "d", "andschwa", &[]),
        ];

        // when
        let kept = retain_merged(prs, &range, &ChangelogConfig::default());

        // then
        let numbers: Vec<u64> = kept.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![1, 5]);
    }

    #[test]
    fn every_skipped_pull_request_is_reported_with_its_reason() {
        // given
        let range: HashSet<String> = ["a", "b", "c"].map(String::from).into();
        let prs = vec![
            pull_request(1, "a", "someuser", &[]),
            pull_request(2, "z", "someuser", &[]),
            pull_request(3, "b", "dependabot[bot]", &[]),
            pull_request(4, "c", "someuser", &["Ignore"]),
        ];

        // when
        let (kept, excluded) = partition_merged(prs, &range, &ChangelogConfig::default());

        // then
        assert_eq!(kept.iter().map(|pr| pr.number).collect::<Vec<_>>(), vec![1]);
        let reasons: Vec<(u64, Exclusion)> =
            excluded.iter().map(|(pr, reason)| (pr.number, *reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (2, Exclusion::OutOfRange),
                (3, Exclusion::Bot),
                (4, Exclusion::Ignored),
            ]
        );
    }

    #[test]
    fn unmerged_pull_requests_are_out_of_range() {
        let mut pr = pull_request(1, "a", "someuser", &[]);
        pr.merge_commit_sha = None;
        let range: HashSet<String> = ["a".to_string()].into();

        let reason = exclusion(&pr, &range, &ChangelogConfig::default());

        assert_eq!(reason, Some(Exclusion::OutOfRange));
    }

    #[test]
    fn baseline_is_latest_published_release() {
        let releases = vec![
            release("v2023.3.0", false, 1),
            release("v2023.5.0-draft", true, 20),
            release("v2023.4.0", false, 10),
        ];

        let baseline = select_baseline(&releases).map(|r| r.tag_name.as_str());

        assert_eq!(baseline, Some("v2023.4.0"));
    }

    #[test]
    fn no_releases_means_no_baseline() {
        assert_eq!(select_baseline(&[]), None);
    }
}
