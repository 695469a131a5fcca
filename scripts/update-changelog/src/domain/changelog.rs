use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    domain::models::Version,
    error::{Error, Result},
};

/// Lines at the top of `CHANGELOG.md` that stay above every release section.
pub const HEADER_LINES: usize = 2;

static DATED_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^###\s+[A-Za-z]+,\s+[A-Za-z]+\s+(?P<day>[0-9]{1,2}),\s+[0-9]{4}\s*$").unwrap()
});

/// How the day of the month is written in release headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayStyle {
    /// `May 07, 2023`
    #[default]
    Padded,
    /// `May 7, 2023`
    Unpadded,
}

impl DayStyle {
    /// Follows the newest heading whose day tells the styles apart (days 1-9).
    /// Falls back to `Padded` when no heading does.
    pub fn detect(existing: &[String]) -> Self {
        existing
            .iter()
            .filter_map(|line| DATED_HEADING.captures(line))
            .find_map(|captures| match &captures["day"] {
                day if day.len() == 1 => Some(DayStyle::Unpadded),
                day if day.starts_with('0') => Some(DayStyle::Padded),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn pattern(self) -> &'static str {
        match self {
            DayStyle::Padded => "%A, %B %d, %Y",
            DayStyle::Unpadded => "%A, %B %-d, %Y",
        }
    }
}

/// e.g. `Wednesday, May 17, 2023`
pub fn release_date(date: NaiveDate, style: DayStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// The block for one release: version heading, dated sub-heading, a blank line,
/// then the bullets.
pub fn generate_section(
    version: &Version,
    date: NaiveDate,
    style: DayStyle,
    bullets: &[String],
) -> Vec<String> {
    let mut section = vec![
        format!("## {version}"),
        format!("### {}", release_date(date, style)),
        String::new(),
    ];
    section.extend(bullets.iter().cloned());
    section
}

/// Places `section` right after the header, separated from the previous
/// release by one blank line. Nothing from the original file is dropped or
/// repeated.
pub fn insert_section(path: &Path, existing: &[String], section: &[String]) -> Result<Vec<String>> {
    if existing.len() < HEADER_LINES {
        return Err(Error::MalformedChangelog {
            path: path.to_path_buf(),
            reason: format!("expected at least {HEADER_LINES} header lines"),
        });
    }

    let (header, releases) = existing.split_at(HEADER_LINES);

    let mut lines = Vec::with_capacity(existing.len() + section.len() + 1);
    lines.extend_from_slice(header);
    lines.extend_from_slice(section);
    lines.push(String::new());
    lines.extend_from_slice(releases);

    Ok(lines)
}
