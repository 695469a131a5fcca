use std::collections::{HashMap, HashSet};

use crate::domain::models::RepoName;

/// Label to emoji table used when nothing else is configured.
pub const DEFAULT_EMOJI: &[(&str, &str)] = &[
    ("Issue-Enhancement", "✨"),
    ("Issue-Bug", "🐛"),
    ("Issue-Performance", "⚡️"),
    ("Area-Build & Release", "👷"),
    ("Area-Code Formatting", "💎"),
    ("Area-Configuration", "🔧"),
    ("Area-Debugging", "🔍"),
    ("Area-Documentation", "📖"),
    ("Area-Engine", "🚂"),
    ("Area-Folding", "📚"),
    ("Area-Extension Terminal", "📟"),
    ("Area-IntelliSense", "🧠"),
    ("Area-Logging", "💭"),
    ("Area-Pester", "🐢"),
    ("Area-Script Analysis", "🕵️"),
    ("Area-Snippets", "✂️"),
    ("Area-Startup", "🛫"),
    ("Area-Symbols & References", "🔗"),
    ("Area-Tasks", "✅"),
    ("Area-Test", "🚨"),
    ("Area-Threading", "⏱️"),
    ("Area-UI", "📺"),
    ("Area-Workspaces", "📁"),
];

/// Maintainers who are not thanked in the changelog.
pub const DEFAULT_SKIP_THANKS: &[&str] = &[
    "andschwa",
    "daxian-dbw",
    "PaulHigin",
    "SeeminglyScience",
    "SydneyhSmith",
    "TylerLeonhardt",
];

pub const DEFAULT_PLACEHOLDER: &str = "#️⃣ 🙏";
pub const DEFAULT_IGNORE_LABEL: &str = "Ignore";
pub const DEFAULT_BOT_SUFFIX: &str = "[bot]";

/// Everything the collector and the bullet formatter need to know besides the
/// pull requests themselves. Built once and passed around by reference.
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub emoji: HashMap<String, String>,
    pub skip_thanks: HashSet<String>,
    /// Used when none of a PR's labels has an emoji.
    pub placeholder: String,
    pub ignore_label: String,
    pub bot_suffix: String,
    /// Repositories an issue reference may point into, in lookup order.
    pub known_repos: Vec<RepoName>,
}

impl ChangelogConfig {
    pub fn is_bot(&self, handle: &str) -> bool {
        handle.ends_with(&self.bot_suffix)
    }

    pub fn should_thank(&self, handle: &str) -> bool {
        !self.skip_thanks.contains(handle)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            emoji: DEFAULT_EMOJI
                .iter()
                .map(|(label, glyph)| (label.to_string(), glyph.to_string()))
                .collect(),
            skip_thanks: DEFAULT_SKIP_THANKS.iter().map(|h| h.to_string()).collect(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            ignore_label: DEFAULT_IGNORE_LABEL.to_string(),
            bot_suffix: DEFAULT_BOT_SUFFIX.to_string(),
            known_repos: RepoName::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bots_are_detected_by_suffix() {
        let config = ChangelogConfig::default();

        assert!(config.is_bot("dependabot[bot]"));
        assert!(!config.is_bot("someuser"));
    }

    #[test]
    fn maintainers_are_not_thanked() {
        let config = ChangelogConfig::default();

        assert!(!config.should_thank("andschwa"));
        assert!(config.should_thank("someuser"));
    }
}
