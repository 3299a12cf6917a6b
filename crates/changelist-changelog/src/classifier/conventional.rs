//! Conventional Commits classifier
//!
//! Recognises `fix` and `feat` subjects in the Conventional Commits format:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::CommitClassifier;
use crate::types::{ChangeEntry, EntryKind};
use changelist_git::CommitInfo;

/// Regex for `fix` subjects
static FIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^fix(?P<scope>\(.*\))?(?P<breaking>!)?: (?P<summary>.*)").expect("Invalid regex")
});

/// Regex for `feat` subjects
static FEAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^feat(?P<scope>\(.*\))?(?P<breaking>!)?: (?P<summary>.*)").expect("Invalid regex")
});

/// One prefix pattern and the entry kind it produces
struct ClassificationRule {
    kind: EntryKind,
    pattern: &'static LazyLock<Regex>,
}

impl ClassificationRule {
    fn apply(&self, commit: &CommitInfo) -> Option<ChangeEntry> {
        let caps = self.pattern.captures(&commit.message)?;

        Some(ChangeEntry {
            kind: self.kind,
            scope: caps.name("scope").map(|m| m.as_str().to_string()),
            summary: caps.name("summary")?.as_str().to_string(),
            breaking: caps.name("breaking").is_some(),
            hash: commit.hash.clone(),
        })
    }
}

/// Classifier for Conventional Commits `fix` and `feat` subjects.
///
/// The rules are independent: each one that matches yields an entry, fix
/// first, then feature.
pub struct ConventionalClassifier {
    rules: [ClassificationRule; 2],
}

impl ConventionalClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self {
            rules: [
                ClassificationRule {
                    kind: EntryKind::Fix,
                    pattern: &FIX_REGEX,
                },
                ClassificationRule {
                    kind: EntryKind::Feature,
                    pattern: &FEAT_REGEX,
                },
            ],
        }
    }
}

impl Default for ConventionalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, commit: &CommitInfo) -> Vec<ChangeEntry> {
        let entries: Vec<ChangeEntry> = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(commit))
            .collect();

        trace!(hash = %commit.short_hash, matched = entries.len(), "classified commit");
        entries
    }
}
