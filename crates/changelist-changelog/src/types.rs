//! Changelist types

use changelist_git::CommitInfo;
use serde::{Deserialize, Serialize};

/// Kind of change a commit summary announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// `fix` commits
    Fix,
    /// `feat` commits
    Feature,
}

impl EntryKind {
    /// Label used at the start of a rendered entry
    pub fn intro(&self) -> &'static str {
        match self {
            EntryKind::Fix => "Fix",
            EntryKind::Feature => "Feature",
        }
    }
}

/// A single classified changelist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Entry kind
    pub kind: EntryKind,
    /// Scope including its parentheses, e.g. `(core)`
    pub scope: Option<String>,
    /// Free-text summary after `: `
    pub summary: String,
    /// Whether the `!` marker was present
    pub breaking: bool,
    /// Hash of the originating commit
    pub hash: String,
}

impl ChangeEntry {
    /// Intro with the bracketed scope appended, e.g. `Feature[(core)]`
    pub fn intro(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{}[{}]", self.kind.intro(), scope),
            None => self.kind.intro().to_string(),
        }
    }
}

/// Commits attributed to one release, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBucket {
    /// Tag name, or the unreleased label
    pub label: String,
    /// Commits in the bucket
    pub commits: Vec<CommitInfo>,
}

impl VersionBucket {
    /// Create a new bucket
    pub fn new(label: impl Into<String>, commits: Vec<CommitInfo>) -> Self {
        Self {
            label: label.into(),
            commits,
        }
    }
}

/// A rendered section of the changelist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Number of commits in the underlying bucket
    pub commit_count: usize,
    /// Classified entries in bucket order
    pub entries: Vec<ChangeEntry>,
}

impl Section {
    /// Create a new, empty section
    pub fn new(title: impl Into<String>, commit_count: usize) -> Self {
        Self {
            title: title.into(),
            commit_count,
            entries: Vec::new(),
        }
    }

    /// Add entries to the section
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ChangeEntry>) {
        self.entries.extend(entries);
    }

    /// Check if section has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The whole changelist, most recent section first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelist {
    /// Sections, one per version bucket
    pub sections: Vec<Section>,
}

impl Changelist {
    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, scope: Option<&str>) -> ChangeEntry {
        ChangeEntry {
            kind,
            scope: scope.map(str::to_string),
            summary: "summary".to_string(),
            breaking: false,
            hash: "abc1234".to_string(),
        }
    }

    #[test]
    fn test_intro_without_scope() {
        assert_eq!(entry(EntryKind::Fix, None).intro(), "Fix");
        assert_eq!(entry(EntryKind::Feature, None).intro(), "Feature");
    }

    #[test]
    fn test_intro_with_scope() {
        assert_eq!(entry(EntryKind::Feature, Some("(core)")).intro(), "Feature[(core)]");
    }

    #[test]
    fn test_entry_count() {
        let mut first = Section::new("Current", 2);
        first.extend([entry(EntryKind::Fix, None), entry(EntryKind::Feature, None)]);
        let second = Section::new("v1.0", 1);

        let changelist = Changelist {
            sections: vec![first, second],
        };
        assert_eq!(changelist.entry_count(), 2);
        assert!(changelist.sections[1].is_empty());
    }
}
