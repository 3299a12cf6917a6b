//! Commit classification

mod conventional;

pub use conventional::ConventionalClassifier;

use crate::types::ChangeEntry;
use changelist_git::CommitInfo;

/// Trait for commit classifiers
pub trait CommitClassifier: Send + Sync {
    /// Classify a commit into zero or more changelist entries, in rule order
    fn classify(&self, commit: &CommitInfo) -> Vec<ChangeEntry>;
}
