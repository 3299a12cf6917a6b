//! Commit history operations

use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get every commit reachable from HEAD, newest first
    #[instrument(skip(self))]
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let message = String::from_utf8_lossy(commit.message_bytes());

    CommitInfo::new(hash, first_line(&message))
}

/// First line of a commit message, untrimmed
fn first_line(message: &str) -> &str {
    match message.split('\n').next() {
        Some(line) if !line.is_empty() => line,
        _ => "(no message)",
    }
}
