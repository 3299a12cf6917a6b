//! Tag operations

use regex::Regex;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use changelist_core::error::GitError;

impl GitRepo {
    /// Get all tags that resolve to a commit, sorted by name
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(commit) = self.repo.find_commit(oid) {
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag, possibly pointing at another tag
                match tag.target().and_then(|target| target.peel_to_commit()) {
                    Ok(commit) => tags.push(TagInfo::new(&name, commit.id().to_string())),
                    Err(_) => debug!(tag = %name, "tag does not point at a commit, skipping"),
                }
            } else {
                debug!(tag = %name, "tag does not point at a commit, skipping");
            }

            true
        })?;

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get tags whose name matches a regex
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let regex = Regex::new(pattern).map_err(|e| GitError::InvalidTagPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let matching: Vec<_> = self
            .tags()?
            .into_iter()
            .filter(|t| regex.is_match(&t.name))
            .collect();

        debug!(pattern, count = matching.len(), "filtered tags");
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_tags() -> (TempDir, GitRepo, String) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v1.0.0", commit.as_object(), false)
            .unwrap();
        repo.tag("release-1", commit.as_object(), &sig, "First release\n", false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo, oid.to_string())
    }

    #[test]
    fn test_list_tags() {
        let (_temp, repo, head) = setup_repo_with_tags();
        let tags = repo.tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "release-1");
        assert_eq!(tags[1].name, "v1.0.0");
        assert!(tags.iter().all(|t| t.commit_hash == head));
    }

    #[test]
    fn test_annotated_tag_resolves_to_commit() {
        let (_temp, repo, head) = setup_repo_with_tags();
        let tags = repo.tags().unwrap();
        let annotated = tags.iter().find(|t| t.name == "release-1").unwrap();
        assert_eq!(annotated.commit_hash, head);
    }

    #[test]
    fn test_tags_matching() {
        let (_temp, repo, _) = setup_repo_with_tags();
        let tags = repo.tags_matching(r"^v\d").unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "v1.0.0");
    }

    #[test]
    fn test_invalid_pattern() {
        let (_temp, repo, _) = setup_repo_with_tags();
        let result = repo.tags_matching("v(");
        assert!(matches!(result, Err(GitError::InvalidTagPattern { .. })));
    }
}
