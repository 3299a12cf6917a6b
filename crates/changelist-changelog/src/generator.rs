//! Changelist generation

use std::path::Path;

use changelist_core::config::ChangelistConfig;
use changelist_core::error::{ChangelogError, Result};
use changelist_git::{CommitInfo, GitRepo, TagInfo};
use tracing::{debug, info, instrument};

use crate::bucket::{order_tags, partition};
use crate::classifier::{CommitClassifier, ConventionalClassifier};
use crate::formatter::{ChangelistFormatter, MarkdownFormatter};
use crate::types::{Changelist, Section};

/// Changelist generator
pub struct ChangelistGenerator {
    classifier: Box<dyn CommitClassifier>,
    formatter: Box<dyn ChangelistFormatter>,
    config: ChangelistConfig,
}

impl ChangelistGenerator {
    /// Create a new generator with the conventional classifier and markdown formatter
    pub fn new(config: ChangelistConfig) -> Self {
        Self {
            classifier: Box::new(ConventionalClassifier::new()),
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom classifier
    pub fn with_classifier<C: CommitClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Build a changelist from newest-first commits and an unordered tag list
    #[instrument(skip(self, commits, tags), fields(commit_count = commits.len(), tag_count = tags.len()))]
    pub fn generate(&self, commits: &[CommitInfo], tags: &[TagInfo]) -> Changelist {
        info!(
            commit_count = commits.len(),
            tag_count = tags.len(),
            "generating changelist"
        );
        let tags = order_tags(commits, tags);
        let buckets = partition(
            commits,
            &tags,
            &self.config.unreleased_label,
            self.config.tag_commits,
        );

        let sections: Vec<Section> = buckets
            .into_iter()
            .map(|bucket| {
                let mut section = Section::new(bucket.label, bucket.commits.len());
                for commit in &bucket.commits {
                    section.extend(self.classifier.classify(commit));
                }
                section
            })
            .collect();

        let changelist = Changelist { sections };
        debug!(
            section_count = changelist.sections.len(),
            entry_count = changelist.entry_count(),
            "changelist sections built"
        );
        changelist
    }

    /// Read commits and tags from a repository and build the changelist
    #[instrument(skip(self, repo), fields(path = %repo.path().display()))]
    pub fn generate_from_repo(&self, repo: &GitRepo, tag_pattern: Option<&str>) -> Result<Changelist> {
        let commits = repo.all_commits()?;
        let tags = match tag_pattern {
            Some(pattern) => repo.tags_matching(pattern)?,
            None => repo.tags()?,
        };

        Ok(self.generate(&commits, &tags))
    }

    /// Format a changelist to string
    pub fn format(&self, changelist: &Changelist) -> String {
        self.formatter.format(changelist)
    }

    /// Generate and format in one step
    pub fn generate_formatted(&self, commits: &[CommitInfo], tags: &[TagInfo]) -> String {
        let changelist = self.generate(commits, tags);
        self.format(&changelist)
    }
}

/// Write the document as the full content of `path`.
///
/// The parent directory must already exist.
#[instrument(skip(content), fields(path = %path.display(), len = content.len()))]
pub fn write_changelist(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "changelist written");
    Ok(())
}
