//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for changelist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document configuration
    pub changelist: ChangelistConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// How a tagged commit is treated when commits are bucketed by release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCommitPolicy {
    /// The tagged commit only marks the boundary and is never rendered
    #[default]
    Marker,
    /// The tagged commit belongs to its own tag's bucket
    Inclusive,
}

/// Document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelistConfig {
    /// Output file, relative to the working directory
    pub file: PathBuf,

    /// Label for commits not yet covered by any tag
    pub unreleased_label: String,

    /// Treatment of the commit a tag points at
    pub tag_commits: TagCommitPolicy,
}

impl Default for ChangelistConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("docs/changelist.md"),
            unreleased_label: "Current".to_string(),
            tag_commits: TagCommitPolicy::Marker,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Only tags whose name matches this regex bound a release
    pub tag_pattern: Option<String>,
}
