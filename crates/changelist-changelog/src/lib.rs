//! Changelist Changelog - Changelist generation from commit history
//!
//! This crate partitions commits into release buckets, classifies commit
//! summaries and renders the resulting changelist document.

pub mod bucket;
pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod types;

pub use bucket::{order_tags, partition};
pub use classifier::{CommitClassifier, ConventionalClassifier};
pub use formatter::{ChangelistFormatter, MarkdownFormatter};
pub use generator::{write_changelist, ChangelistGenerator};
pub use types::{ChangeEntry, Changelist, EntryKind, Section, VersionBucket};
