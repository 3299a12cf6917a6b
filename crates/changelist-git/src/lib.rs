//! Changelist Git - Git operations for changelist generation
//!
//! This crate provides read access to a repository's commit history and
//! tag list.

mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
