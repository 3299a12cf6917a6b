//! Changelist Core - Core library for changelist generation
//!
//! This crate provides the error types and configuration shared by the
//! repository, changelog and CLI crates.

pub mod config;
pub mod error;

pub use config::{Config, TagCommitPolicy};
pub use error::{ChangelistError, Result};
