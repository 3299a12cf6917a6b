//! Changelist formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::Changelist;

/// Trait for changelist formatters
pub trait ChangelistFormatter: Send + Sync {
    /// Render a changelist to the full document text
    fn format(&self, changelist: &Changelist) -> String;
}
