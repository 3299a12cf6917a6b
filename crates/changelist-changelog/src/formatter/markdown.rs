//! Markdown changelist formatter

use tracing::{debug, instrument};

use super::ChangelistFormatter;
use crate::types::{ChangeEntry, Changelist};

/// Document title, with a heading anchor for doc generators
pub const TITLE: &str = "# Changelist {#changelist}";

/// Attribution line under the title
pub const CREDIT: &str = "*This changelist is generated thanks to [Conventional Commits](https://www.conventionalcommits.org/)*";

/// Table-of-contents marker
pub const TOC_MARKER: &str = "[TOC]";

/// Line emitted for a section without entries
pub const NO_CHANGES: &str = "- *No Major Changes*";

/// Markdown changelist formatter
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Render a single entry line
    pub fn entry_line(entry: &ChangeEntry) -> String {
        format!("- {}: **{}**", entry.intro(), entry.summary)
    }
}

impl ChangelistFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelist), fields(section_count = changelist.sections.len()))]
    fn format(&self, changelist: &Changelist) -> String {
        let mut lines: Vec<String> = vec![
            TITLE.to_string(),
            String::new(),
            CREDIT.to_string(),
            TOC_MARKER.to_string(),
            String::new(),
        ];

        for section in &changelist.sections {
            lines.push(format!("## {}", section.title));
            lines.push(String::new());

            lines.extend(section.entries.iter().map(Self::entry_line));

            if section.is_empty() {
                lines.push(NO_CHANGES.to_string());
            }

            lines.push(String::new());
        }

        let output = lines.join("\n");
        debug!(output_len = output.len(), "markdown changelist formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryKind, Section};

    fn entry(kind: EntryKind, scope: Option<&str>, summary: &str) -> ChangeEntry {
        ChangeEntry {
            kind,
            scope: scope.map(str::to_string),
            summary: summary.to_string(),
            breaking: false,
            hash: "abc1234567890".to_string(),
        }
    }

    #[test]
    fn test_entry_lines() {
        assert_eq!(
            MarkdownFormatter::entry_line(&entry(EntryKind::Fix, None, "something")),
            "- Fix: **something**"
        );
        assert_eq!(
            MarkdownFormatter::entry_line(&entry(EntryKind::Feature, Some("(core)"), "add X")),
            "- Feature[(core)]: **add X**"
        );
    }

    #[test]
    fn test_empty_changelist_has_header_only() {
        let output = MarkdownFormatter::new().format(&Changelist::default());
        assert_eq!(
            output,
            format!("{}\n\n{}\n{}\n", TITLE, CREDIT, TOC_MARKER)
        );
    }

    #[test]
    fn test_full_document() {
        let mut current = Section::new("Current", 2);
        current.extend([
            entry(EntryKind::Feature, None, "x"),
            entry(EntryKind::Fix, Some("(io)"), "y"),
        ]);
        let released = Section::new("v1.0", 3);

        let changelist = Changelist {
            sections: vec![current, released],
        };
        let output = MarkdownFormatter::new().format(&changelist);

        let expected = [
            TITLE,
            "",
            CREDIT,
            TOC_MARKER,
            "",
            "## Current",
            "",
            "- Feature: **x**",
            "- Fix[(io)]: **y**",
            "",
            "## v1.0",
            "",
            "- *No Major Changes*",
            "",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_placeholder_only_for_empty_sections() {
        let mut section = Section::new("v2.0", 1);
        section.extend([entry(EntryKind::Fix, None, "z")]);
        let output = MarkdownFormatter::new().format(&Changelist {
            sections: vec![section],
        });
        assert!(!output.contains(NO_CHANGES));
    }
}
