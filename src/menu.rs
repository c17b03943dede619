use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `--- Section ---`
static DASHED_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-{3,}\s*(.+?)\s*-{3,}$").expect("dashed header regex"));

/// `[Section]`
static BRACKET_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+?)\]$").expect("bracket header regex"));

/// `## Section` (shadowed by the comment rule, kept for classification order)
static HASH_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{2,}\s+(.+)$").expect("hash header regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A section label; the cursor never rests on it.
    Header { text: String },
    /// A selectable action. `command` is `None` when the line carried no
    /// command part, or the part after `|` trimmed to nothing.
    Item {
        label: String,
        command: Option<String>,
    },
}

impl MenuEntry {
    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Item { .. })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("no menu entries found")]
    EmptyDocument,
    #[error("no selectable menu items found")]
    NoSelectableItems,
}

/// An ordered, immutable sequence of menu entries in file order.
///
/// Holds at least one entry and at least one selectable `Item`; `parse` is
/// the only way to build one outside of tests, so navigation code may rely
/// on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDocument {
    entries: Vec<MenuEntry>,
}

impl MenuDocument {
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, ParseError> {
        let entries: Vec<MenuEntry> = lines.into_iter().filter_map(parse_line).collect();

        if entries.is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        if !entries.iter().any(MenuEntry::is_selectable) {
            return Err(ParseError::NoSelectableItems);
        }

        Ok(Self { entries })
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(MenuEntry::is_selectable)
    }
}

/// Classifies one raw line. First match wins: ignorable, dashed header,
/// bracket header, hash header, item.
fn parse_line(raw: &str) -> Option<MenuEntry> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    for re in [&*DASHED_HEADER_RE, &*BRACKET_HEADER_RE, &*HASH_HEADER_RE] {
        if let Some(caps) = re.captures(line) {
            return Some(MenuEntry::Header {
                text: caps[1].trim().to_string(),
            });
        }
    }

    // Item line: `Label | command`, split on the first pipe only.
    let (label, command) = match line.split_once('|') {
        Some((label, command)) => {
            let command = command.trim();
            (
                label.trim(),
                (!command.is_empty()).then(|| command.to_string()),
            )
        }
        None => (line, None),
    };

    Some(MenuEntry::Item {
        label: label.to_string(),
        command,
    })
}

/// Reads and parses a menu file, naming the file in any failure.
pub fn load(path: &Path) -> Result<MenuDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading menu file {}", path.display()))?;
    MenuDocument::parse(text.lines())
        .with_context(|| format!("invalid menu file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(text: &str) -> MenuEntry {
        MenuEntry::Header {
            text: text.to_string(),
        }
    }

    fn item(label: &str, command: Option<&str>) -> MenuEntry {
        MenuEntry::Item {
            label: label.to_string(),
            command: command.map(str::to_string),
        }
    }

    #[test]
    fn parses_headers_and_items_in_order() {
        let doc = MenuDocument::parse("--- Tools ---\nBuild | make build\nExit".lines()).unwrap();
        assert_eq!(
            doc.entries(),
            [
                header("Tools"),
                item("Build", Some("make build")),
                item("Exit", None),
            ]
        );
    }

    #[test]
    fn ignores_blank_and_comment_lines() {
        let doc =
            MenuDocument::parse(["", "   ", "# a comment", "  # indented", "Run | ls"]).unwrap();
        assert_eq!(doc.entries(), [item("Run", Some("ls"))]);
    }

    #[test]
    fn double_hash_lines_are_comments_too() {
        // The comment rule runs before header classification, so `##`-headed
        // lines never reach the hash-header pattern.
        let doc = MenuDocument::parse(["## Section", "Run | ls"]).unwrap();
        assert_eq!(doc.entries(), [item("Run", Some("ls"))]);
    }

    #[test]
    fn bracket_header_form() {
        let doc = MenuDocument::parse(["[Section]", "Run"]).unwrap();
        assert_eq!(doc.entries()[0], header("Section"));
    }

    #[test]
    fn dashed_header_wins_over_bracket() {
        let doc = MenuDocument::parse(["--- [x] ---", "Run"]).unwrap();
        assert_eq!(doc.entries()[0], header("[x]"));
    }

    #[test]
    fn splits_on_first_pipe_only() {
        let doc = MenuDocument::parse(["Shell | sh -c 'a | b'"]).unwrap();
        assert_eq!(doc.entries(), [item("Shell", Some("sh -c 'a | b'"))]);
    }

    #[test]
    fn empty_or_blank_command_is_absent() {
        let doc = MenuDocument::parse(["A |", "B |   ", "C"]).unwrap();
        assert_eq!(
            doc.entries(),
            [item("A", None), item("B", None), item("C", None)]
        );
    }

    #[test]
    fn trims_label_and_command() {
        let doc = MenuDocument::parse(["  Build it   |   make build  "]).unwrap();
        assert_eq!(doc.entries(), [item("Build it", Some("make build"))]);
    }

    #[test]
    fn comment_only_file_is_empty() {
        let err = MenuDocument::parse("# comment\n\n".lines()).unwrap_err();
        assert_eq!(err, ParseError::EmptyDocument);
    }

    #[test]
    fn header_only_file_has_no_selectable_items() {
        let err = MenuDocument::parse(["--- Section ---"]).unwrap_err();
        assert_eq!(err, ParseError::NoSelectableItems);
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "--- Tools ---\nBuild | make build\n[More]\nExit\n";
        assert_eq!(
            MenuDocument::parse(text.lines()).unwrap(),
            MenuDocument::parse(text.lines()).unwrap()
        );
    }
}
