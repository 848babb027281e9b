//! Pagedown Parser
//!
//! Turns a markdown document into an ordered sequence of [`Block`]s and
//! single lines of inline markup into [`StyledRun`]s.
//!
//! # Overview
//!
//! The block parser is line-oriented. Two modes carry state across lines:
//! fenced code (everything up to the closing fence is verbatim) and tables
//! (consecutive pipe-delimited rows). Lists and notes are resolved by
//! looking ahead from their first line. Every other line maps to exactly
//! one block, or to nothing when blank.
//!
//! # Example
//!
//! ```
//! use pagedown_core::Block;
//! use pagedown_parser::parse_document;
//!
//! let blocks = parse_document("# Hello World\n\n- one\n- two");
//! assert_eq!(blocks[0], Block::Title("Hello World".to_string()));
//! assert_eq!(blocks[1], Block::List(vec!["one".to_string(), "two".to_string()]));
//! ```
//!
//! [`StyledRun`]: pagedown_core::StyledRun

pub mod inline;
pub mod tokenizer;

pub use inline::{parse_inline, plain_text, InlineParser};
pub use tokenizer::{Token, Tokenizer};

use log::{debug, trace};
use pagedown_core::Block;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// A header-separator cell: dashes with optional alignment colons.
static TABLE_SEP_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").unwrap());

/// Heading prefixes and the block each one produces.
const HEADING_PREFIXES: [(&str, fn(String) -> Block); 4] = [
    ("# ", Block::Title),
    ("## ", Block::Subtitle),
    ("### ", Block::Heading1),
    ("#### ", Block::Heading2),
];

/// Fence marker for code blocks.
const FENCE: &str = "```";

// =============================================================================
// Helpers
// =============================================================================

/// Split a pipe-delimited line into trimmed cells, if it is a table row.
///
/// The outer (empty) fields before the first and after the last `|` are
/// dropped.
pub fn split_table_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') || !trimmed.ends_with('|') {
        return None;
    }

    let fields: Vec<&str> = trimmed.split('|').collect();
    let inner = if fields.len() >= 2 {
        &fields[1..fields.len() - 1]
    } else {
        &fields[..0]
    };
    Some(inner.iter().map(|cell| cell.trim().to_string()).collect())
}

/// Whether a row is the markdown header separator (`|---|:--:|`).
pub fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| TABLE_SEP_CELL_RE.is_match(cell))
}

/// Strip a list bullet (`- ` or `* `) from a trimmed line.
fn strip_bullet(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

// =============================================================================
// Parser
// =============================================================================

/// Block-level markdown parser.
#[derive(Debug, Default)]
pub struct Parser {
    blocks: Vec<Block>,
    /// Raw lines of an open code fence
    code: Option<Vec<String>>,
    /// Rows of an open table
    table: Option<Vec<Vec<String>>>,
}

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete document.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped). Any state left
    /// from an earlier call is discarded first.
    pub fn parse_document(&mut self, content: &str) -> Vec<Block> {
        self.reset();

        let lines: Vec<&str> = content.lines().collect();
        let mut i = 0;
        while i < lines.len() {
            i = self.parse_line(&lines, i);
        }

        self.finalize()
    }

    /// Handle the line at `i` and return the index of the next unconsumed
    /// line.
    fn parse_line(&mut self, lines: &[&str], i: usize) -> usize {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE) {
            self.toggle_fence();
            return i + 1;
        }

        if let Some(code) = self.code.as_mut() {
            code.push(line.to_string());
            return i + 1;
        }

        if self.try_parse_table_row(line) {
            return i + 1;
        }
        self.flush_table();

        if trimmed == "---" {
            self.blocks.push(Block::Separator);
            return i + 1;
        }

        if self.try_parse_heading(trimmed) {
            return i + 1;
        }

        if trimmed.starts_with("> ") {
            return self.parse_note(lines, i);
        }

        if strip_bullet(trimmed).is_some() {
            return self.parse_list(lines, i);
        }

        if !trimmed.is_empty() {
            self.blocks.push(Block::Paragraph(trimmed.to_string()));
        }
        i + 1
    }

    /// Open or close a code fence.
    fn toggle_fence(&mut self) {
        match self.code.take() {
            Some(lines) => self.emit_code(&lines),
            None => {
                // A fence ends any table in progress
                self.flush_table();
                self.code = Some(Vec::new());
            }
        }
    }

    fn emit_code(&mut self, lines: &[String]) {
        let body = lines.join("\n");
        let body = body.trim();
        if body.is_empty() {
            trace!("skipping empty code block");
            return;
        }
        self.blocks.push(Block::Code(body.to_string()));
    }

    /// Accumulate a table row. Returns false when the line is not a row.
    fn try_parse_table_row(&mut self, line: &str) -> bool {
        let Some(cells) = split_table_row(line) else {
            return false;
        };

        let rows = self.table.get_or_insert_with(Vec::new);
        if is_separator_row(&cells) {
            trace!("dropping table header separator");
        } else {
            rows.push(cells);
        }
        true
    }

    /// Emit the open table, if it has any rows.
    fn flush_table(&mut self) {
        if let Some(rows) = self.table.take() {
            if !rows.is_empty() {
                self.blocks.push(Block::Table(rows));
            }
        }
    }

    fn try_parse_heading(&mut self, trimmed: &str) -> bool {
        for (prefix, make) in HEADING_PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                self.blocks.push(make(rest.to_string()));
                return true;
            }
        }
        false
    }

    /// A note and every directly following `> ` line.
    fn parse_note(&mut self, lines: &[&str], start: usize) -> usize {
        let mut text = lines[start].trim()[2..].to_string();
        let mut i = start + 1;
        while let Some(rest) = lines.get(i).and_then(|l| l.trim().strip_prefix("> ")) {
            text.push(' ');
            text.push_str(rest);
            i += 1;
        }
        self.blocks.push(Block::Note(text));
        i
    }

    /// A list: bullet lines become items, lines indented by two spaces
    /// continue the last item.
    fn parse_list(&mut self, lines: &[&str], start: usize) -> usize {
        let mut items: Vec<String> = Vec::new();
        if let Some(first) = strip_bullet(lines[start].trim()) {
            items.push(first.to_string());
        }

        let mut i = start + 1;
        while let Some(next) = lines.get(i) {
            let trimmed = next.trim();
            if let Some(item) = strip_bullet(trimmed) {
                items.push(item.to_string());
            } else if next.starts_with("  ") && !trimmed.is_empty() {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(trimmed);
                }
            } else {
                break;
            }
            i += 1;
        }

        debug!("list with {} items", items.len());
        self.blocks.push(Block::List(items));
        i
    }

    /// Close whatever is still open and return the blocks.
    ///
    /// An unterminated fence becomes a code block when it has content.
    pub fn finalize(&mut self) -> Vec<Block> {
        if let Some(lines) = self.code.take() {
            debug!("closing unterminated code fence at end of input");
            self.emit_code(&lines);
        }
        self.flush_table();
        std::mem::take(&mut self.blocks)
    }

    /// Reset parser state.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.code = None;
        self.table = None;
    }
}

/// Parse a complete markdown document into blocks.
pub fn parse_document(content: &str) -> Vec<Block> {
    Parser::new().parse_document(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_parse_headings() {
        let blocks = parse_document("# A\n## B\n### C\n#### D\n##### E");
        assert_eq!(
            blocks,
            vec![
                Block::Title(s("A")),
                Block::Subtitle(s("B")),
                Block::Heading1(s("C")),
                Block::Heading2(s("D")),
                Block::Paragraph(s("##### E")),
            ]
        );
    }

    #[test]
    fn test_heading_keeps_inline_markup() {
        let blocks = parse_document("## The **core** idea");
        assert_eq!(blocks, vec![Block::Subtitle(s("The **core** idea"))]);
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(parse_document("#tag"), vec![Block::Paragraph(s("#tag"))]);
    }

    #[test]
    fn test_each_line_is_a_paragraph() {
        let blocks = parse_document("first line\n  second line  \n\n\nthird");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(s("first line")),
                Block::Paragraph(s("second line")),
                Block::Paragraph(s("third")),
            ]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("  \n\t\n").is_empty());
    }

    #[test]
    fn test_separator() {
        let blocks = parse_document("above\n  ---  \nbelow\n----");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(s("above")),
                Block::Separator,
                Block::Paragraph(s("below")),
                Block::Paragraph(s("----")),
            ]
        );
    }

    #[test]
    fn test_parse_code_block() {
        let blocks = parse_document("```rust\n  fn main() {\n      body();\n  }\n```\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Code(s("fn main() {\n      body();\n  }")),
                Block::Paragraph(s("after")),
            ]
        );
    }

    #[test]
    fn test_code_block_is_verbatim() {
        let blocks = parse_document("```\n# not a heading\n- not a list\n| a |\n```");
        assert_eq!(
            blocks,
            vec![Block::Code(s("# not a heading\n- not a list\n| a |"))]
        );
    }

    #[test]
    fn test_unterminated_fence_closes_at_end() {
        let blocks = parse_document("intro\n```\nlet x = 1;");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(s("intro")), Block::Code(s("let x = 1;"))]
        );
    }

    #[test]
    fn test_empty_fence_is_skipped() {
        assert!(parse_document("```\n\n```").is_empty());
        assert!(parse_document("```").is_empty());
    }

    #[test]
    fn test_parse_table() {
        let blocks = parse_document("| Name | Age |\n|------|-----|\n| Bob | 42 |\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Table(vec![
                    vec![s("Name"), s("Age")],
                    vec![s("Bob"), s("42")],
                ]),
                Block::Paragraph(s("after")),
            ]
        );
    }

    #[test]
    fn test_aligned_separator_dropped() {
        let blocks = parse_document("| a | b |\n|:---|---:|\n| 1 | 2 |");
        let rows = blocks[0].rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !is_separator_row(row)));
    }

    #[test]
    fn test_table_terminating_line_is_processed() {
        let blocks = parse_document("| a |\n# Next");
        assert_eq!(
            blocks,
            vec![Block::Table(vec![vec![s("a")]]), Block::Title(s("Next"))]
        );
    }

    #[test]
    fn test_table_flushed_before_fence() {
        let blocks = parse_document("| a | b |\n```\ncode\n```");
        assert_eq!(
            blocks,
            vec![
                Block::Table(vec![vec![s("a"), s("b")]]),
                Block::Code(s("code")),
            ]
        );
    }

    #[test]
    fn test_separator_only_table_not_emitted() {
        assert!(parse_document("|---|---|").is_empty());
    }

    #[test]
    fn test_table_at_end_of_input() {
        let blocks = parse_document("| x | y |");
        assert_eq!(blocks, vec![Block::Table(vec![vec![s("x"), s("y")]])]);
    }

    #[test]
    fn test_list_items() {
        let blocks = parse_document("- one\n* two\n- three\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::List(vec![s("one"), s("two"), s("three")]),
                Block::Paragraph(s("after")),
            ]
        );
    }

    #[test]
    fn test_list_continuation() {
        let blocks = parse_document("- item one\n  continued");
        assert_eq!(blocks, vec![Block::List(vec![s("item one continued")])]);
    }

    #[test]
    fn test_indented_bullet_is_new_item() {
        let blocks = parse_document("- outer\n  - inner");
        assert_eq!(blocks, vec![Block::List(vec![s("outer"), s("inner")])]);
    }

    #[test]
    fn test_list_stops_at_blank_line() {
        let blocks = parse_document("- a\n\n- b");
        assert_eq!(
            blocks,
            vec![Block::List(vec![s("a")]), Block::List(vec![s("b")])]
        );
    }

    #[test]
    fn test_single_space_indent_is_not_continuation() {
        let blocks = parse_document("- a\n b");
        assert_eq!(
            blocks,
            vec![Block::List(vec![s("a")]), Block::Paragraph(s("b"))]
        );
    }

    #[test]
    fn test_note_merging() {
        let blocks = parse_document("> first\n> second\n  > third\nplain");
        assert_eq!(
            blocks,
            vec![
                Block::Note(s("first second third")),
                Block::Paragraph(s("plain")),
            ]
        );
    }

    #[test]
    fn test_bare_quote_marker_is_paragraph() {
        assert_eq!(parse_document(">"), vec![Block::Paragraph(s(">"))]);
    }

    #[test]
    fn test_crlf_input() {
        let blocks = parse_document("# Title\r\n\r\n- a\r\n- b\r\n");
        assert_eq!(
            blocks,
            vec![Block::Title(s("Title")), Block::List(vec![s("a"), s("b")])]
        );
    }

    #[test]
    fn test_scenario_document() {
        let blocks =
            parse_document("# Title\n\nSome paragraph with **bold** and `code`.\n\n- item a\n- item b");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Title(s("Title")));
        assert_eq!(
            blocks[1],
            Block::Paragraph(s("Some paragraph with **bold** and `code`."))
        );
        assert_eq!(blocks[2], Block::List(vec![s("item a"), s("item b")]));
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = Parser::new();
        let first = parser.parse_document("```\nopen");
        let second = parser.parse_document("text");
        assert_eq!(first, vec![Block::Code(s("open"))]);
        assert_eq!(second, vec![Block::Paragraph(s("text"))]);
    }

    #[test]
    fn test_split_table_row() {
        assert_eq!(split_table_row("not a row"), None);
        assert_eq!(split_table_row("|"), Some(vec![]));
        assert_eq!(split_table_row("| a || b |"), Some(vec![s("a"), s(""), s("b")]));
    }
}
