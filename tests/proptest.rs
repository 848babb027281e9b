//! Property-based tests for pagedown.
//!
//! These tests use proptest to generate random inputs and verify
//! that the parser and renderer handle them gracefully.

use proptest::prelude::*;

use pagedown_config::Config;
use pagedown_core::{Block, RunStyle};
use pagedown_parser::{parse_document, parse_inline, plain_text};
use pagedown_render::{render, render_with_config};

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]{0,400}").unwrap()
}

/// Generate a random line of text.
fn text_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,120}").unwrap()
}

/// Generate a line without markup characters.
fn plain_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9 ,.;:!?'()-]{1,120}").unwrap()
}

/// Generate a heading.
fn heading() -> impl Strategy<Value = String> {
    (1..=4usize, text_line()).prop_map(|(level, text)| format!("{} {}", "#".repeat(level), text))
}

/// Generate a table.
fn table() -> impl Strategy<Value = String> {
    (1..6usize, prop::collection::vec(text_line(), 1..8)).prop_map(|(cols, cells)| {
        let row = |text: &str| {
            let clean = text.replace('|', "/");
            format!("| {} |", vec![clean.as_str(); cols].join(" | "))
        };
        let mut lines = vec![row(&cells[0]), format!("|{}", "---|".repeat(cols))];
        lines.extend(cells[1..].iter().map(|c| row(c)));
        lines.join("\n")
    })
}

/// Generate a list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(text_line(), 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Generate a document from structured pieces.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![heading(), table(), list(), text_line(), Just("---".to_string())],
        0..12,
    )
    .prop_map(|parts| parts.join("\n\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn render_never_panics(input in markdown_string()) {
        let bytes = render(&input, "random.md");
        prop_assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn structured_documents_render(input in document()) {
        let doc = render_with_config(&input, "doc.md", &Config::default());
        prop_assert!(!doc.bytes.is_empty());
        prop_assert!(doc.page_count >= 1);
    }

    #[test]
    fn parsing_is_idempotent(input in markdown_string()) {
        prop_assert_eq!(parse_document(&input), parse_document(&input));
    }

    #[test]
    fn inline_parse_never_panics(line in text_line()) {
        let runs = parse_inline(&line);
        prop_assert!(runs.iter().all(|run| !run.text.is_empty()));
    }

    #[test]
    fn plain_lines_are_one_run(line in plain_line()) {
        let runs = parse_inline(&line);
        prop_assert_eq!(runs.len(), 1);
        prop_assert_eq!(runs[0].style, RunStyle::Plain);
        prop_assert_eq!(&runs[0].text, &line);
        prop_assert_eq!(plain_text(&line), line);
    }

    #[test]
    fn tables_never_store_separators(input in table()) {
        for block in parse_document(&input) {
            if let Block::Table(rows) = block {
                for row in rows {
                    prop_assert!(!row.iter().all(|cell| cell == "---"));
                }
            }
        }
    }
}
