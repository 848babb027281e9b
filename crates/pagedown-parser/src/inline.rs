//! Inline markdown parser.
//!
//! This module turns one line of text into styled runs: bold, italic,
//! inline code and link labels. Link targets are dropped.

use crate::tokenizer::{Token, Tokenizer};
use pagedown_core::{RunStyle, StyledRun};

/// Inline markdown parser.
///
/// Parses inline formatting and returns styled runs.
#[derive(Debug, Clone)]
pub struct InlineParser {
    tokenizer: Tokenizer,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Create a parser around a configured tokenizer.
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Parse a line of markdown into runs.
    ///
    /// Concatenating the run texts gives the line with every matched
    /// marker pair (and every link target) removed. Styled runs with empty
    /// content are omitted, so `****` yields nothing.
    pub fn parse(&self, line: &str) -> Vec<StyledRun> {
        let mut runs: Vec<StyledRun> = Vec::new();

        for token in self.tokenizer.tokenize(line) {
            let (text, style) = match token {
                Token::Text(text) => (text, RunStyle::Plain),
                Token::Bold(text) => (text, RunStyle::Bold),
                Token::Code(text) => (text, RunStyle::Code),
                Token::Italic(text) => (text, RunStyle::Italic),
                Token::Link { label, .. } => (label, RunStyle::LinkLabel),
            };

            if text.is_empty() {
                continue;
            }

            // Keep adjacent plain text in one run
            match runs.last_mut() {
                Some(last) if style == RunStyle::Plain && last.style == RunStyle::Plain => {
                    last.text.push_str(&text);
                }
                _ => runs.push(StyledRun::new(text, style)),
            }
        }

        runs
    }
}

/// Parse one line with the default inline parser.
///
/// # Example
///
/// ```
/// use pagedown_core::RunStyle;
/// use pagedown_parser::parse_inline;
///
/// let runs = parse_inline("Hello **world**");
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[1].style, RunStyle::Bold);
/// ```
pub fn parse_inline(line: &str) -> Vec<StyledRun> {
    InlineParser::new().parse(line)
}

/// The visible text of a line, with inline markup removed.
pub fn plain_text(line: &str) -> String {
    parse_inline(line)
        .into_iter()
        .map(|run| run.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, style: RunStyle) -> StyledRun {
        StyledRun::new(text, style)
    }

    #[test]
    fn test_plain_line_is_one_run() {
        let runs = parse_inline("Nothing special here.");
        assert_eq!(runs, vec![StyledRun::plain("Nothing special here.")]);
    }

    #[test]
    fn test_empty_line() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_bold() {
        let runs = parse_inline("Hello **world**");
        assert_eq!(
            runs,
            vec![run("Hello ", RunStyle::Plain), run("world", RunStyle::Bold)]
        );
    }

    #[test]
    fn test_code() {
        let runs = parse_inline("Call `render()` now");
        assert_eq!(
            runs,
            vec![
                run("Call ", RunStyle::Plain),
                run("render()", RunStyle::Code),
                run(" now", RunStyle::Plain),
            ]
        );
    }

    #[test]
    fn test_italic() {
        let runs = parse_inline("an _emphasised_ word");
        assert_eq!(runs[1], run("emphasised", RunStyle::Italic));
    }

    #[test]
    fn test_link_drops_target() {
        let runs = parse_inline("See [the docs](https://example.com) please");
        assert_eq!(
            runs,
            vec![
                run("See ", RunStyle::Plain),
                run("the docs", RunStyle::LinkLabel),
                run(" please", RunStyle::Plain),
            ]
        );
        assert!(!plain_text("[a](http://x)").contains("http"));
    }

    #[test]
    fn test_unterminated_marker_stays_plain() {
        let runs = parse_inline("a ** b");
        assert_eq!(runs, vec![StyledRun::plain("a ** b")]);
    }

    #[test]
    fn test_empty_styled_run_dropped() {
        assert!(parse_inline("****").is_empty());
        assert_eq!(parse_inline("a``b"), vec![StyledRun::plain("ab")]);
    }

    #[test]
    fn test_underscores_pair_in_words() {
        assert_eq!(
            parse_inline("set max_line_width first"),
            vec![
                StyledRun::plain("set max"),
                StyledRun::new("line", RunStyle::Italic),
                StyledRun::plain("width first"),
            ]
        );
    }

    #[test]
    fn test_snake_case_with_intraword_rule() {
        let parser = InlineParser::with_tokenizer(Tokenizer::with_settings(true));
        assert_eq!(
            parser.parse("set max_line_width first"),
            vec![StyledRun::plain("set max_line_width first")]
        );
    }

    #[test]
    fn test_plain_text_strips_markup() {
        assert_eq!(
            plain_text("**Bold** and `code` with [link](u)"),
            "Bold and code with link"
        );
    }

    #[test]
    fn test_no_marker_characters_in_styled_runs() {
        let runs = parse_inline("**a** `b` _c_ [d](e)");
        for r in runs.iter().filter(|r| r.style != RunStyle::Plain) {
            assert!(!r.text.contains("**"));
            assert!(!r.text.contains('`'));
        }
    }
}
