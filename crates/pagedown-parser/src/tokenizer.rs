//! Tokenizer for inline markdown content.
//!
//! A single forward scan with an explicit cursor. At every position the
//! markers are tried in a fixed precedence order:
//!
//! 1. `**text**`
//! 2. `` `text` ``
//! 3. `_text_`
//! 4. `[label](url)`
//!
//! The first marker that finds its terminator wins and its content is not
//! scanned again, so markers never nest. A marker without a terminator is
//! ordinary text.

/// Token types for inline markdown content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text outside any marker, verbatim
    Text(String),

    /// Content of a `**...**` span
    Bold(String),

    /// Content of a `` `...` `` span
    Code(String),

    /// Content of a `_..._` span
    Italic(String),

    /// A link: [label](url)
    Link { label: String, url: String },
}

impl Token {
    /// Whether this token came from a marker pair.
    pub fn is_marker(&self) -> bool {
        !matches!(self, Token::Text(_))
    }
}

/// A recognised marker span: the token and the byte offset just past it.
type Span = (Token, usize);

/// Inline tokenizer.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Leave `_` literal inside words (`snake_case`) and next to
    /// whitespace, as CommonMark does. Off by default: every `_` opens a
    /// span that the nearest following `_` closes.
    pub intraword_underscore: bool,
}

impl Tokenizer {
    /// Create a new tokenizer where `_` pairs like every other marker.
    pub fn new() -> Self {
        Self {
            intraword_underscore: false,
        }
    }

    /// Create a tokenizer with explicit settings.
    pub fn with_settings(intraword_underscore: bool) -> Self {
        Self {
            intraword_underscore,
        }
    }

    /// Tokenize one line of text.
    ///
    /// Consecutive text is always collected into a single `Text` token, and
    /// no empty `Text` token is ever produced.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut text_start = 0;
        let mut pos = 0;

        while pos < line.len() {
            if let Some((token, end)) = self.match_at(line, pos) {
                if text_start < pos {
                    tokens.push(Token::Text(line[text_start..pos].to_string()));
                }
                tokens.push(token);
                pos = end;
                text_start = end;
                continue;
            }

            // Advance by one character, never splitting a UTF-8 sequence
            pos += line[pos..].chars().next().map_or(1, char::len_utf8);
        }

        if text_start < line.len() {
            tokens.push(Token::Text(line[text_start..].to_string()));
        }

        tokens
    }

    /// Try every marker at `pos`, in precedence order.
    fn match_at(&self, line: &str, pos: usize) -> Option<Span> {
        let rest = &line[pos..];
        if rest.starts_with("**") {
            if let Some(span) = match_pair(line, pos, "**", Token::Bold) {
                return Some(span);
            }
        }
        if rest.starts_with('`') {
            if let Some(span) = match_pair(line, pos, "`", Token::Code) {
                return Some(span);
            }
        }
        if rest.starts_with('_') {
            if let Some(span) = self.match_italic(line, pos) {
                return Some(span);
            }
        }
        if rest.starts_with('[') {
            return match_link(line, pos);
        }
        None
    }

    /// `_text_`, with intraword underscores left alone when configured.
    fn match_italic(&self, line: &str, pos: usize) -> Option<Span> {
        if !self.intraword_underscore {
            return match_pair(line, pos, "_", Token::Italic);
        }

        let prev = line[..pos].chars().next_back();
        let after_open = &line[pos + 1..];
        let first = after_open.chars().next()?;
        if prev.is_some_and(char::is_alphanumeric) || first.is_whitespace() {
            return None;
        }

        let content_start = pos + 1;
        let mut search = content_start;
        while let Some(rel) = line[search..].find('_') {
            let close = search + rel;
            let before = line[..close].chars().next_back();
            let after = line[close + 1..].chars().next();
            let closes = close > content_start
                && !before.is_some_and(char::is_whitespace)
                && !after.is_some_and(char::is_alphanumeric);
            if closes {
                let content = line[content_start..close].to_string();
                return Some((Token::Italic(content), close + 1));
            }
            search = close + 1;
        }
        None
    }
}

/// Match `marker content marker` starting at `pos`, taking the nearest
/// closing marker.
fn match_pair(line: &str, pos: usize, marker: &str, make: fn(String) -> Token) -> Option<Span> {
    let content_start = pos + marker.len();
    let rel = line[content_start..].find(marker)?;
    let content_end = content_start + rel;
    Some((
        make(line[content_start..content_end].to_string()),
        content_end + marker.len(),
    ))
}

/// Match `[label](url)` starting at `pos`.
fn match_link(line: &str, pos: usize) -> Option<Span> {
    let label_start = pos + 1;
    let label_end = label_start + line[label_start..].find("](")?;
    let url_start = label_end + 2;
    let url_end = url_start + line[url_start..].find(')')?;
    Some((
        Token::Link {
            label: line[label_start..label_end].to_string(),
            url: line[url_start..url_end].to_string(),
        },
        url_end + 1,
    ))
}
