//! Text measurement and wrapping.
//!
//! Styled runs are split into words on whitespace. A word can span several
//! runs (`**bold**,` is one word in two fonts), so a word is a list of
//! pieces. Lines are filled greedily by measured width; a word wider than a
//! whole line is broken between characters.

use crate::metrics::Font;
use crate::RenderContext;
use pagedown_config::BlockStyle;
use pagedown_core::{RunStyle, StyledRun};
use pagedown_parser::parse_inline;

/// Inline code is drawn slightly smaller than the surrounding text.
pub const CODE_SCALE: f32 = 0.9;

/// Text in a single font.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub text: String,
    pub font: Font,
    pub size: f32,
}

impl Piece {
    /// Measured width.
    pub fn width(&self) -> f32 {
        self.font.text_width(&self.text, self.size)
    }
}

/// A run of non-whitespace characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub pieces: Vec<Piece>,
    pub width: f32,
}

impl Word {
    fn new() -> Self {
        Self {
            pieces: Vec::new(),
            width: 0.0,
        }
    }

    fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn push(&mut self, ch: char, font: Font, size: f32) {
        self.width += font.char_width(ch, size);
        match self.pieces.last_mut() {
            Some(last) if last.font == font && last.size == size => last.text.push(ch),
            _ => self.pieces.push(Piece {
                text: ch.to_string(),
                font,
                size,
            }),
        }
    }

    /// Characters of the word without styling.
    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }
}

/// One wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub words: Vec<Word>,
    /// Width with single spaces between words
    pub width: f32,
    /// Width of one inter-word space
    pub space: f32,
}

impl Line {
    /// Characters of the line, words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split styled runs into measured words.
pub fn split_words(runs: &[StyledRun], size: f32, bold: bool) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::new();

    for run in runs {
        let font = Font::for_run(run.style, bold);
        let run_size = if run.style == RunStyle::Code {
            size * CODE_SCALE
        } else {
            size
        };

        for ch in run.text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::replace(&mut current, Word::new()));
                }
            } else {
                current.push(ch, font, run_size);
            }
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Break a word that is wider than `max_width` into pieces that fit.
///
/// Every chunk holds at least one character, so this always makes progress.
fn break_word(word: Word, max_width: f32) -> Vec<Word> {
    let mut chunks = Vec::new();
    let mut current = Word::new();

    for piece in word.pieces {
        for ch in piece.text.chars() {
            let w = piece.font.char_width(ch, piece.size);
            if !current.is_empty() && current.width + w > max_width {
                chunks.push(std::mem::replace(&mut current, Word::new()));
            }
            current.push(ch, piece.font, piece.size);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Fill lines greedily.
pub fn wrap_words(words: Vec<Word>, max_width: f32, space_width: f32) -> Vec<Line> {
    let empty = || Line {
        words: Vec::new(),
        width: 0.0,
        space: space_width,
    };
    let mut lines = Vec::new();
    let mut current = empty();

    let fitted = words.into_iter().flat_map(|word| {
        if word.width > max_width {
            break_word(word, max_width)
        } else {
            vec![word]
        }
    });

    for word in fitted {
        let needed = if current.words.is_empty() {
            word.width
        } else {
            current.width + space_width + word.width
        };

        if !current.words.is_empty() && needed > max_width {
            lines.push(std::mem::replace(&mut current, empty()));
            current.width = word.width;
        } else {
            current.width = needed;
        }
        current.words.push(word);
    }

    if !current.words.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split and wrap styled runs in one step.
pub fn wrap_runs(runs: &[StyledRun], size: f32, bold: bool, max_width: f32) -> Vec<Line> {
    let space = Font::for_run(RunStyle::Plain, bold).char_width(' ', size);
    wrap_words(split_words(runs, size, bold), max_width, space)
}

/// Wrap unstyled text in a single font, returning the line strings.
pub fn wrap_plain(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let words: Vec<Word> = text
        .split_whitespace()
        .map(|w| {
            let mut word = Word::new();
            for ch in w.chars() {
                word.push(ch, font, size);
            }
            word
        })
        .collect();
    let space = font.char_width(' ', size);
    wrap_words(words, max_width, space)
        .iter()
        .map(Line::text)
        .collect()
}

/// Draw one wrapped line whose box starts `line_top` below the top margin.
///
/// With `justify`, the spaces are stretched so the line spans `max_width`.
#[allow(clippy::too_many_arguments)]
pub fn draw_line(
    ctx: &mut RenderContext<'_>,
    line: &Line,
    x: f32,
    line_top: f32,
    size: f32,
    leading: f32,
    max_width: f32,
    justify: bool,
) {
    let gaps = line.words.len().saturating_sub(1);
    let space = if justify && gaps > 0 && line.width < max_width {
        line.space + (max_width - line.width) / gaps as f32
    } else {
        line.space
    };

    let half_gap = (leading - size) / 2.0;
    let baseline = line_top + half_gap + size * 0.8;
    let text_color = ctx.colors.text;
    let code_bg = ctx.colors.code_background;

    let mut pen = x;
    for word in &line.words {
        for piece in &word.pieces {
            let width = piece.width();
            let canvas = ctx.layout.canvas();
            if piece.font == Font::Mono {
                canvas.fill_rect(pen, line_top + half_gap - 1.0, width, size + 2.0, code_bg);
            }
            canvas.text(pen, baseline, piece.font, piece.size, text_color, &piece.text);
            pen += width;
        }
        pen += space;
    }
}

/// Lay out inline-formatted text as a block: space above, wrapped lines
/// with pagination, space below.
pub fn render_text_block(
    ctx: &mut RenderContext<'_>,
    text: &str,
    style: &BlockStyle,
    bold: bool,
    justify: bool,
) {
    ctx.layout.space_before(style.top);

    let width = (ctx.layout.width() - style.indent).max(0.0);
    let leading = style.leading();
    let lines = wrap_runs(&parse_inline(text), style.size, bold, width);
    let last = lines.len().saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        ctx.layout.ensure_space(leading);
        let top = ctx.layout.cursor();
        let justify_line = justify && i < last;
        draw_line(ctx, line, style.indent, top, style.size, leading, width, justify_line);
        ctx.layout.advance(leading);
    }

    ctx.layout.advance(style.bottom);
}

/// A paragraph: body text, justified when enabled.
pub fn render_paragraph(ctx: &mut RenderContext<'_>, text: &str) {
    let style = ctx.config.style.paragraph;
    let justify = ctx.config.features.justify;
    render_text_block(ctx, text, &style, false, justify);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_split_words_across_runs() {
        let runs = vec![
            StyledRun::plain("say "),
            StyledRun::new("hello", RunStyle::Bold),
            StyledRun::plain(", world"),
        ];
        let words = split_words(&runs, 10.0, false);
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "hello,");
        assert_eq!(words[1].pieces.len(), 2);
        assert_eq!(words[1].pieces[0].font, Font::Bold);
        assert_eq!(words[1].pieces[1].font, Font::Regular);
    }

    #[test]
    fn test_inline_code_is_smaller() {
        let words = split_words(&[StyledRun::new("x()", RunStyle::Code)], 10.0, false);
        assert_eq!(words[0].pieces[0].size, 9.0);
        assert_eq!(words[0].pieces[0].font, Font::Mono);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
        let lines = wrap_runs(&[StyledRun::plain(text)], 10.0, false, 150.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 150.0 + 0.001);
        }
    }

    #[test]
    fn test_wrap_keeps_every_word() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let lines = wrap_runs(&[StyledRun::plain(text)], 10.0, false, 60.0);
        assert_eq!(texts(&lines).join(" "), text);
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_runs(&[StyledRun::plain("short")], 10.0, false, 500.0);
        assert_eq!(texts(&lines), vec!["short"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        let word = "x".repeat(200);
        let lines = wrap_runs(&[StyledRun::plain(word.clone())], 10.0, false, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(texts(&lines).concat(), word);
        for line in &lines {
            assert!(line.width <= 100.0 + 0.001);
        }
    }

    #[test]
    fn test_zero_width_still_progresses() {
        let lines = wrap_runs(&[StyledRun::plain("abc")], 10.0, false, 0.0);
        assert_eq!(texts(&lines), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_runs(&[], 10.0, false, 100.0).is_empty());
        assert!(wrap_plain("   ", Font::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_plain() {
        let lines = wrap_plain("one two three", Font::Mono, 10.0, 42.0);
        // "one two" is 7 * 6 = 42
        assert_eq!(lines, vec!["one two", "three"]);
    }
}
