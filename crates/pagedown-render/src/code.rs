//! Code block and note rendering.
//!
//! Both are boxes of lines: a filled background with padding, drawn one
//! page-sized chunk at a time so a long box continues on the next page
//! with its own padding. Code boxes have a thin outline and verbatim
//! monospaced text. Notes have a coloured bar on the left edge and
//! inline-formatted text.

use crate::metrics::Font;
use crate::text::{draw_line, wrap_runs, Line};
use crate::RenderContext;
use pagedown_config::Rgb;
use pagedown_parser::parse_inline;

/// Tab stops used when laying out code.
const TAB_WIDTH: usize = 4;

/// Decoration of a box.
#[derive(Debug, Clone, Copy)]
struct BoxStyle {
    padding: f32,
    leading: f32,
    fill: Rgb,
    /// Outline width and colour
    outline: Option<(f32, Rgb)>,
    /// Left bar width and colour
    bar: Option<(f32, Rgb)>,
}

/// Draw `count` lines inside boxes, splitting across pages as needed.
///
/// `draw` receives the layout context, the line index and the top of the
/// line box.
fn draw_boxed<F>(ctx: &mut RenderContext<'_>, count: usize, style: BoxStyle, mut draw: F)
where
    F: FnMut(&mut RenderContext<'_>, usize, f32),
{
    let chrome = 2.0 * style.padding;
    let mut next = 0;

    while next < count {
        if ctx.layout.remaining() < chrome + style.leading {
            ctx.layout.ensure_space(chrome + style.leading);
        }

        let fits = ((ctx.layout.remaining() - chrome) / style.leading).floor();
        let take = if fits >= 1.0 { fits as usize } else { 1 };
        let take = take.min(count - next);
        let height = chrome + take as f32 * style.leading;

        let top = ctx.layout.cursor();
        let width = ctx.layout.width();
        let canvas = ctx.layout.canvas();
        canvas.fill_rect(0.0, top, width, height, style.fill);
        if let Some((line, color)) = style.outline {
            canvas.stroke_rect(0.0, top, width, height, line, color);
        }
        if let Some((bar, color)) = style.bar {
            canvas.fill_rect(0.0, top, bar, height, color);
        }

        for i in 0..take {
            let line_top = top + style.padding + i as f32 * style.leading;
            draw(ctx, next + i, line_top);
        }

        ctx.layout.advance(height);
        next += take;
        if next < count {
            ctx.layout.break_page();
        }
    }
}

/// Break a code line every `max_chars` characters.
///
/// Tabs are expanded first. Continuation lines keep the line's leading
/// indentation when it leaves room for text.
pub fn code_wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let expanded = text.replace('\t', &" ".repeat(TAB_WIDTH));
    let chars: Vec<char> = expanded.chars().collect();
    if chars.len() <= max_chars {
        return vec![expanded];
    }

    let indent = chars.iter().take_while(|c| **c == ' ').count();
    let indent = if indent * 2 < max_chars { indent } else { 0 };

    let mut lines = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let room = if start == 0 { max_chars } else { max_chars - indent };
        let end = (start + room).min(chars.len());
        let chunk: String = chars[start..end].iter().collect();
        if start == 0 {
            lines.push(chunk);
        } else {
            lines.push(format!("{}{}", " ".repeat(indent), chunk));
        }
        start = end;
    }
    lines
}

/// Render a fenced code block.
pub fn render_code(ctx: &mut RenderContext<'_>, text: &str) {
    let style = ctx.config.style.code;
    let text_width = (ctx.layout.width() - 2.0 * style.padding).max(0.0);
    let char_width = Font::Mono.char_width(' ', style.size);
    let max_chars = if char_width > 0.0 {
        (text_width / char_width).floor() as usize
    } else {
        1
    };

    let lines: Vec<String> = text.split('\n').flat_map(|l| code_wrap(l, max_chars)).collect();
    let leading = style.leading();
    let boxed = BoxStyle {
        padding: style.padding,
        leading,
        fill: ctx.colors.code_background,
        outline: Some((style.border, ctx.colors.code_border)),
        bar: None,
    };
    let color = ctx.colors.text;

    ctx.layout.space_before(style.top);
    draw_boxed(ctx, lines.len(), boxed, |ctx, i, top| {
        let baseline = top + (leading - style.size) / 2.0 + style.size * 0.8;
        ctx.layout
            .canvas()
            .text(style.padding, baseline, Font::Mono, style.size, color, &lines[i]);
    });
    ctx.layout.advance(style.bottom);
}

/// Render a note callout.
pub fn render_note(ctx: &mut RenderContext<'_>, text: &str) {
    let style = ctx.config.style.note;
    let inset = style.border + style.padding;
    let width = (ctx.layout.width() - inset - style.padding).max(0.0);
    let lines: Vec<Line> = wrap_runs(&parse_inline(text), style.size, false, width);
    if lines.is_empty() {
        return;
    }

    let leading = style.leading();
    let boxed = BoxStyle {
        padding: style.padding,
        leading,
        fill: ctx.colors.note_background,
        outline: None,
        bar: Some((style.border, ctx.colors.note_border)),
    };

    ctx.layout.space_before(style.top);
    draw_boxed(ctx, lines.len(), boxed, |ctx, i, top| {
        draw_line(ctx, &lines[i], inset, top, style.size, leading, width, false);
    });
    ctx.layout.advance(style.bottom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedown_config::Config;

    #[test]
    fn test_code_wrap_short() {
        assert_eq!(code_wrap("let x = 1;", 80), vec!["let x = 1;"]);
        assert_eq!(code_wrap("", 80), vec![""]);
    }

    #[test]
    fn test_code_wrap_long_keeps_indent() {
        let line = format!("    {}", "x".repeat(20));
        let lines = code_wrap(&line, 10);
        assert_eq!(lines[0], "    xxxxxx");
        assert!(lines[1..].iter().all(|l| l.starts_with("    ")));
        let total: usize = lines.iter().map(|l| l.trim_start().len()).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_code_wrap_expands_tabs() {
        assert_eq!(code_wrap("\tx", 80), vec!["    x"]);
    }

    #[test]
    fn test_code_wrap_zero_width() {
        assert_eq!(code_wrap("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_code_block_height() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        render_code(&mut ctx, "one\ntwo\nthree");

        let style = config.style.code;
        let expected = 2.0 * style.padding + 3.0 * style.leading() + style.bottom;
        assert!((ctx.layout.cursor() - expected).abs() < 0.001);
        assert_eq!(ctx.layout.page_count(), 1);
    }

    #[test]
    fn test_long_code_block_splits() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        let code: Vec<String> = (0..200).map(|i| format!("line {}", i)).collect();
        render_code(&mut ctx, &code.join("\n"));
        assert!(ctx.layout.page_count() >= 3);
    }

    #[test]
    fn test_note_height() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        render_note(&mut ctx, "Remember **this**.");

        let style = config.style.note;
        let expected = 2.0 * style.padding + style.leading() + style.bottom;
        assert!((ctx.layout.cursor() - expected).abs() < 0.001);
    }
}
