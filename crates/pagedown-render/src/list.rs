//! List rendering.
//!
//! One row per item: the bullet sits `bullet_offset` points left of the
//! item text, which is indented by the list style's indent. Wrapped lines
//! of an item align with its first line.

use crate::metrics::Font;
use crate::text::{draw_line, wrap_runs};
use crate::RenderContext;
use pagedown_parser::parse_inline;

/// Render a bullet list.
pub fn render_list(ctx: &mut RenderContext<'_>, items: &[String]) {
    let style = ctx.config.style.list;
    let bullet = ctx.config.style.bullet.clone();
    let bullet_x = (style.indent - ctx.config.style.bullet_offset).max(0.0);
    let width = (ctx.layout.width() - style.indent).max(0.0);
    let leading = style.leading();

    ctx.layout.space_before(style.top);

    for item in items {
        let lines = wrap_runs(&parse_inline(item), style.size, false, width);
        if lines.is_empty() {
            // Keep a row for the bullet of an empty item
            ctx.layout.ensure_space(leading);
            draw_bullet(ctx, &bullet, bullet_x, style.size, leading);
            ctx.layout.advance(leading);
            continue;
        }

        for (i, line) in lines.iter().enumerate() {
            ctx.layout.ensure_space(leading);
            if i == 0 {
                draw_bullet(ctx, &bullet, bullet_x, style.size, leading);
            }
            let top = ctx.layout.cursor();
            draw_line(ctx, line, style.indent, top, style.size, leading, width, false);
            ctx.layout.advance(leading);
        }
    }

    ctx.layout.advance(style.bottom);
}

fn draw_bullet(ctx: &mut RenderContext<'_>, bullet: &str, x: f32, size: f32, leading: f32) {
    let baseline = ctx.layout.cursor() + (leading - size) / 2.0 + size * 0.8;
    let color = ctx.colors.text;
    ctx.layout
        .canvas()
        .text(x, baseline, Font::Regular, size, color, bullet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedown_config::Config;

    #[test]
    fn test_list_advances_per_item() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        let items = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        render_list(&mut ctx, &items);

        let style = config.style.list;
        let expected = 3.0 * style.leading() + style.bottom;
        assert!((ctx.layout.cursor() - expected).abs() < 0.001);
    }

    #[test]
    fn test_long_item_wraps() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        let items = vec!["word ".repeat(200)];
        render_list(&mut ctx, &items);
        assert!(ctx.layout.cursor() > 3.0 * config.style.list.leading());
    }

    #[test]
    fn test_many_items_paginate() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        let items: Vec<String> = (0..200).map(|i| format!("item {}", i)).collect();
        render_list(&mut ctx, &items);
        assert!(ctx.layout.page_count() > 1);
    }
}
