//! Heading rendering.
//!
//! Four heading slots, all bold and left aligned:
//! - title: `#`
//! - subtitle: `##`
//! - heading1: `###`
//! - heading2: `####`
//!
//! The slot sizes come from the style config. By default `#` is set a step
//! below the largest size, so a title reads as a section heading.

use crate::text::render_text_block;
use crate::RenderContext;
use pagedown_config::{BlockStyle, StyleConfig};
use pagedown_core::BlockKind;

/// The style slot used for a heading kind, if `kind` is a heading.
pub fn heading_style(style: &StyleConfig, kind: BlockKind) -> Option<BlockStyle> {
    match kind {
        BlockKind::Title => Some(style.title),
        BlockKind::Subtitle => Some(style.subtitle),
        BlockKind::Heading1 => Some(style.heading1),
        BlockKind::Heading2 => Some(style.heading2),
        _ => None,
    }
}

/// Render a heading.
///
/// The space above a heading is dropped when it starts a page.
pub fn render_heading(ctx: &mut RenderContext<'_>, kind: BlockKind, text: &str) {
    let Some(style) = heading_style(&ctx.config.style, kind) else {
        return;
    };
    render_text_block(ctx, text, &style, true, false);
}
