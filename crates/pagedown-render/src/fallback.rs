//! Plain fallback renderer.
//!
//! Used when the layout renderer fails. It works from the markdown source
//! line by line: lines starting with a heading prefix get that heading's
//! size in bold, everything else is set as body text. Lists, tables, code
//! and inline markup are not interpreted; their lines appear as written,
//! minus code fence markers.

use crate::layout::Layout;
use crate::metrics::Font;
use crate::text::wrap_plain;
use crate::{DocumentRenderer, RenderedDocument};
use log::debug;
use pagedown_config::{BlockStyle, Config};
use pagedown_core::Result;

/// Renderer that only distinguishes headings from body lines.
#[derive(Debug, Clone, Copy)]
pub struct PlainRenderer<'a> {
    config: &'a Config,
}

impl<'a> PlainRenderer<'a> {
    /// Create a plain renderer.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Heading style for a line, with the prefix removed.
    fn classify<'l>(&self, line: &'l str) -> Option<(&'l str, BlockStyle)> {
        let style = &self.config.style;
        [
            ("# ", style.title),
            ("## ", style.subtitle),
            ("### ", style.heading1),
            ("#### ", style.heading2),
        ]
        .into_iter()
        .find_map(|(prefix, slot)| line.strip_prefix(prefix).map(|rest| (rest, slot)))
    }
}

impl DocumentRenderer for PlainRenderer<'_> {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, markdown: &str, title: &str) -> Result<RenderedDocument> {
        let page = self.config.page;
        let body_size = page.font_size;
        let body_leading = page.font_size * page.line_height;
        let color = self.config.computed_style().text;
        let mut layout = Layout::new(page);
        let width = layout.width();

        for raw in markdown.lines() {
            let line = raw.trim();
            if line.starts_with("```") {
                continue;
            }
            if line.is_empty() {
                layout.space_before(body_leading / 2.0);
                continue;
            }

            let (text, font, size, leading, bottom) = match self.classify(line) {
                Some((rest, slot)) => {
                    layout.space_before(slot.top);
                    (rest, Font::Bold, slot.size, slot.leading(), slot.bottom)
                }
                None => (line, Font::Regular, body_size, body_leading, 0.0),
            };

            for wrapped in wrap_plain(text, font, size, width) {
                layout.ensure_space(leading);
                let baseline = layout.cursor() + (leading - size) / 2.0 + size * 0.8;
                layout.canvas().text(0.0, baseline, font, size, color, &wrapped);
                layout.advance(leading);
            }
            layout.advance(bottom);
        }

        let page_count = layout.page_count();
        debug!("plain renderer produced {} pages", page_count);
        Ok(RenderedDocument {
            bytes: layout.finish(title),
            page_count,
            renderer: self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        let config = Config::default();
        let renderer = PlainRenderer::new(&config);
        let (text, style) = renderer.classify("## Setup").unwrap();
        assert_eq!(text, "Setup");
        assert_eq!(style, config.style.subtitle);
        assert_eq!(renderer.classify("#### Deep").unwrap().1, config.style.heading2);
        assert!(renderer.classify("plain").is_none());
        assert!(renderer.classify("#nospace").is_none());
    }

    #[test]
    fn test_render_produces_pdf() {
        let config = Config::default();
        let doc = PlainRenderer::new(&config)
            .render("# Title\n\n| a | b |\n- item\n```\ncode\n```", "t.md")
            .unwrap();
        assert!(doc.bytes.starts_with(b"%PDF-"));
        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.renderer, "plain");
    }

    #[test]
    fn test_render_paginates() {
        let config = Config::default();
        let markdown = "A line of body text.\n".repeat(300);
        let doc = PlainRenderer::new(&config).render(&markdown, "long").unwrap();
        assert!(doc.page_count > 1);
    }

    #[test]
    fn test_empty_input() {
        let config = Config::default();
        let doc = PlainRenderer::new(&config).render("", "empty").unwrap();
        assert_eq!(doc.page_count, 1);
        assert!(!doc.bytes.is_empty());
    }
}
