//! Pagedown Render
//!
//! This crate lays out parsed markdown blocks on fixed-size pages and
//! writes them as a PDF document.
//!
//! # Features
//!
//! - **Four heading levels** - bold, sized from the style config
//! - **Justified paragraphs** - wrapped by font metrics
//! - **Inline formatting** - bold, italic, code and link labels
//! - **Code and note boxes** - split across pages when needed
//! - **Tables** - equal-width bordered grid with a repeated header row,
//!   squeezed to fit the page width and split across pages
//! - **Fallback** - a plain renderer takes over when layout fails
//!
//! # Example
//!
//! ```
//! let bytes = pagedown_render::render("# Hello\n\nSome **bold** text.", "hello.md");
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

pub mod canvas;
pub mod code;
pub mod fallback;
pub mod heading;
pub mod layout;
pub mod list;
pub mod metrics;
pub mod table;
pub mod text;

pub use canvas::Canvas;
pub use code::{code_wrap, render_code, render_note};
pub use fallback::PlainRenderer;
pub use heading::{heading_style, render_heading};
pub use layout::Layout;
pub use list::render_list;
pub use metrics::{encode_win_ansi, Font};
pub use table::{render_table, TableLayout, MIN_CELL_PADDING, MIN_CELL_WIDTH};
pub use text::{render_paragraph, wrap_plain, wrap_runs, Line};

use log::{debug, error, warn};
use pagedown_config::{ComputedStyle, Config, PageConfig};
use pagedown_core::{Block, PagedownError, Result};
use pagedown_parser::parse_document;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A finished document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// PDF file contents
    pub bytes: Vec<u8>,
    /// Number of pages
    pub page_count: usize,
    /// Name of the renderer that produced it
    pub renderer: &'static str,
}

/// Something that turns markdown into a document.
pub trait DocumentRenderer {
    /// Short name, used in logs and [`RenderedDocument::renderer`].
    fn name(&self) -> &'static str;

    /// Render `markdown` into a document titled `title`.
    fn render(&self, markdown: &str, title: &str) -> Result<RenderedDocument>;
}

/// State shared by the block renderers while one document is laid out.
pub struct RenderContext<'a> {
    /// Pagination cursor and canvas
    pub layout: Layout,
    /// Settings for this render
    pub config: &'a Config,
    /// Resolved colours
    pub colors: ComputedStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a context on a fresh first page.
    pub fn new(config: &'a Config) -> Self {
        Self {
            layout: Layout::new(config.page),
            config,
            colors: config.computed_style(),
        }
    }
}

/// The full renderer: styled blocks, boxes, tables and inline formatting.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRenderer<'a> {
    config: &'a Config,
}

impl<'a> LayoutRenderer<'a> {
    /// Create a layout renderer.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render already parsed blocks.
    pub fn render_blocks(&self, blocks: &[Block], title: &str) -> Result<RenderedDocument> {
        let mut ctx = RenderContext::new(self.config);
        for block in blocks {
            render_block(&mut ctx, block)?;
        }

        let page_count = ctx.layout.page_count();
        Ok(RenderedDocument {
            bytes: ctx.layout.finish(title),
            page_count,
            renderer: self.name(),
        })
    }
}

impl DocumentRenderer for LayoutRenderer<'_> {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn render(&self, markdown: &str, title: &str) -> Result<RenderedDocument> {
        let blocks = parse_document(markdown);
        debug!("{}: parsed {} blocks", title, blocks.len());
        self.render_blocks(&blocks, title)
    }
}

/// Render one block at the cursor.
pub fn render_block(ctx: &mut RenderContext<'_>, block: &Block) -> Result<()> {
    match block {
        Block::Title(text)
        | Block::Subtitle(text)
        | Block::Heading1(text)
        | Block::Heading2(text) => {
            render_heading(ctx, block.kind(), text);
        }
        Block::Paragraph(text) => render_paragraph(ctx, text),
        Block::Code(text) => render_code(ctx, text),
        Block::List(items) => render_list(ctx, items),
        Block::Table(rows) => render_table(ctx, rows)?,
        Block::Separator => render_separator(ctx),
        Block::Note(text) => render_note(ctx, text),
    }
    Ok(())
}

/// A horizontal rule across the printable width.
pub fn render_separator(ctx: &mut RenderContext<'_>) {
    let style = ctx.config.style.separator;
    let color = ctx.colors.rule;

    ctx.layout.space_before(style.top);
    ctx.layout.ensure_space(style.border);
    let y = ctx.layout.cursor() + style.border / 2.0;
    let width = ctx.layout.width();
    ctx.layout.canvas().hline(0.0, width, y, style.border, color);
    ctx.layout.advance(style.border);
    ctx.layout.advance(style.bottom);
}

/// A one-page blank document.
pub fn empty_document(page: PageConfig, title: &str) -> RenderedDocument {
    RenderedDocument {
        bytes: Canvas::new(page).finish(title),
        page_count: 1,
        renderer: "empty",
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run a renderer, turning a panic into an error.
fn attempt(
    renderer: &dyn DocumentRenderer,
    markdown: &str,
    title: &str,
) -> Result<RenderedDocument> {
    catch_unwind(AssertUnwindSafe(|| renderer.render(markdown, title))).unwrap_or_else(
        |payload| {
            Err(PagedownError::Render(format!(
                "{} renderer panicked: {}",
                renderer.name(),
                panic_message(payload.as_ref())
            )))
        },
    )
}

/// Render with a primary renderer, falling back on failure.
///
/// Never fails: if the fallback is missing or fails too, the result is a
/// blank one-page document.
pub fn render_with_fallback(
    primary: &dyn DocumentRenderer,
    fallback: Option<&dyn DocumentRenderer>,
    markdown: &str,
    title: &str,
    page: PageConfig,
) -> RenderedDocument {
    let err = match attempt(primary, markdown, title) {
        Ok(doc) => return doc,
        Err(e) => e,
    };

    let Some(fallback) = fallback else {
        error!(
            "{}: {} renderer failed: {}; writing an empty document",
            title,
            primary.name(),
            err
        );
        return empty_document(page, title);
    };

    warn!(
        "{}: {} renderer failed: {}; using {} renderer",
        title,
        primary.name(),
        err,
        fallback.name()
    );
    match attempt(fallback, markdown, title) {
        Ok(doc) => doc,
        Err(e) => {
            error!(
                "{}: {} renderer failed too: {}; writing an empty document",
                title,
                fallback.name(),
                e
            );
            empty_document(page, title)
        }
    }
}

/// Render markdown with the given settings.
pub fn render_with_config(markdown: &str, output_name: &str, config: &Config) -> RenderedDocument {
    let primary = LayoutRenderer::new(config);
    let plain = PlainRenderer::new(config);
    let fallback: Option<&dyn DocumentRenderer> = if config.features.fallback {
        Some(&plain as &dyn DocumentRenderer)
    } else {
        None
    };

    let doc = render_with_fallback(&primary, fallback, markdown, output_name, config.page);
    debug!(
        "{}: {} pages, {} bytes, {} renderer",
        output_name,
        doc.page_count,
        doc.bytes.len(),
        doc.renderer
    );
    doc
}

/// Render markdown to PDF bytes with the default settings.
///
/// `output_name` becomes the document title. This never fails and never
/// returns an empty buffer.
pub fn render(markdown: &str, output_name: &str) -> Vec<u8> {
    render_with_config(markdown, output_name, &Config::default()).bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Panicking;

    impl DocumentRenderer for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn render(&self, _markdown: &str, _title: &str) -> Result<RenderedDocument> {
            panic!("layout engine exploded")
        }
    }

    struct Failing;

    impl DocumentRenderer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn render(&self, _markdown: &str, _title: &str) -> Result<RenderedDocument> {
            Err(PagedownError::Render("nope".into()))
        }
    }

    fn table_with_columns(count: usize) -> String {
        let header: Vec<String> = (0..count).map(|i| format!("c{}", i)).collect();
        format!("| {} |", header.join(" | "))
    }

    #[test]
    fn test_render_simple() {
        let bytes = render("# Title\n\nHello **world**", "doc.md");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_empty_input_is_one_page() {
        let doc = render_with_config("", "empty.md", &Config::default());
        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.renderer, "layout");
        assert!(!doc.bytes.is_empty());
    }

    #[test]
    fn test_every_block_kind() {
        let markdown = "# T\n## S\n### H1\n#### H2\ntext\n```\ncode\n```\n- a\n- b\n| x | y |\n|---|---|\n| 1 | 2 |\n---\n> note";
        let doc = render_with_config(markdown, "all.md", &Config::default());
        assert_eq!(doc.renderer, "layout");
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_wide_table_stays_in_layout() {
        let markdown = format!(
            "# Report\n\n- item\n\n```\ncode\n```\n\n{}",
            table_with_columns(19)
        );
        let doc = render_with_config(&markdown, "wide.md", &Config::default());
        assert_eq!(doc.renderer, "layout");
    }

    #[test]
    fn test_layout_failure_uses_fallback() {
        let doc = render_with_config(&table_with_columns(400), "wide.md", &Config::default());
        assert_eq!(doc.renderer, "plain");
        assert!(doc.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_fallback_disabled_gives_empty_document() {
        let mut config = Config::default();
        config.features.fallback = false;
        let doc = render_with_config(&table_with_columns(400), "wide.md", &config);
        assert_eq!(doc.renderer, "empty");
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_panic_is_caught() {
        let config = Config::default();
        let plain = PlainRenderer::new(&config);
        let fallback: Option<&dyn DocumentRenderer> = Some(&plain);
        let doc = render_with_fallback(&Panicking, fallback, "# Hi", "p.md", config.page);
        assert_eq!(doc.renderer, "plain");
    }

    #[test]
    fn test_both_failing_gives_empty_document() {
        let fallback: Option<&dyn DocumentRenderer> = Some(&Panicking);
        let doc = render_with_fallback(&Failing, fallback, "text", "f.md", PageConfig::default());
        assert_eq!(doc.renderer, "empty");
        assert!(doc.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_long_document_paginates() {
        let markdown = "A paragraph line that is long enough to matter.\n".repeat(200);
        let doc = render_with_config(&markdown, "long.md", &Config::default());
        assert!(doc.page_count > 1);
    }

    #[test]
    fn test_separator_advances() {
        let config = Config::default();
        let mut ctx = RenderContext::new(&config);
        ctx.layout.advance(10.0);
        render_separator(&mut ctx);
        let style = config.style.separator;
        let expected = 10.0 + style.top + style.border + style.bottom;
        assert!((ctx.layout.cursor() - expected).abs() < 0.001);
    }
}
