//! PDF page canvas.
//!
//! Drawing calls take layout coordinates: `x` grows rightwards from the
//! left margin and `y` grows downwards from the top margin. The canvas
//! converts them to PDF user space when writing the content stream.

use crate::metrics::{encode_win_ansi, Font};
use pagedown_config::{PageConfig, Rgb};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

/// Producer string written to the document info dictionary.
const PRODUCER: &str = "pagedown";

/// A sequence of pages under construction.
pub struct Canvas {
    page: PageConfig,
    /// Finished content streams of earlier pages
    pages: Vec<Vec<u8>>,
    current: Content,
}

impl Canvas {
    /// Start a document with one empty page.
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            pages: Vec::new(),
            current: Content::new(),
        }
    }

    /// Page geometry.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Number of pages, including the one being drawn.
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Close the current page and start a new one.
    pub fn new_page(&mut self) {
        let finished = std::mem::replace(&mut self.current, Content::new());
        self.pages.push(finished.finish().to_vec());
    }

    fn abs_x(&self, x: f32) -> f32 {
        self.page.margin + x
    }

    fn abs_y(&self, y: f32) -> f32 {
        self.page.height - self.page.margin - y
    }

    /// Draw a string with its baseline at `baseline`.
    pub fn text(&mut self, x: f32, baseline: f32, font: Font, size: f32, color: Rgb, text: &str) {
        if text.is_empty() {
            return;
        }
        let bytes = encode_win_ansi(text);
        let (px, py) = (self.abs_x(x), self.abs_y(baseline));
        self.current.set_fill_rgb(color.r, color.g, color.b);
        self.current.begin_text();
        self.current.set_font(Name(font.resource_name()), size);
        self.current.set_text_matrix([1.0, 0.0, 0.0, 1.0, px, py]);
        self.current.show(Str(&bytes));
        self.current.end_text();
    }

    /// Fill a rectangle whose top-left corner is at (`x`, `y`).
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let (px, py) = (self.abs_x(x), self.abs_y(y + height));
        self.current.save_state();
        self.current.set_fill_rgb(color.r, color.g, color.b);
        self.current.rect(px, py, width, height);
        self.current.fill_nonzero();
        self.current.restore_state();
    }

    /// Outline a rectangle whose top-left corner is at (`x`, `y`).
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line: f32, color: Rgb) {
        if line <= 0.0 {
            return;
        }
        let (px, py) = (self.abs_x(x), self.abs_y(y + height));
        self.current.save_state();
        self.current.set_line_width(line);
        self.current.set_stroke_rgb(color.r, color.g, color.b);
        self.current.rect(px, py, width, height);
        self.current.stroke();
        self.current.restore_state();
    }

    /// Horizontal line from `x1` to `x2` centred on `y`.
    pub fn hline(&mut self, x1: f32, x2: f32, y: f32, line: f32, color: Rgb) {
        if line <= 0.0 {
            return;
        }
        let py = self.abs_y(y);
        self.current.save_state();
        self.current.set_line_width(line);
        self.current.set_stroke_rgb(color.r, color.g, color.b);
        self.current.move_to(self.page.margin + x1, py);
        self.current.line_to(self.page.margin + x2, py);
        self.current.stroke();
        self.current.restore_state();
    }

    /// Serialize all pages into a PDF file.
    pub fn finish(mut self, title: &str) -> Vec<u8> {
        self.new_page();

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let info_id = alloc.bump();
        let font_ids: Vec<(Font, Ref)> = Font::ALL.iter().map(|&f| (f, alloc.bump())).collect();
        let page_ids: Vec<(Ref, Ref)> = self
            .pages
            .iter()
            .map(|_| (alloc.bump(), alloc.bump()))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|&(page_id, _)| page_id))
            .count(page_ids.len() as i32);
        pdf.document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr(PRODUCER));

        for &(font, id) in &font_ids {
            pdf.type1_font(id)
                .base_font(Name(font.base_name()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect::new(0.0, 0.0, self.page.width, self.page.height);
        for (&(page_id, content_id), content) in page_ids.iter().zip(&self.pages) {
            let mut page = pdf.page(page_id);
            page.media_box(media_box);
            page.parent(page_tree_id);
            page.contents(content_id);
            {
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for &(font, id) in &font_ids {
                    fonts.pair(Name(font.resource_name()), id);
                }
                fonts.finish();
                resources.finish();
            }
            page.finish();
            pdf.stream(content_id, content);
        }

        pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_empty_canvas_is_one_page() {
        let canvas = Canvas::new(PageConfig::default());
        assert_eq!(canvas.page_count(), 1);
        let bytes = canvas.finish("empty");
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages"), 1);
    }

    #[test]
    fn test_new_page_counts() {
        let mut canvas = Canvas::new(PageConfig::default());
        canvas.text(0.0, 10.0, Font::Regular, 10.0, Rgb::BLACK, "one");
        canvas.new_page();
        canvas.text(0.0, 10.0, Font::Bold, 10.0, Rgb::BLACK, "two");
        assert_eq!(canvas.page_count(), 2);
        let bytes = canvas.finish("two pages");
        assert!(count(&bytes, b"/Count 2") >= 1);
    }

    #[test]
    fn test_fonts_and_title_written() {
        let bytes = Canvas::new(PageConfig::default()).finish("notes.md");
        assert!(count(&bytes, b"/Helvetica-Bold") >= 1);
        assert!(count(&bytes, b"/Courier") >= 1);
        assert!(count(&bytes, b"/WinAnsiEncoding") >= 1);
        assert!(count(&bytes, b"notes.md") >= 1);
    }
}
