//! Vertical layout cursor and pagination.

use crate::canvas::Canvas;
use pagedown_config::PageConfig;

/// Tracks the vertical position on the current page.
///
/// The cursor is the distance below the top margin. Before every unit of
/// content the caller asks for space with [`Layout::ensure_space`]; when
/// the unit would cross the bottom margin a new page is started.
pub struct Layout {
    canvas: Canvas,
    cursor: f32,
    width: f32,
    height: f32,
}

impl Layout {
    /// Start laying out on a fresh first page.
    pub fn new(page: PageConfig) -> Self {
        Self {
            width: page.printable_width(),
            height: page.printable_height(),
            canvas: Canvas::new(page),
            cursor: 0.0,
        }
    }

    /// The canvas being drawn on.
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Current distance below the top margin.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Printable width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Printable height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Height left on the current page.
    pub fn remaining(&self) -> f32 {
        (self.height - self.cursor).max(0.0)
    }

    /// Whether nothing has been placed on the current page yet.
    pub fn at_page_top(&self) -> bool {
        self.cursor <= 0.0
    }

    /// Number of pages so far.
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Make room for `height` points of content.
    ///
    /// Starts a new page when the content would overflow and the current
    /// page already holds something; content taller than a whole page is
    /// placed at the top of a page and allowed to overflow. Returns whether
    /// a page break happened.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.cursor > 0.0 && self.cursor + height > self.height {
            self.break_page();
            return true;
        }
        false
    }

    /// Start a new page unconditionally.
    pub fn break_page(&mut self) {
        self.canvas.new_page();
        self.cursor = 0.0;
    }

    /// Move the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.cursor += dy.max(0.0);
    }

    /// Space above a block. Dropped at the top of a page.
    pub fn space_before(&mut self, top: f32) {
        if !self.at_page_top() {
            self.advance(top);
        }
    }

    /// Serialize the document.
    pub fn finish(self, title: &str) -> Vec<u8> {
        self.canvas.finish(title)
    }
}
