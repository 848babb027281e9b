//! Table rendering.
//!
//! Renders tables as a bordered grid of equal-width columns. The first row
//! is the header: bold on a shaded background, and repeated at the top of
//! each page the table continues on.
//!
//! Crowded tables are squeezed rather than rejected: cell padding shrinks
//! first, then the cell font. Rows taller than a page are cut into
//! page-sized pieces.

use crate::text::{draw_line, wrap_runs, Line};
use crate::RenderContext;
use log::debug;
use pagedown_config::BlockStyle;
use pagedown_core::{PagedownError, Result};
use pagedown_parser::parse_inline;

/// Text width a cell gets before its font is scaled down, in points.
pub const MIN_CELL_WIDTH: f32 = 12.0;

/// Smallest padding a crowded table is squeezed to, in points.
pub const MIN_CELL_PADDING: f32 = 1.0;

/// Column geometry for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Width of each column including its padding
    pub column_widths: Vec<f32>,
    /// Padding on each side of a cell's text
    pub padding: f32,
    /// Font size of the cell text
    pub font_size: f32,
}

impl TableLayout {
    /// Split `available` evenly between `num_cols` columns.
    ///
    /// When a cell would hold less than [`MIN_CELL_WIDTH`] of text, the
    /// padding is reduced towards [`MIN_CELL_PADDING`] and then the font
    /// is scaled by the width still missing. Fails only when a column is
    /// too narrow to hold the minimum padding.
    pub fn calculate(num_cols: usize, available: f32, padding: f32, size: f32) -> Result<Self> {
        if num_cols == 0 {
            return Ok(Self {
                column_widths: Vec::new(),
                padding,
                font_size: size,
            });
        }

        let column = available / num_cols as f32;
        if column.is_nan() || column <= 2.0 * MIN_CELL_PADDING {
            return Err(PagedownError::Layout(format!(
                "{} columns of {:.1}pt leave no room for text",
                num_cols, column
            )));
        }

        let mut padding = padding;
        let mut font_size = size;
        if column - 2.0 * padding < MIN_CELL_WIDTH {
            padding = ((column - MIN_CELL_WIDTH) / 2.0)
                .max(MIN_CELL_PADDING)
                .min(padding);
            let text = column - 2.0 * padding;
            if text < MIN_CELL_WIDTH {
                font_size = size * text / MIN_CELL_WIDTH;
            }
            debug!(
                "{} columns of {:.1}pt: padding {:.1}pt, font {:.1}pt",
                num_cols, column, padding, font_size
            );
        }

        Ok(Self {
            column_widths: vec![column; num_cols],
            padding,
            font_size,
        })
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Width of the text area inside a cell of column `col`.
    pub fn content_width(&self, col: usize) -> f32 {
        self.column_widths.get(col).copied().unwrap_or(0.0) - 2.0 * self.padding
    }

    /// Total table width.
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// `style` with this layout's font size and padding.
    pub fn cell_style(&self, style: &BlockStyle) -> BlockStyle {
        BlockStyle {
            size: self.font_size,
            padding: self.padding,
            ..*style
        }
    }
}

/// A row with its cells wrapped and measured.
#[derive(Debug, Clone)]
struct MeasuredRow {
    cells: Vec<Vec<Line>>,
    height: f32,
    header: bool,
}

impl MeasuredRow {
    fn new(cells: Vec<Vec<Line>>, style: &BlockStyle, header: bool) -> Self {
        let line_count = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        Self {
            cells,
            height: line_count as f32 * style.leading() + 2.0 * style.padding,
            header,
        }
    }

    fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cut the row into pieces of at most `max_lines` lines per cell.
    fn split(&self, max_lines: usize, style: &BlockStyle) -> Vec<MeasuredRow> {
        let max_lines = max_lines.max(1);
        (0..self.line_count().max(1))
            .step_by(max_lines)
            .map(|start| {
                let cells = self
                    .cells
                    .iter()
                    .map(|lines| lines.iter().skip(start).take(max_lines).cloned().collect())
                    .collect();
                MeasuredRow::new(cells, style, self.header)
            })
            .collect()
    }
}

fn measure_row(
    cells: &[String],
    layout: &TableLayout,
    style: &BlockStyle,
    header: bool,
) -> MeasuredRow {
    let wrapped: Vec<Vec<Line>> = (0..layout.num_columns())
        .map(|col| {
            let width = layout.content_width(col);
            cells
                .get(col)
                .map(|cell| wrap_runs(&parse_inline(cell), style.size, header, width))
                .unwrap_or_default()
        })
        .collect();

    MeasuredRow::new(wrapped, style, header)
}

/// Whole lines of `style` that fit in `room` points of row height.
fn lines_in(room: f32, style: &BlockStyle) -> usize {
    let leading = style.leading();
    if leading <= 0.0 {
        return 0;
    }
    ((room - 2.0 * style.padding) / leading).floor().max(0.0) as usize
}

/// Cut rows taller than a page into pieces that fit one.
///
/// Body pieces leave room for the repeated header when it is enabled and
/// fits. Fails when a page cannot hold a single line of a cell.
fn split_tall_rows(
    rows: Vec<MeasuredRow>,
    page_height: f32,
    repeat_header: bool,
    style: &BlockStyle,
) -> Result<Vec<MeasuredRow>> {
    let header_height = rows.first().map_or(0.0, |r| r.height);
    let mut pieces = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        if row.height <= page_height {
            pieces.push(row);
            continue;
        }

        let mut room = page_height;
        if repeat_header && i > 0 && header_height < page_height {
            room -= header_height;
        }
        let mut max_lines = lines_in(room, style);
        if max_lines == 0 {
            max_lines = lines_in(page_height, style);
        }
        if max_lines == 0 {
            return Err(PagedownError::Layout(format!(
                "a {:.1}pt page cannot hold one line of table row {}",
                page_height,
                i + 1
            )));
        }

        let split = row.split(max_lines, style);
        debug!(
            "table row {} is {:.1}pt tall, split into {} pieces",
            i + 1,
            row.height,
            split.len()
        );
        pieces.extend(split);
    }

    Ok(pieces)
}

fn draw_row(
    ctx: &mut RenderContext<'_>,
    row: &MeasuredRow,
    layout: &TableLayout,
    style: &BlockStyle,
) {
    let top = ctx.layout.cursor();
    let leading = style.leading();
    let header_fill = ctx.colors.table_header;
    let border = ctx.colors.table_border;

    let mut x = 0.0;
    for (col, width) in layout.column_widths.iter().copied().enumerate() {
        let canvas = ctx.layout.canvas();
        if row.header {
            canvas.fill_rect(x, top, width, row.height, header_fill);
        }
        canvas.stroke_rect(x, top, width, row.height, style.border, border);

        if let Some(lines) = row.cells.get(col) {
            let content_width = layout.content_width(col);
            for (i, line) in lines.iter().enumerate() {
                let line_top = top + style.padding + i as f32 * leading;
                draw_line(
                    ctx,
                    line,
                    x + style.padding,
                    line_top,
                    style.size,
                    leading,
                    content_width,
                    false,
                );
            }
        }
        x += width;
    }

    ctx.layout.advance(row.height);
}

/// Render a table.
///
/// Fails without drawing anything only when the columns cannot hold any
/// text or a page cannot hold one line of a cell.
pub fn render_table(ctx: &mut RenderContext<'_>, rows: &[Vec<String>]) -> Result<()> {
    let base = ctx.config.style.table;
    let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if num_cols == 0 {
        return Ok(());
    }

    let layout = TableLayout::calculate(num_cols, ctx.layout.width(), base.padding, base.size)?;
    let style = layout.cell_style(&base);
    let measured: Vec<MeasuredRow> = rows
        .iter()
        .enumerate()
        .map(|(i, cells)| measure_row(cells, &layout, &style, i == 0))
        .collect();

    let page_height = ctx.layout.height();
    let repeat_header = ctx.config.features.repeat_table_header;
    let header = measured[0].clone();
    let pieces = split_tall_rows(measured, page_height, repeat_header, &style)?;

    ctx.layout.space_before(style.top);

    for piece in &pieces {
        let broke = ctx.layout.ensure_space(piece.height);
        if broke && repeat_header && !piece.header && header.height + piece.height <= page_height {
            draw_row(ctx, &header, &layout, &style);
        }
        draw_row(ctx, piece, &layout, &style);
    }

    ctx.layout.advance(style.bottom);
    Ok(())
}
