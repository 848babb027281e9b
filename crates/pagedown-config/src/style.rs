//! Style configuration.
//!
//! This module contains the `StyleConfig` struct which holds one
//! [`BlockStyle`] per style slot, and `ColorConfig` with the hex colours
//! used for fills and borders.

use serde::{Deserialize, Serialize};

/// Typographic settings for one style slot.
///
/// All lengths are PDF points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BlockStyle {
    /// Font size
    pub size: f32,
    /// Space above the block
    pub top: f32,
    /// Space below the block
    pub bottom: f32,
    /// Line height as a multiple of the font size
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Inner padding (code box, note box, table cells)
    #[serde(default)]
    pub padding: f32,
    /// Left indentation of the text
    #[serde(default)]
    pub indent: f32,
    /// Border or rule width
    #[serde(default)]
    pub border: f32,
}

impl BlockStyle {
    /// Create a new block style with no padding, indent or border.
    pub fn new(size: f32, top: f32, bottom: f32, line_height: f32) -> Self {
        Self {
            size,
            top,
            bottom,
            line_height,
            padding: 0.0,
            indent: 0.0,
            border: 0.0,
        }
    }

    /// Distance between consecutive baselines.
    pub fn leading(&self) -> f32 {
        self.size * self.line_height
    }

    /// Style used for `#` lines.
    pub fn title() -> Self {
        Self::new(14.0, 25.0, 15.0, 1.3)
    }

    /// Style used for `##` lines.
    pub fn subtitle() -> Self {
        Self::new(12.0, 20.0, 10.0, 1.3)
    }

    /// Style used for `###` lines.
    pub fn heading1() -> Self {
        Self::new(11.0, 15.0, 8.0, 1.3)
    }

    /// Style used for `####` lines.
    pub fn heading2() -> Self {
        Self::new(10.5, 12.0, 6.0, 1.3)
    }

    /// Body text.
    pub fn paragraph() -> Self {
        Self::new(10.0, 0.0, 10.0, 1.6)
    }

    /// Fenced code box.
    pub fn code() -> Self {
        Self {
            padding: 12.0,
            border: 1.0,
            ..Self::new(9.0, 10.0, 10.0, 1.4)
        }
    }

    /// Bulleted list item.
    pub fn list() -> Self {
        Self {
            indent: 20.0,
            ..Self::new(10.0, 0.0, 6.0, 1.4)
        }
    }

    /// Table grid.
    pub fn table() -> Self {
        Self {
            padding: 8.0,
            border: 1.0,
            ..Self::new(9.0, 15.0, 15.0, 1.4)
        }
    }

    /// Horizontal rule.
    pub fn separator() -> Self {
        Self {
            border: 1.0,
            ..Self::new(0.0, 20.0, 20.0, 1.0)
        }
    }

    /// Callout box.
    pub fn note() -> Self {
        Self {
            padding: 12.0,
            border: 4.0,
            ..Self::new(10.0, 12.0, 12.0, 1.5)
        }
    }
}

/// Style configuration.
///
/// One slot per block kind. Headings use their own slot each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    #[serde(default = "BlockStyle::title")]
    pub title: BlockStyle,

    #[serde(default = "BlockStyle::subtitle")]
    pub subtitle: BlockStyle,

    #[serde(default = "BlockStyle::heading1")]
    pub heading1: BlockStyle,

    #[serde(default = "BlockStyle::heading2")]
    pub heading2: BlockStyle,

    #[serde(default = "BlockStyle::paragraph")]
    pub paragraph: BlockStyle,

    #[serde(default = "BlockStyle::code")]
    pub code: BlockStyle,

    #[serde(default = "BlockStyle::list")]
    pub list: BlockStyle,

    #[serde(default = "BlockStyle::table")]
    pub table: BlockStyle,

    #[serde(default = "BlockStyle::separator")]
    pub separator: BlockStyle,

    #[serde(default = "BlockStyle::note")]
    pub note: BlockStyle,

    /// Glyph drawn in front of list items.
    /// Default: "•"
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Distance of the bullet to the left of the item text.
    /// Default: 15
    #[serde(default = "default_bullet_offset")]
    pub bullet_offset: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: BlockStyle::title(),
            subtitle: BlockStyle::subtitle(),
            heading1: BlockStyle::heading1(),
            heading2: BlockStyle::heading2(),
            paragraph: BlockStyle::paragraph(),
            code: BlockStyle::code(),
            list: BlockStyle::list(),
            table: BlockStyle::table(),
            separator: BlockStyle::separator(),
            note: BlockStyle::note(),
            bullet: default_bullet(),
            bullet_offset: default_bullet_offset(),
        }
    }
}

/// Colour configuration as `#rrggbb` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColorConfig {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_code_background")]
    pub code_background: String,
    #[serde(default = "default_code_border")]
    pub code_border: String,
    #[serde(default = "default_table_border")]
    pub table_border: String,
    #[serde(default = "default_table_header")]
    pub table_header: String,
    #[serde(default = "default_rule")]
    pub rule: String,
    #[serde(default = "default_note_background")]
    pub note_background: String,
    #[serde(default = "default_note_border")]
    pub note_border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            text: default_text(),
            code_background: default_code_background(),
            code_border: default_code_border(),
            table_border: default_table_border(),
            table_header: default_table_header(),
            rule: default_rule(),
            note_background: default_note_background(),
            note_border: default_note_border(),
        }
    }
}

fn default_line_height() -> f32 {
    1.5
}

fn default_bullet() -> String {
    "•".to_string()
}

fn default_bullet_offset() -> f32 {
    15.0
}

fn default_text() -> String {
    "#000000".to_string()
}

fn default_code_background() -> String {
    "#f8f9fa".to_string()
}

fn default_code_border() -> String {
    "#e9ecef".to_string()
}

fn default_table_border() -> String {
    "#dee2e6".to_string()
}

fn default_table_header() -> String {
    "#f8f9fa".to_string()
}

fn default_rule() -> String {
    "#e9ecef".to_string()
}

fn default_note_background() -> String {
    "#e7f3ff".to_string()
}

fn default_note_border() -> String {
    "#0066cc".to_string()
}
