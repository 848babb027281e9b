//! Page geometry configuration.

use serde::{Deserialize, Serialize};

/// Page size and margins, in PDF points.
///
/// The defaults describe an A4 sheet with 40pt margins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfig {
    /// Page width.
    /// Default: 595.28 (A4)
    #[serde(default = "default_width")]
    pub width: f32,

    /// Page height.
    /// Default: 841.89 (A4)
    #[serde(default = "default_height")]
    pub height: f32,

    /// Margin on all four sides.
    /// Default: 40
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Base font size, used by the plain fallback renderer.
    /// Default: 10
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Base line height multiple.
    /// Default: 1.5
    #[serde(default = "default_line_height")]
    pub line_height: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            font_size: default_font_size(),
            line_height: default_line_height(),
        }
    }
}

impl PageConfig {
    /// Width available for content between the side margins.
    pub fn printable_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    /// Height available for content between the top and bottom margins.
    pub fn printable_height(&self) -> f32 {
        (self.height - 2.0 * self.margin).max(0.0)
    }
}

fn default_width() -> f32 {
    595.28
}

fn default_height() -> f32 {
    841.89
}

fn default_margin() -> f32 {
    40.0
}

fn default_font_size() -> f32 {
    10.0
}

fn default_line_height() -> f32 {
    1.5
}
