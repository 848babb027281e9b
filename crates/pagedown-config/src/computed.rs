//! Computed style values.
//!
//! This module contains `ComputedStyle` which holds the configured
//! hex colours resolved to the 0.0..=1.0 RGB triples PDF content streams use.

use crate::style::ColorConfig;

/// An RGB colour with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Create a new colour.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedown_config::Rgb;
    /// let c = Rgb::from_hex("#ff0000").unwrap();
    /// assert_eq!(c, Rgb::new(1.0, 0.0, 0.0));
    /// assert!(Rgb::from_hex("nope").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let (r, g, b) = hex2rgb(hex)?;
        Some(Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }
}

/// Convert a hex colour string to 8-bit RGB components.
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Pre-computed colours.
///
/// Unparseable text colours fall back to black and unparseable fill or
/// border colours fall back to white, so a bad config degrades to a
/// plain black-on-white document.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// Body and heading text
    pub text: Rgb,
    /// Fill behind code blocks and inline code
    pub code_background: Rgb,
    /// Code block outline
    pub code_border: Rgb,
    /// Table grid lines
    pub table_border: Rgb,
    /// Fill behind the table header row
    pub table_header: Rgb,
    /// Horizontal rule
    pub rule: Rgb,
    /// Fill behind notes
    pub note_background: Rgb,
    /// Left bar of notes
    pub note_border: Rgb,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

impl ComputedStyle {
    /// Resolve all colours of a ColorConfig.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedown_config::{ColorConfig, ComputedStyle, Rgb};
    ///
    /// let computed = ComputedStyle::from_config(&ColorConfig::default());
    /// assert_eq!(computed.text, Rgb::BLACK);
    /// ```
    pub fn from_config(colors: &ColorConfig) -> Self {
        let fill = |hex: &str| Rgb::from_hex(hex).unwrap_or(Rgb::WHITE);
        Self {
            text: Rgb::from_hex(&colors.text).unwrap_or(Rgb::BLACK),
            code_background: fill(&colors.code_background),
            code_border: fill(&colors.code_border),
            table_border: fill(&colors.table_border),
            table_header: fill(&colors.table_header),
            rule: fill(&colors.rule),
            note_background: fill(&colors.note_background),
            note_border: fill(&colors.note_border),
        }
    }
}
