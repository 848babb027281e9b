//! Font selection and glyph metrics.
//!
//! Documents use the standard PDF base-14 fonts, so no font program is
//! embedded. Text is encoded as WinAnsi and measured with the Adobe font
//! metrics for those fonts, in 1/1000 em units.

use pagedown_core::RunStyle;

/// A base-14 font used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
    Mono,
}

impl Font {
    /// Every font, in resource order.
    pub const ALL: [Font; 5] = [
        Font::Regular,
        Font::Bold,
        Font::Oblique,
        Font::BoldOblique,
        Font::Mono,
    ];

    /// PostScript name of the base font.
    pub fn base_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"Helvetica",
            Font::Bold => b"Helvetica-Bold",
            Font::Oblique => b"Helvetica-Oblique",
            Font::BoldOblique => b"Helvetica-BoldOblique",
            Font::Mono => b"Courier",
        }
    }

    /// Name of the font in a page's resource dictionary.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
            Font::Oblique => b"F3",
            Font::BoldOblique => b"F4",
            Font::Mono => b"F5",
        }
    }

    /// Font for an inline run inside text that is bold or not.
    pub fn for_run(style: RunStyle, bold_context: bool) -> Font {
        match style {
            RunStyle::Plain if bold_context => Font::Bold,
            RunStyle::Plain => Font::Regular,
            RunStyle::Bold | RunStyle::LinkLabel => Font::Bold,
            RunStyle::Italic if bold_context => Font::BoldOblique,
            RunStyle::Italic => Font::Oblique,
            RunStyle::Code => Font::Mono,
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, Font::Bold | Font::BoldOblique)
    }

    /// Advance width of one encoded byte, in 1/1000 em.
    pub fn glyph_width(self, byte: u8) -> u16 {
        if self == Font::Mono {
            return 600;
        }
        match byte {
            32..=126 => {
                let table = if self.is_bold() {
                    &HELVETICA_BOLD
                } else {
                    &HELVETICA
                };
                table[usize::from(byte - 32)]
            }
            0x95 => 350,
            0x85 | 0x89 | 0x97 | 0x99 => 1000,
            0x82 | 0x91 | 0x92 => {
                if self.is_bold() {
                    278
                } else {
                    222
                }
            }
            0x84 | 0x93 | 0x94 => {
                if self.is_bold() {
                    500
                } else {
                    333
                }
            }
            0xA0 => 278,
            _ => 556,
        }
    }

    /// Width of `text` at `size` points.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|b| u32::from(self.glyph_width(b)))
            .sum();
        units as f32 * size / 1000.0
    }

    /// Width of a single character at `size` points.
    pub fn char_width(self, ch: char, size: f32) -> f32 {
        f32::from(self.glyph_width(win_ansi_byte(ch))) * size / 1000.0
    }
}

/// Helvetica and Helvetica-Oblique widths for bytes 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold and Helvetica-BoldOblique widths for bytes 32..=126.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Map a character to its WinAnsi byte.
///
/// Tabs become spaces. Anything the encoding cannot express becomes `?`.
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\t' => b' ',
        ' '..='~' => ch as u8,
        '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Encode text as WinAnsi bytes, one byte per character.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}
