//! Core types for pagedown

use crate::enums::{BlockKind, RunStyle};

/// One structural unit of a parsed document.
///
/// Text-bearing variants hold raw inline markup; the renderer runs the
/// inline formatter over them. `Code` holds verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    Heading1(String),
    Heading2(String),
    Paragraph(String),
    Code(String),
    /// Items in source order, continuation lines already merged
    List(Vec<String>),
    /// Rows of cells; header-separator rows are never stored
    Table(Vec<Vec<String>>),
    Separator,
    Note(String),
}

impl Block {
    /// The kind tag of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Title(_) => BlockKind::Title,
            Block::Subtitle(_) => BlockKind::Subtitle,
            Block::Heading1(_) => BlockKind::Heading1,
            Block::Heading2(_) => BlockKind::Heading2,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Code(_) => BlockKind::Code,
            Block::List(_) => BlockKind::List,
            Block::Table(_) => BlockKind::Table,
            Block::Separator => BlockKind::Separator,
            Block::Note(_) => BlockKind::Note,
        }
    }

    /// The single text payload, if this kind carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Title(s)
            | Block::Subtitle(s)
            | Block::Heading1(s)
            | Block::Heading2(s)
            | Block::Paragraph(s)
            | Block::Code(s)
            | Block::Note(s) => Some(s),
            _ => None,
        }
    }

    /// List items, for `List` blocks.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Block::List(items) => Some(items),
            _ => None,
        }
    }

    /// Table rows, for `Table` blocks.
    pub fn rows(&self) -> Option<&[Vec<String>]> {
        match self {
            Block::Table(rows) => Some(rows),
            _ => None,
        }
    }
}

/// A contiguous span of text sharing one inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Literal characters to render
    pub text: String,
    /// Inline style
    pub style: RunStyle,
}

impl StyledRun {
    /// Create a new run.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }
}
