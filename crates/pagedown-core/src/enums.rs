//! Core enums for the pagedown document model.
//!
//! These enums name the kinds of block a parsed document can contain and
//! the inline styles a run of text can carry.

/// The kind of a block-level node.
///
/// Every [`Block`](crate::Block) maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `# ` line
    Title,
    /// `## ` line
    Subtitle,
    /// `### ` line
    Heading1,
    /// `#### ` line
    Heading2,
    /// Any other non-blank line
    Paragraph,
    /// Fenced code block
    Code,
    /// Consecutive `- ` / `* ` items
    List,
    /// Pipe-delimited rows
    Table,
    /// `---` rule
    Separator,
    /// `> ` callout
    Note,
}

impl BlockKind {
    /// Whether this kind is one of the four heading levels.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            BlockKind::Title | BlockKind::Subtitle | BlockKind::Heading1 | BlockKind::Heading2
        )
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Title => write!(f, "title"),
            BlockKind::Subtitle => write!(f, "subtitle"),
            BlockKind::Heading1 => write!(f, "heading1"),
            BlockKind::Heading2 => write!(f, "heading2"),
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Code => write!(f, "code"),
            BlockKind::List => write!(f, "list"),
            BlockKind::Table => write!(f, "table"),
            BlockKind::Separator => write!(f, "separator"),
            BlockKind::Note => write!(f, "note"),
        }
    }
}

/// Inline style of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStyle {
    /// Unformatted text
    Plain,
    /// `**text**`
    Bold,
    /// `_text_`
    Italic,
    /// `` `text` ``
    Code,
    /// `[label](url)`, rendered bold; the target is dropped
    LinkLabel,
}

impl std::fmt::Display for RunStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStyle::Plain => write!(f, "plain"),
            RunStyle::Bold => write!(f, "bold"),
            RunStyle::Italic => write!(f, "italic"),
            RunStyle::Code => write!(f, "code"),
            RunStyle::LinkLabel => write!(f, "link-label"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_display() {
        assert_eq!(BlockKind::Title.to_string(), "title");
        assert_eq!(BlockKind::Subtitle.to_string(), "subtitle");
        assert_eq!(BlockKind::Heading1.to_string(), "heading1");
        assert_eq!(BlockKind::Heading2.to_string(), "heading2");
        assert_eq!(BlockKind::Paragraph.to_string(), "paragraph");
        assert_eq!(BlockKind::Code.to_string(), "code");
        assert_eq!(BlockKind::List.to_string(), "list");
        assert_eq!(BlockKind::Table.to_string(), "table");
        assert_eq!(BlockKind::Separator.to_string(), "separator");
        assert_eq!(BlockKind::Note.to_string(), "note");
    }

    #[test]
    fn test_run_style_display() {
        assert_eq!(RunStyle::Plain.to_string(), "plain");
        assert_eq!(RunStyle::Bold.to_string(), "bold");
        assert_eq!(RunStyle::Italic.to_string(), "italic");
        assert_eq!(RunStyle::Code.to_string(), "code");
        assert_eq!(RunStyle::LinkLabel.to_string(), "link-label");
    }

    #[test]
    fn test_is_heading() {
        assert!(BlockKind::Title.is_heading());
        assert!(BlockKind::Heading2.is_heading());
        assert!(!BlockKind::Paragraph.is_heading());
        assert!(!BlockKind::Note.is_heading());
    }
}
