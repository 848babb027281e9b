//! Pagedown Package
//!
//! Turns a batch of rendered documents into one downloadable artifact. A
//! single document is handed back as its PDF; several are bundled into a
//! ZIP archive with one PDF entry each.
//!
//! # Example
//!
//! ```
//! use pagedown_config::Config;
//! use pagedown_package::{render_and_pack, ArtifactKind, RenderRequest};
//!
//! let requests = vec![
//!     RenderRequest::new("README.md", "# Readme"),
//!     RenderRequest::new("src/lib.rs", "Some text."),
//! ];
//! let artifact = render_and_pack(&requests, "demo-main", &Config::default()).unwrap();
//! assert_eq!(artifact.kind, ArtifactKind::Archive);
//! assert_eq!(artifact.file_name, "demo-main-documentation.zip");
//! ```

mod archive;
mod batch;
pub mod naming;

pub use archive::pack;
pub use batch::render_batch;
pub use naming::{
    archive_file_name, archive_identifier, entry_name, single_file_name, ARCHIVE_SUFFIX,
    PDF_EXTENSION,
};

use pagedown_config::Config;
use pagedown_core::Result;

/// One document to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Repository path of the source file
    pub output_name: String,
    /// Markdown to render; `None` when generation produced nothing
    pub markdown: Option<String>,
}

impl RenderRequest {
    /// A request with markdown content.
    pub fn new(output_name: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            markdown: Some(markdown.into()),
        }
    }

    /// A request whose content is missing.
    pub fn missing(output_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            markdown: None,
        }
    }
}

/// A rendered document waiting to be packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    /// Repository path of the source file
    pub output_name: String,
    /// PDF bytes, or `None` when there was nothing to render
    pub document: Option<Vec<u8>>,
}

/// Shape of the final artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// One PDF, passed through as is
    Single,
    /// A ZIP archive of PDFs
    Archive,
}

/// The downloadable result of a batch.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Suggested download name
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
    /// Single PDF or archive
    pub kind: ArtifactKind,
    /// Names of the documents inside, in order
    pub entries: Vec<String>,
}

/// Render every request and pack the results.
pub fn render_and_pack(
    requests: &[RenderRequest],
    identifier: &str,
    config: &Config,
) -> Result<Artifact> {
    let entries = render_batch(requests, config);
    pack(
        &entries,
        identifier,
        config.features.effective_compression_level(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedown_core::PagedownError;

    #[test]
    fn test_single_request_is_pdf() {
        let requests = [RenderRequest::new("docs/guide.md", "# Guide\n\nBody.")];
        let artifact = render_and_pack(&requests, "repo-main", &Config::default()).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Single);
        assert_eq!(artifact.file_name, "guide_md.pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_missing_single_request_fails() {
        let requests = [RenderRequest::missing("a.md")];
        let err = render_and_pack(&requests, "x", &Config::default()).unwrap_err();
        assert!(matches!(err, PagedownError::Package(_)));
    }

    #[test]
    fn test_archive_with_missing_entry() {
        let requests = [
            RenderRequest::new("a.md", "one"),
            RenderRequest::missing("b.md"),
            RenderRequest::new("c/d.md", "two"),
        ];
        let artifact = render_and_pack(&requests, "x-dev", &Config::default()).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Archive);
        assert_eq!(artifact.entries, vec!["a_md.pdf", "c_d_md.pdf"]);
    }
}
