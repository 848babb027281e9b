//! Error types for pagedown

use thiserror::Error;

/// Main error type for pagedown operations
#[derive(Error, Debug)]
pub enum PagedownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error during document generation
    #[error("Render error: {0}")]
    Render(String),

    /// A block could not be laid out on the page
    #[error("Layout error: {0}")]
    Layout(String),

    /// Packaging error while building the final artifact
    #[error("Package error: {0}")]
    Package(String),
}

/// Result type alias for pagedown operations
pub type Result<T> = std::result::Result<T, PagedownError>;
