//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches and related settings for rendering and packaging.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Fall back to the plain renderer when layout fails.
    /// Default: true
    #[serde(default = "default_true")]
    pub fallback: bool,

    /// Justify paragraph lines.
    /// Default: true
    #[serde(default = "default_true")]
    pub justify: bool,

    /// Repeat a table's header row when it breaks across pages.
    /// Default: true
    #[serde(default = "default_true")]
    pub repeat_table_header: bool,

    /// Render batches of documents concurrently.
    /// Default: true
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Deflate level for archive entries (0-9).
    /// Default: 6
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            fallback: true,
            justify: true,
            repeat_table_header: true,
            parallel: true,
            compression_level: 6,
        }
    }
}

impl FeaturesConfig {
    /// Compression level clamped to the range deflate accepts.
    pub fn effective_compression_level(&self) -> u32 {
        self.compression_level.min(9)
    }
}

fn default_true() -> bool {
    true
}

fn default_compression_level() -> u32 {
    6
}
