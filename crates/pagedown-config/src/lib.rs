//! Pagedown Config
//!
//! This crate handles configuration loading and management
//! for pagedown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/pagedown/config.toml`
//! - macOS: `~/Library/Application Support/pagedown/config.toml`
//! - Windows: `%APPDATA%\pagedown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use pagedown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod computed;
mod features;
mod page;
mod style;

pub use computed::{hex2rgb, ComputedStyle, Rgb};
pub use features::FeaturesConfig;
pub use page::PageConfig;
pub use style::{BlockStyle, ColorConfig, StyleConfig};

use pagedown_core::{PagedownError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[page]
Width      = 595.28
Height     = 841.89
Margin     = 40.0
FontSize   = 10.0
LineHeight = 1.5

[style]
Title        = { Size = 14.0, Top = 25.0, Bottom = 15.0, LineHeight = 1.3 }
Subtitle     = { Size = 12.0, Top = 20.0, Bottom = 10.0, LineHeight = 1.3 }
Heading1     = { Size = 11.0, Top = 15.0, Bottom = 8.0, LineHeight = 1.3 }
Heading2     = { Size = 10.5, Top = 12.0, Bottom = 6.0, LineHeight = 1.3 }
Paragraph    = { Size = 10.0, Top = 0.0, Bottom = 10.0, LineHeight = 1.6 }
Code         = { Size = 9.0, Top = 10.0, Bottom = 10.0, LineHeight = 1.4, Padding = 12.0, Border = 1.0 }
List         = { Size = 10.0, Top = 0.0, Bottom = 6.0, LineHeight = 1.4, Indent = 20.0 }
Table        = { Size = 9.0, Top = 15.0, Bottom = 15.0, LineHeight = 1.4, Padding = 8.0, Border = 1.0 }
Separator    = { Size = 0.0, Top = 20.0, Bottom = 20.0, LineHeight = 1.0, Border = 1.0 }
Note         = { Size = 10.0, Top = 12.0, Bottom = 12.0, LineHeight = 1.5, Padding = 12.0, Border = 4.0 }
Bullet       = "•"
BulletOffset = 15.0

[colors]
Text           = "#000000"
CodeBackground = "#f8f9fa"
CodeBorder     = "#e9ecef"
TableBorder    = "#dee2e6"
TableHeader    = "#f8f9fa"
Rule           = "#e9ecef"
NoteBackground = "#e7f3ff"
NoteBorder     = "#0066cc"

[features]
Fallback          = true
Justify           = true
RepeatTableHeader = true
Parallel          = true
CompressionLevel  = 6
"##;

/// Main configuration structure.
///
/// Contains all configuration sections for pagedown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page geometry
    #[serde(default)]
    pub page: PageConfig,

    /// Per-block typography
    #[serde(default)]
    pub style: StyleConfig,

    /// Fill, border and text colours
    #[serde(default)]
    pub colors: ColorConfig,

    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[page]"));
    /// assert!(toml.contains("[style]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pagedown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pagedown")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| PagedownError::Config("Could not determine config directory".into()))?;

        Self::ensure_config_file_in(&config_dir)
    }

    /// Ensures `dir/config.toml` exists. An existing file is left as is.
    pub fn ensure_config_file_in(dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join("config.toml");

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Contents of the platform config file, or the defaults without one.
    fn base_toml() -> Result<String> {
        match Self::config_path() {
            Some(path) if path.exists() => Ok(std::fs::read_to_string(path)?),
            _ => Ok(DEFAULT_TOML.to_string()),
        }
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        Self::from_layers(&Self::base_toml()?, "")
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PagedownError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, layer its contents on top
    ///    - Otherwise, treat it as a TOML string and layer that
    ///
    /// Only the keys the override sets change; see [`Config::from_layers`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pagedown_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nJustify = false")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let base = Self::base_toml()?;

        let overlay = match override_config {
            Some(override_str) => {
                let override_path = Path::new(override_str);
                if override_path.exists() {
                    std::fs::read_to_string(override_path)?
                } else {
                    override_str.to_string()
                }
            }
            None => String::new(),
        };

        Self::from_layers(&base, &overlay)
    }

    /// Build a config from a base TOML document with `overlay` on top.
    ///
    /// Tables merge key by key, so an overlay that only sets
    /// `[features] Justify` keeps every page, style and colour value of
    /// the base.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedown_config::Config;
    ///
    /// let config = Config::from_layers(
    ///     "[page]\nMargin = 72.0",
    ///     "[features]\nJustify = false",
    /// ).unwrap();
    /// assert_eq!(config.page.margin, 72.0);
    /// assert!(!config.features.justify);
    /// ```
    pub fn from_layers(base: &str, overlay: &str) -> Result<Self> {
        let mut table = parse_table(base, "Parse error")?;
        merge_tables(&mut table, parse_table(overlay, "Override parse error")?);

        toml::Value::Table(table)
            .try_into::<Self>()
            .map_err(|e| PagedownError::Config(format!("Invalid config: {}", e)))
    }

    /// Resolve the configured colours.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedown_config::{Config, Rgb};
    /// let computed = Config::default().computed_style();
    /// assert_eq!(computed.text, Rgb::BLACK);
    /// ```
    pub fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::from_config(&self.colors)
    }
}

fn parse_table(content: &str, context: &str) -> Result<toml::Table> {
    toml::from_str(content).map_err(|e| PagedownError::Config(format!("{}: {}", context, e)))
}

/// Layer `overlay` onto `base`.
///
/// Nested tables merge recursively; any other value replaces the one in
/// `base`.
pub fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
