//! Command-line interface for pagedown.

use clap::Parser;
use std::path::PathBuf;

/// Name given to markdown read from stdin.
pub const STDIN_NAME: &str = "document.md";

/// Pagedown - lays out markdown as paginated PDF documents.
///
/// One input produces one PDF. Several inputs produce a ZIP archive holding
/// one PDF per input.
#[derive(Parser, Debug)]
#[command(
    name = "pagedown",
    author = "Pagedown Contributors",
    version,
    about = "Lays out markdown as paginated PDF documents",
    after_help = "Examples:\n  \
                  cat notes.md | pagedown\n  \
                  pagedown docs/intro.md -o out\n  \
                  pagedown src/*.md -n myrepo-main -c style.toml"
)]
pub struct Cli {
    /// Markdown files to render (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory the artifact is written to
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Archive identifier, usually "<repository>-<branch>"
    #[arg(short = 'n', long = "name", default_value = "pagedown")]
    pub name: String,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable the plain fallback renderer
    #[arg(long = "no-fallback")]
    pub no_fallback: bool,

    /// Leave paragraphs ragged-right
    #[arg(long = "no-justify")]
    pub no_justify: bool,

    /// Render documents one after another
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if there is none, then exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Output name for an input file: its path with `/` separators.
    pub fn output_name(path: &std::path::Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}

/// Show paths information.
pub fn show_paths() {
    use pagedown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

/// Create the platform config file with the defaults unless it exists.
pub fn init_config() -> pagedown_core::Result<PathBuf> {
    let path = pagedown_config::Config::ensure_config_file()?;
    println!("config                  {}", path.display());
    Ok(path)
}
