//! Pagedown - lays out markdown as paginated PDF documents.
//!
//! This binary reads markdown from files or stdin, renders each input to a
//! PDF and writes the packaged artifact: the PDF itself for one input, a
//! ZIP archive of PDFs for several.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, STDIN_NAME};
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use pagedown_config::Config;
use pagedown_core::Result;
use pagedown_package::{pack, render_batch, Artifact, RenderRequest};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);

    if cli.init_config {
        if let Err(e) = cli::init_config() {
            error!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    info!("pagedown v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic. Returns the path of the written artifact.
fn run(cli: &Cli) -> Result<PathBuf> {
    let config = load_config(cli)?;
    debug!("Features: {:?}", config.features);

    let requests = read_requests(cli)?;
    let entries = render_batch(&requests, &config);
    let artifact = pack(
        &entries,
        &cli.name,
        config.features.effective_compression_level(),
    )?;

    write_artifact(cli, &artifact)
}

/// Load configuration and apply the command-line switches.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    apply_flags(cli, &mut config);
    Ok(config)
}

fn apply_flags(cli: &Cli, config: &mut Config) {
    if cli.no_fallback {
        config.features.fallback = false;
    }
    if cli.no_justify {
        config.features.justify = false;
    }
    if cli.sequential {
        config.features.parallel = false;
    }
}

/// Collect the inputs. An unreadable file becomes a request without
/// content, so the rest of the batch still renders.
fn read_requests(cli: &Cli) -> Result<Vec<RenderRequest>> {
    if cli.should_read_stdin() {
        let mut markdown = String::new();
        io::stdin().read_to_string(&mut markdown)?;
        return Ok(vec![RenderRequest::new(STDIN_NAME, markdown)]);
    }

    Ok(cli
        .files
        .iter()
        .map(|path| {
            let name = Cli::output_name(path);
            match fs::read_to_string(path) {
                Ok(markdown) => RenderRequest::new(name, markdown),
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    RenderRequest::missing(name)
                }
            }
        })
        .collect())
}

fn write_artifact(cli: &Cli, artifact: &Artifact) -> Result<PathBuf> {
    fs::create_dir_all(&cli.output)?;
    let path = cli.output.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes)?;
    info!(
        "Wrote {} ({} bytes, {} documents)",
        path.display(),
        artifact.bytes.len(),
        artifact.entries.len()
    );
    Ok(path)
}
