//! Command-line interface for dsforge.
//!
//! Every command opens a design document (a JSON file), runs against it, and
//! saves it back. The document is chosen by `--document`, then the `document`
//! key of the config file, then `design-document.json` in the current
//! directory.
//!
//! # Commands
//!
//! - `design-system` - create the default spacing, color, and typography set
//! - `spacing` - create a modular spacing scale
//! - `color` - create a color token
//! - `typography` - create a typography scale
//! - `preset` - apply a typography preset
//! - `text-style` - create or update one text style
//! - `query` - show what the document contains
//! - `serve` - handle JSON host messages from stdin
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging
//! - `--quiet` / `-q`: errors only
//! - `--config` / `-c`: configuration file
//! - `--document` / `-d`: document file

mod color;
pub mod common;
mod design_system;
mod query;
mod serve;
mod spacing;
mod typography;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use common::CommandExecutor;

/// Runtime settings derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter; `None` defers to `RUST_LOG`, then `info`
    pub log_level: Option<String>,
    /// Configuration file override
    pub config_path: Option<PathBuf>,
    /// Document file override
    pub document_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Only the first call in a process has an effect.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dsforge",
    about = "Generate design-system variables and text styles",
    version,
    long_about = "dsforge builds spacing scales, color tokens, and typography scales inside a design document, reusing collections and styles that already exist."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the design document
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the default design system
    DesignSystem(design_system::DesignSystemCommand),

    /// Create a spacing scale
    Spacing(spacing::SpacingCommand),

    /// Create a color token
    Color(color::ColorCommand),

    /// Create a typography scale
    Typography(typography::TypographyCommand),

    /// Apply a typography preset
    Preset(typography::PresetCommand),

    /// Create or update a text style
    TextStyle(typography::TextStyleCommand),

    /// Show the document's collections, variables, and text styles
    Query(query::QueryCommand),

    /// Handle newline-delimited JSON messages from stdin
    Serve(serve::ServeCommand),
}

impl Cli {
    /// Build the config from flags and run the command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            document_path: self.document.clone(),
        }
    }

    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::DesignSystem(cmd) => cmd.execute(&config).await,
            Commands::Spacing(cmd) => cmd.execute(&config).await,
            Commands::Color(cmd) => cmd.execute(&config).await,
            Commands::Typography(cmd) => cmd.execute(&config).await,
            Commands::Preset(cmd) => cmd.execute(&config).await,
            Commands::TextStyle(cmd) => cmd.execute(&config).await,
            Commands::Query(cmd) => cmd.execute(&config).await,
            Commands::Serve(cmd) => cmd.execute(&config).await,
        }
    }
}
