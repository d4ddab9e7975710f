//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Annotate command arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct AnnotateCommand {
    /// Picto list to annotate [default: src/assets/pictos_list.json]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of overwriting the input
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckCommand {
    /// Picto list to validate [default: src/assets/pictos_list.json]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
