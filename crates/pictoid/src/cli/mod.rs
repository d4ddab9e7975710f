//! Command-line interface for pictoid.
//!
//! Running `pictoid` with no arguments annotates the default picto list in
//! place, same as `pictoid annotate`.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AnnotateCommand, CheckCommand, ConfigCommand};

use crate::logging::Verbosity;

/// pictoid - Give every picto a sequential id
///
/// Reads a JSON list of objects, sets `id` on each one to its 1-based
/// position, and writes the list back out.
#[derive(Debug, Parser)]
#[command(name = "pictoid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `annotate`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stamp sequential ids onto the picto list
    Annotate(AnnotateCommand),

    /// Validate the picto list without writing
    Check(CheckCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// The command to run, with a bare invocation meaning `annotate`.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Annotate(AnnotateCommand::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "pictoid");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_bare_invocation_is_annotate() {
        let cli = Cli::try_parse_from(["pictoid"]).unwrap();
        assert!(cli.command.is_none());
        match cli.into_command() {
            Command::Annotate(cmd) => {
                assert!(cmd.input.is_none());
                assert!(cmd.output.is_none());
            }
            other => panic!("expected annotate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_annotate_with_paths() {
        let cli =
            Cli::try_parse_from(["pictoid", "annotate", "-i", "in.json", "-o", "out.json"])
                .unwrap();
        match cli.into_command() {
            Command::Annotate(cmd) => {
                assert_eq!(cmd.input, Some(PathBuf::from("in.json")));
                assert_eq!(cmd.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("expected annotate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["pictoid", "check"]).unwrap();
        assert!(matches!(cli.into_command(), Command::Check(_)));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["pictoid", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.into_command(),
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["pictoid", "-c", "/custom/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pictoid", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);
    }
}
