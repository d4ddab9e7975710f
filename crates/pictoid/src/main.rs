//! `pictoid` - CLI for stamping ids onto a picto list
//!
//! With no arguments this annotates `src/assets/pictos_list.json` in place,
//! without consulting any config file or environment variable.
//! Every failure is reported as a single `Error: ...` line on stdout with
//! exit status 1.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use pictoid::cli::{AnnotateCommand, CheckCommand, Cli, Command, ConfigCommand};
use pictoid::{init_logging, Config, Error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // A bare run only ever touches the built-in default path.
    let config = if cli.command.is_none() && cli.config.is_none() {
        Config::default()
    } else {
        Config::load_from(cli.config.clone())?
    };

    match cli.into_command() {
        Command::Annotate(cmd) => handle_annotate(&config, cmd),
        Command::Check(cmd) => handle_check(&config, cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Resolve the input path and make sure it exists before touching it.
fn resolve_input(config: &Config, input: Option<PathBuf>) -> pictoid::Result<PathBuf> {
    let path = input.unwrap_or_else(|| config.input_path().to_path_buf());
    if !path.exists() {
        return Err(Error::input_not_found(path));
    }
    Ok(path)
}

fn handle_annotate(config: &Config, cmd: AnnotateCommand) -> anyhow::Result<()> {
    let explicit_input = cmd.input.is_some();
    let input = resolve_input(config, cmd.input)?;

    // A config-level output only applies to the configured input.
    let output = cmd.output.or_else(|| {
        if explicit_input {
            None
        } else {
            config.annotate.output_path.clone()
        }
    });

    debug!(input = %input.display(), output = ?output, "annotating");
    let count = pictoid::annotate(&input, output.as_deref())?;

    println!(
        "Successfully added IDs to {count} pictos in '{}'.",
        output.as_deref().unwrap_or(&input).display()
    );
    Ok(())
}

fn handle_check(config: &Config, cmd: CheckCommand) -> anyhow::Result<()> {
    let input = resolve_input(config, cmd.input)?;
    let count = pictoid::check(&input)?;
    println!("Found {count} pictos in '{}'.", input.display());
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                let rendered = serde_json::to_string_pretty(config)
                    .context("failed to render configuration")?;
                println!("{rendered}");
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Annotate]");
                println!("  Input path:  {}", config.input_path().display());
                println!("  Output path: {}", config.output_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
