//! lazybake CLI - Command-line interface
//!
//! Diagnostic front-end for the lazybake model registry cache. Loads a JSON
//! registry snapshot, starts a reload cycle over it and reports how models
//! resolve.

mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lazybake::config::ConfigFile;

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "lazybake", version = lazybake::VERSION)]
#[command(about = "Inspect on-demand model baking over a registry snapshot")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ~/.lazybake/config.ini)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the models visible to a namespace
    Inspect {
        /// Registry snapshot (JSON)
        snapshot: PathBuf,

        /// Namespace whose view to list
        #[arg(short, long)]
        namespace: String,
    },

    /// Resolve model identifiers through the adaptive cache
    Resolve {
        /// Registry snapshot (JSON)
        snapshot: PathBuf,

        /// Identifiers to resolve (e.g. moda:lamp#lit=true)
        #[arg(required = true)]
        ids: Vec<String>,

        /// Resolve every top-level model first
        #[arg(long)]
        prewarm: bool,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn load_config(path: Option<&PathBuf>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;
    let _guard = logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Inspect {
            snapshot,
            namespace,
        } => commands::inspect::run(&snapshot, &namespace, &config),
        Commands::Resolve {
            snapshot,
            ids,
            prewarm,
        } => commands::resolve::run(&snapshot, &ids, prewarm, &config),
        Commands::Config(command) => commands::config::run(command, cli.config.as_deref(), &config),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "lazybake",
            "resolve",
            "snapshot.json",
            "moda:gear#inventory",
            "moda:lamp#lit=true",
            "--prewarm",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve { ids, prewarm, .. } => {
                assert_eq!(ids.len(), 2);
                assert!(prewarm);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_requires_identifiers() {
        assert!(Cli::try_parse_from(["lazybake", "resolve", "snapshot.json"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ini");
        assert!(matches!(load_config(Some(&path)), Err(CliError::Config(_))));
    }
}
