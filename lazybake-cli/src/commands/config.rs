//! Configuration CLI commands.

use std::path::Path;

use clap::Subcommand;
use lazybake::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective settings
    Show,
}

/// Run a config subcommand.
pub fn run(
    command: ConfigCommands,
    explicit_path: Option<&Path>,
    config: &ConfigFile,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            match explicit_path.map(Path::to_path_buf).or_else(config_file_path) {
                Some(path) => println!("{}", path.display()),
                None => println!("(no home directory)"),
            }
            Ok(())
        }
        ConfigCommands::Show => {
            for (key, value) in config.describe() {
                if value.is_empty() {
                    println!("{} = (not set)", key);
                } else {
                    println!("{} = {}", key, value);
                }
            }
            Ok(())
        }
    }
}
