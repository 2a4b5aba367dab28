//! CLI error types.

use std::fmt;

use lazybake::config::ConfigError;
use lazybake::model::ModelIdError;
use lazybake::snapshot::SnapshotError;

/// Errors reported by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded.
    Config(ConfigError),
    /// Snapshot could not be loaded.
    Snapshot(SnapshotError),
    /// A command-line identifier is malformed.
    InvalidId { value: String, source: ModelIdError },
    /// Logging could not be initialized.
    Logging(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Snapshot(e) => write!(f, "Snapshot error: {}", e),
            CliError::InvalidId { value, source } => {
                write!(f, "Invalid model identifier '{}': {}", value, source)
            }
            CliError::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Snapshot(e) => Some(e),
            CliError::InvalidId { source, .. } => Some(source),
            CliError::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<SnapshotError> for CliError {
    fn from(e: SnapshotError) -> Self {
        CliError::Snapshot(e)
    }
}
