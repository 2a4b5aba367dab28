//! Ini configuration file.
//!
//! Default location: `~/.lazybake/config.ini`.
//!
//! ```ini
//! [cache]
//! builtin_namespace = minecraft
//! missing_model = minecraft:builtin/missing
//! bake_skipped = custommachinery:block/custom_machine_block, mymod:block/broken
//!
//! [logging]
//! level = info
//! file = /tmp/lazybake.log
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::{CacheConfig, DEFAULT_BAKE_SKIPPED, DEFAULT_BUILTIN_NAMESPACE, MISSING_MODEL_PATH};
use crate::model::ModelId;

const CACHE_SECTION: &str = "cache";
const LOGGING_SECTION: &str = "logging";

/// Default log level when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid ini.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A key holds a value that cannot be used.
    #[error("Invalid value for {section}.{key}: {message}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        message: String,
    },
}

/// Logging settings from the `[logging]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default filter directive (overridden by `RUST_LOG`).
    pub level: String,

    /// Optional log file; logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

/// Parsed configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ConfigFile {
    pub cache: CacheConfig,
    pub logging: LoggingSettings,
}

/// Path of the default configuration file.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lazybake").join("config.ini"))
}

impl ConfigFile {
    /// Load the default configuration file.
    ///
    /// A missing file (or missing home directory) yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse(parse.to_string()),
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some(CACHE_SECTION)) {
            if let Some(namespace) = section.get("builtin_namespace") {
                let namespace = namespace.trim();
                if namespace.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        section: CACHE_SECTION,
                        key: "builtin_namespace",
                        message: "must not be empty".to_string(),
                    });
                }
                config.cache.builtin_namespace = namespace.to_string();
            }

            if let Some(missing) = section.get("missing_model") {
                config.cache.missing_model =
                    missing
                        .trim()
                        .parse()
                        .map_err(|e: crate::model::ModelIdError| ConfigError::InvalidValue {
                            section: CACHE_SECTION,
                            key: "missing_model",
                            message: e.to_string(),
                        })?;
            }

            if let Some(skipped) = section.get("bake_skipped") {
                config.cache.bake_skipped = parse_id_list(skipped)?.into_iter().collect();
            }
        }

        if let Some(section) = ini.section(Some(LOGGING_SECTION)) {
            if let Some(level) = section.get("level") {
                config.logging.level = level.trim().to_string();
            }
            if let Some(file) = section.get("file") {
                let file = file.trim();
                config.logging.file = (!file.is_empty()).then(|| PathBuf::from(file));
            }
        }

        Ok(config)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut skipped: Vec<String> = self
            .cache
            .bake_skipped
            .iter()
            .map(ModelId::to_string)
            .collect();
        skipped.sort();

        let mut ini = Ini::new();
        ini.with_section(Some(CACHE_SECTION))
            .set("builtin_namespace", self.cache.builtin_namespace.as_str())
            .set("missing_model", self.cache.missing_model.to_string())
            .set("bake_skipped", skipped.join(", "));

        let mut logging = ini.with_section(Some(LOGGING_SECTION));
        logging.set("level", self.logging.level.as_str());
        if let Some(file) = &self.logging.file {
            logging.set("file", file.display().to_string());
        }

        ini.write_to_file(path)?;
        Ok(())
    }

    /// Render the effective settings as `section.key = value` lines.
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut skipped: Vec<String> = self
            .cache
            .bake_skipped
            .iter()
            .map(ModelId::to_string)
            .collect();
        skipped.sort();

        vec![
            (
                format!("{}.builtin_namespace", CACHE_SECTION),
                self.cache.builtin_namespace.clone(),
            ),
            (
                format!("{}.missing_model", CACHE_SECTION),
                self.cache.missing_model.to_string(),
            ),
            (format!("{}.bake_skipped", CACHE_SECTION), skipped.join(", ")),
            (format!("{}.level", LOGGING_SECTION), self.logging.level.clone()),
            (
                format!("{}.file", LOGGING_SECTION),
                self.logging
                    .file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}

fn parse_id_list(value: &str) -> Result<Vec<ModelId>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|e: crate::model::ModelIdError| ConfigError::InvalidValue {
                section: CACHE_SECTION,
                key: "bake_skipped",
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            "[cache]\n\
             builtin_namespace = engine\n\
             missing_model = engine:builtin/missing\n\
             bake_skipped = mymod:block/a, mymod:block/b\n\
             [logging]\n\
             level = debug\n\
             file = /tmp/lazybake.log\n",
        );

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.cache.builtin_namespace, "engine");
        assert_eq!(config.cache.missing_model.to_string(), "engine:builtin/missing");
        assert_eq!(config.cache.bake_skipped.len(), 2);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/lazybake.log")));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let file = write_config("[logging]\nlevel = warn\n");

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.cache.builtin_namespace, DEFAULT_BUILTIN_NAMESPACE);
        assert!(config.cache.missing_model.path() == MISSING_MODEL_PATH);
        assert_eq!(config.cache.bake_skipped.len(), DEFAULT_BAKE_SKIPPED.len());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_skip_list_clears_defaults() {
        let file = write_config("[cache]\nbake_skipped =\n");

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert!(config.cache.bake_skipped.is_empty());
    }

    #[test]
    fn test_invalid_identifier_is_rejected() {
        let file = write_config("[cache]\nmissing_model = Not:Valid\n");

        let err = ConfigFile::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "missing_model",
                ..
            }
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.cache.builtin_namespace = "engine".to_string();
        config.logging.file = Some(PathBuf::from("/var/log/lazybake.log"));
        config.save_to(&path).unwrap();

        let reloaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_describe_lists_every_key() {
        let described = ConfigFile::default().describe();
        let keys: Vec<&str> = described.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "cache.builtin_namespace",
                "cache.missing_model",
                "cache.bake_skipped",
                "logging.level",
                "logging.file",
            ]
        );
    }
}
