//! Database location resolution.
//!
//! Priority: `--db` flag > config file > `movies.sqlite` in the current
//! directory.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Database file used when neither the flag nor the config file sets one.
pub(crate) const DEFAULT_DB_FILE: &str = "movies.sqlite";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseConfig {
    path: Option<PathBuf>,
}

/// Where the resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    Flag,
    ConfigFile,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag => write!(f, "--db flag"),
            ConfigSource::ConfigFile => write!(f, "config file"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub database: PathBuf,
    pub source: ConfigSource,
}

impl Config {
    /// Resolve against the user's config file.
    pub(crate) fn resolve(flag: Option<PathBuf>) -> Self {
        Self::resolve_with(flag, config_path().as_deref())
    }

    pub(crate) fn resolve_with(flag: Option<PathBuf>, config_file: Option<&Path>) -> Self {
        if let Some(database) = flag {
            return Self {
                database,
                source: ConfigSource::Flag,
            };
        }

        let from_file = config_file
            .and_then(load_config_file)
            .and_then(|c| c.database)
            .and_then(|d| d.path);

        match from_file {
            Some(database) => Self {
                database,
                source: ConfigSource::ConfigFile,
            },
            None => Self {
                database: PathBuf::from(DEFAULT_DB_FILE),
                source: ConfigSource::Default,
            },
        }
    }
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("movie-list").join("config.toml"))
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}
