//! Runtime configuration. Values are layered: built-in defaults, then an
//! optional TOML file, then the `--database` flag (which clap also fills from
//! `CHINOOK_DATABASE`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::Cli;

/// Database file name used when nothing else is configured.
const DB_FILE_NAME: &str = "chinook.sqlite";
/// Config file looked up in the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the `artist` and `album` tables.
    pub database: PathBuf,
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let database = project_dirs()
            .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME));
        Self { database }
    }
}

impl Config {
    /// Resolve the configuration for this run.
    ///
    /// An explicit `--config` path must exist; the default location is only
    /// read when present.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Self::default();

        let file = match &cli.config {
            Some(path) => Some(read_file_config(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(read_file_config(&path)?),
                _ => None,
            },
        };
        if let Some(file) = file {
            config.apply_file(file);
        }

        if let Some(database) = &cli.database {
            config.database = database.clone();
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(database) = file.database {
            self.database = database;
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "chinook-menu")
}

fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}
