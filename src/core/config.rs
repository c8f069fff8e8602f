//! User configuration, read from a JSON file.
//!
//! Every field is optional in the file; anything missing takes its default.
//! The default location is `<config dir>/config.json` as reported by
//! `directories` for the `arcade` application.

use super::constants::FRAME_INTERVAL_MS;
use super::error::ConfigError;
use crate::games::maze::MazeSettings;
use crate::games::shooter::ShooterSettings;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "arcade";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "arcade.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub maze: MazeSettings,
    pub shooter: ShooterSettings,
    /// Target delay between redraws.
    pub frame_ms: u64,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            maze: MazeSettings::default(),
            shooter: ShooterSettings::default(),
            frame_ms: FRAME_INTERVAL_MS,
            log_level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

impl ArcadeConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Default log file location.
    pub fn default_log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maze.validate()?;
        self.shooter.validate()?;
        if self.frame_ms == 0 || self.frame_ms > 1000 {
            return Err(ConfigError::Invalid {
                field: "frame_ms",
                reason: "must be between 1 and 1000".to_string(),
            });
        }
        Ok(())
    }

    /// Write this configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}
