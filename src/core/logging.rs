//! Log setup.
//!
//! The terminal belongs to the game, so logs go to a file. `RUST_LOG` takes
//! precedence over the configured level.

use super::error::ArcadeError;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn open_log_file(path: &Path) -> Result<File, ArcadeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
pub fn init(path: &Path, default_level: &str) -> Result<(), ArcadeError> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ArcadeError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage
        let _ = env_filter("not a [valid filter");
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = std::env::temp_dir().join(format!("arcade-log-test-{}", std::process::id()));
        let path = dir.join("nested").join("arcade.log");
        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
