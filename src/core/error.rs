//! Error types.
//!
//! Logical edge cases of play (blocked moves, a reveal that is already active,
//! an unreachable exit) are reported through outcome values, not errors. The
//! types here cover what can genuinely fail: configuration and grid setup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a maze round.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions {rows}x{cols} are invalid (need 1..={max} on each side and at least 2 cells)")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    #[error("no open cell other than the start is available for the exit")]
    NoExitCandidate,
}

/// Failures while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level error for the arcade library.
#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T, E = ArcadeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_error_messages() {
        let err = MazeError::InvalidDimensions {
            rows: 0,
            cols: 10,
            max: 64,
        };
        assert!(err.to_string().contains("0x10"));
        assert!(MazeError::NoExitCandidate.to_string().contains("exit"));
    }

    #[test]
    fn test_arcade_error_from_maze_error() {
        let err: ArcadeError = MazeError::NoExitCandidate.into();
        assert!(matches!(err, ArcadeError::Maze(MazeError::NoExitCandidate)));
        assert_eq!(err.to_string(), MazeError::NoExitCandidate.to_string());
    }

    #[test]
    fn test_config_invalid_message_names_field() {
        let err = ConfigError::Invalid {
            field: "maze.rows",
            reason: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("maze.rows"));
    }
}
