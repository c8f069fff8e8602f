//! Shared building blocks for both games: timing, geometry, configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod scheduler;

pub use config::ArcadeConfig;
pub use constants::*;
pub use error::ArcadeError;
pub use geometry::Aabb;
pub use scheduler::Scheduler;
