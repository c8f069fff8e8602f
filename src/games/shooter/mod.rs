//! Top-down shooter.
//!
//! Bullets leave the player at a random angle, so hitting anything is mostly
//! luck; the real goal is to dodge falling enemies until the countdown ends.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
