//! Maze game.
//!
//! The player walks a randomly walled grid looking for an exit that stays
//! hidden until the last few seconds of a 30 second countdown, or until a
//! short manual reveal. Wins build a streak; a timeout breaks it.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::{
    generate_grid, generate_round, generate_round_with, place_exit, reachable, GeneratedMaze,
};
pub use logic::*;
pub use types::*;
