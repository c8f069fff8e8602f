//! Arcade - two terminal arcade games: a timed maze and a falling-enemy shooter.
//!
//! Game logic is UI-agnostic and driven by a virtual millisecond clock so it
//! can be tested deterministically; the `ui` and `input` modules adapt it to
//! a crossterm/ratatui terminal.

pub mod app;
pub mod build_info;
pub mod core;
pub mod games;
pub mod input;
pub mod ui;
