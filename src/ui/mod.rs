//! Terminal rendering. Every frame is redrawn from the current state.

pub mod game_common;
pub mod maze_scene;
pub mod menu_scene;
pub mod shooter_scene;

use crate::app::App;
use crate::games::ActiveGame;
use ratatui::Frame;

/// Draw the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match &app.active {
        None => menu_scene::render_menu(frame, area, app),
        Some(ActiveGame::Maze(game)) => maze_scene::render_maze(frame, area, game),
        Some(ActiveGame::Shooter(game)) => shooter_scene::render_shooter(frame, area, game),
    }
}
