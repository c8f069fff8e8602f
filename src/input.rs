//! Key handling: maps terminal key events onto menu actions and game inputs.

use crate::app::App;
use crate::core::error::Result;
use crate::games::maze::{self, MazeDifficulty, MazeInput};
use crate::games::shooter::{self, ShooterInput};
use crate::games::ActiveGame;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn map_maze_key(code: KeyCode) -> MazeInput {
    match code {
        KeyCode::Up | KeyCode::Char('w') => MazeInput::Up,
        KeyCode::Down | KeyCode::Char('s') => MazeInput::Down,
        KeyCode::Left | KeyCode::Char('a') => MazeInput::Left,
        KeyCode::Right | KeyCode::Char('d') => MazeInput::Right,
        KeyCode::Char('r') | KeyCode::Char('R') => MazeInput::Reveal,
        _ => MazeInput::Other,
    }
}

pub fn map_maze_difficulty_key(code: KeyCode) -> Option<MazeDifficulty> {
    match code {
        KeyCode::Char('1') => Some(MazeDifficulty::Easy),
        KeyCode::Char('2') => Some(MazeDifficulty::Medium),
        KeyCode::Char('3') => Some(MazeDifficulty::Hard),
        _ => None,
    }
}

pub fn map_shooter_key(code: KeyCode) -> ShooterInput {
    match code {
        KeyCode::Left | KeyCode::Char('a') => ShooterInput::Left,
        KeyCode::Right | KeyCode::Char('d') => ShooterInput::Right,
        KeyCode::Char(' ') => ShooterInput::Fire,
        _ => ShooterInput::Other,
    }
}

/// Handle one key event.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<InputResult> {
    // Terminals with enhanced keyboard reporting also send releases
    if key.kind == KeyEventKind::Release {
        return Ok(InputResult::Continue);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(InputResult::Quit);
    }

    if app.active.is_none() {
        return Ok(handle_menu_key(app, key.code));
    }

    if key.code == KeyCode::Esc {
        app.back_to_menu();
        return Ok(InputResult::Continue);
    }

    match app.active.as_mut() {
        Some(ActiveGame::Maze(game)) => {
            if let Some(difficulty) = map_maze_difficulty_key(key.code) {
                maze::set_difficulty(game, difficulty, &mut app.rng)?;
            } else {
                maze::process_input(game, map_maze_key(key.code));
            }
        }
        Some(ActiveGame::Shooter(game)) => {
            shooter::process_input(game, map_shooter_key(key.code), &mut app.rng);
        }
        None => {}
    }
    Ok(InputResult::Continue)
}

fn handle_menu_key(app: &mut App, code: KeyCode) -> InputResult {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Err(e) = app.launch(app.selected_game()) {
                tracing::error!(error = %e, "failed to start game");
                app.notice = Some(e.to_string());
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}
