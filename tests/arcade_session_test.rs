//! Integration test: a whole session driven the way the terminal loop does it.
//!
//! Config comes from JSON, key events go through `handle_key` and time passes
//! in frame-sized slices through `App::tick`.

use arcade::app::App;
use arcade::core::constants::FRAME_INTERVAL_MS;
use arcade::core::ArcadeConfig;
use arcade::games::maze::{MazeDifficulty, MazePhase};
use arcade::games::{ActiveGame, GameKind};
use arcade::input::{handle_key, InputResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) -> InputResult {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn run_for(app: &mut App, ms: u64) {
    let mut elapsed = 0;
    while elapsed < ms {
        let dt = FRAME_INTERVAL_MS.min(ms - elapsed);
        app.tick(dt).unwrap();
        elapsed += dt;
    }
}

#[test]
fn test_idle_maze_times_out_and_reloads() {
    let config = ArcadeConfig::from_json(r#"{"maze": {"difficulty": "hard"}}"#).unwrap();
    let mut app = App::new(config, Some(31));
    press(&mut app, KeyCode::Enter);

    run_for(&mut app, 30_000);
    let Some(ActiveGame::Maze(game)) = &app.active else {
        panic!("expected a maze");
    };
    assert_eq!(game.difficulty(), MazeDifficulty::Hard);
    assert_eq!(game.phase, MazePhase::TimedOut);

    run_for(&mut app, 2_000);
    let Some(ActiveGame::Maze(game)) = &app.active else {
        panic!("expected a maze");
    };
    assert_eq!(game.phase, MazePhase::Playing);
    assert_eq!(game.round, 2);
}

#[test]
fn test_small_custom_arena_from_config() {
    let config = ArcadeConfig::from_json(
        r#"{"shooter": {"width": 200, "height": 150, "round_seconds": 5}}"#,
    )
    .unwrap();
    config.validate().unwrap();
    let mut app = App::new(config, Some(2));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    for _ in 0..100 {
        press(&mut app, KeyCode::Right);
    }
    let Some(ActiveGame::Shooter(game)) = &app.active else {
        panic!("expected the shooter");
    };
    assert_eq!(game.player.x, 200.0 - game.player.size);
    assert!(game.player.y + game.player.size <= 150.0);
    assert_eq!(game.time_left, 5);
}

#[test]
fn test_switching_games_drops_the_old_one() {
    let mut app = App::new(ArcadeConfig::default(), Some(5));
    app.launch(GameKind::Shooter).unwrap();
    run_for(&mut app, 1_000);

    assert_eq!(press(&mut app, KeyCode::Esc), InputResult::Continue);
    assert!(app.active.is_none());
    // Nothing runs while the menu is up
    run_for(&mut app, 5_000);
    assert!(app.active.is_none());

    app.launch(GameKind::Maze).unwrap();
    let Some(ActiveGame::Maze(game)) = &app.active else {
        panic!("expected a maze");
    };
    assert_eq!(game.time_left, 30);
    assert_eq!(press(&mut app, KeyCode::Esc), InputResult::Continue);
    assert_eq!(press(&mut app, KeyCode::Char('q')), InputResult::Quit);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ArcadeConfig::from_json(r#"{"maze": {"rows": 0}}"#).unwrap();
    assert!(config.validate().is_err());
    let config = ArcadeConfig::from_json(r#"{"frame_ms": 0}"#).unwrap();
    assert!(config.validate().is_err());
}
