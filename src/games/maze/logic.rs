//! Maze round controller: movement, countdown, exit reveal, round resets.

use super::generation::generate_round;
use super::types::*;
use crate::core::constants::{COUNTDOWN_INTERVAL_MS, EXIT_REVEAL_MS, ROUND_RESET_DELAY_MS};
use crate::core::error::MazeError;
use crate::core::scheduler::Scheduler;
use rand::Rng;
use tracing::{debug, info};

/// UI-agnostic input actions for the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeInput {
    Up,
    Down,
    Left,
    Right,
    /// Show the exit for a couple of seconds.
    Reveal,
    Other,
}

/// Why a move did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    Wall,
    OutOfBounds,
}

/// What an input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeInputOutcome {
    Moved,
    Blocked(BlockReason),
    /// The move landed on the exit and won the round.
    ReachedExit,
    Revealed,
    /// A reveal is already showing; it is neither stacked nor extended.
    RevealAlreadyActive,
    /// The round is over (or the key is not bound); nothing changed.
    Ignored,
}

impl MazeGame {
    /// Create a game and start its first round.
    pub fn new<R: Rng>(settings: MazeSettings, rng: &mut R) -> Result<Self, MazeError> {
        let generated = generate_round(&settings, rng)?;
        let mut game = Self {
            time_left: settings.round_seconds,
            settings,
            grid: generated.grid,
            player: Position::START,
            exit: generated.exit,
            exit_reachable: generated.exit_reachable,
            phase: MazePhase::Playing,
            exit_revealed: false,
            wins: 0,
            streak: 0,
            round: 1,
            timers: Scheduler::new(),
        };
        game.timers.every(MazeTimer::Countdown, COUNTDOWN_INTERVAL_MS);
        debug!(
            round = game.round,
            difficulty = game.difficulty().name(),
            reachable = game.exit_reachable,
            "maze round started"
        );
        Ok(game)
    }
}

/// Replace the grid and put the player back at the start with a full countdown.
///
/// Pending resets and reveals belonging to the previous round are cancelled,
/// so a stale timer cannot end or reset the new round.
pub fn start_round<R: Rng>(game: &mut MazeGame, rng: &mut R) -> Result<(), MazeError> {
    let generated = generate_round(&game.settings, rng)?;

    game.grid = generated.grid;
    game.exit = generated.exit;
    game.exit_reachable = generated.exit_reachable;
    game.player = Position::START;
    game.time_left = game.settings.round_seconds;
    game.phase = MazePhase::Playing;
    game.exit_revealed = false;
    game.round += 1;

    game.timers.cancel(MazeTimer::RoundReset);
    game.timers.cancel(MazeTimer::RevealExpire);
    game.timers.every(MazeTimer::Countdown, COUNTDOWN_INTERVAL_MS);

    debug!(
        round = game.round,
        difficulty = game.difficulty().name(),
        reachable = game.exit_reachable,
        attempts = generated.attempts,
        "maze round started"
    );
    Ok(())
}

/// Switch the difficulty preset and start a new round right away.
/// Wins and streak carry over.
pub fn set_difficulty<R: Rng>(
    game: &mut MazeGame,
    difficulty: MazeDifficulty,
    rng: &mut R,
) -> Result<(), MazeError> {
    game.settings.difficulty = difficulty;
    start_round(game, rng)
}

/// Process player input.
pub fn process_input(game: &mut MazeGame, input: MazeInput) -> MazeInputOutcome {
    match input {
        MazeInput::Up => try_move(game, Direction::Up),
        MazeInput::Down => try_move(game, Direction::Down),
        MazeInput::Left => try_move(game, Direction::Left),
        MazeInput::Right => try_move(game, Direction::Right),
        MazeInput::Reveal => reveal_exit(game),
        MazeInput::Other => MazeInputOutcome::Ignored,
    }
}

/// Move one cell if the target is inside the grid and open.
pub fn try_move(game: &mut MazeGame, direction: Direction) -> MazeInputOutcome {
    if game.is_over() {
        return MazeInputOutcome::Ignored;
    }

    let Some(target) = game.grid.step(game.player, direction) else {
        return MazeInputOutcome::Blocked(BlockReason::OutOfBounds);
    };
    if !game.grid.is_open(target) {
        return MazeInputOutcome::Blocked(BlockReason::Wall);
    }

    game.player = target;

    if game.player == game.exit {
        win_round(game);
        return MazeInputOutcome::ReachedExit;
    }
    MazeInputOutcome::Moved
}

/// Show the exit for `EXIT_REVEAL_MS`. Does nothing while a reveal is showing.
pub fn reveal_exit(game: &mut MazeGame) -> MazeInputOutcome {
    if game.is_over() {
        return MazeInputOutcome::Ignored;
    }
    if game.exit_revealed {
        return MazeInputOutcome::RevealAlreadyActive;
    }
    game.exit_revealed = true;
    game.timers.once(MazeTimer::RevealExpire, EXIT_REVEAL_MS);
    MazeInputOutcome::Revealed
}

fn win_round(game: &mut MazeGame) {
    game.phase = MazePhase::Won;
    game.wins += 1;
    game.streak += 1;
    game.timers.cancel(MazeTimer::Countdown);
    game.timers.once(MazeTimer::RoundReset, ROUND_RESET_DELAY_MS);
    info!(
        round = game.round,
        wins = game.wins,
        streak = game.streak,
        time_left = game.time_left,
        "maze round won"
    );
}

fn time_out(game: &mut MazeGame) {
    game.phase = MazePhase::TimedOut;
    game.streak = 0;
    game.timers.cancel(MazeTimer::Countdown);
    game.timers.once(MazeTimer::RoundReset, ROUND_RESET_DELAY_MS);
    info!(round = game.round, wins = game.wins, "maze round timed out");
}

/// Handle one fired timer.
pub fn on_timer<R: Rng>(
    game: &mut MazeGame,
    timer: MazeTimer,
    rng: &mut R,
) -> Result<(), MazeError> {
    match timer {
        MazeTimer::Countdown => {
            if game.is_over() {
                return Ok(());
            }
            game.time_left = game.time_left.saturating_sub(1);
            if game.time_left == 0 {
                time_out(game);
            }
        }
        MazeTimer::RoundReset => {
            if !game.is_over() {
                debug!(round = game.round, "ignoring stale maze reset");
                return Ok(());
            }
            start_round(game, rng)?;
        }
        MazeTimer::RevealExpire => {
            game.exit_revealed = false;
        }
    }
    Ok(())
}

/// Advance the maze by `dt_ms` of wall time, dispatching every timer that
/// comes due. Returns true if anything fired.
pub fn tick_maze<R: Rng>(game: &mut MazeGame, dt_ms: u64, rng: &mut R) -> Result<bool, MazeError> {
    game.timers.advance(dt_ms);
    let mut changed = false;
    while let Some(timer) = game.timers.next_fired() {
        on_timer(game, timer, rng)?;
        changed = true;
    }
    Ok(changed)
}
