//! Maze grid generation and exit placement.
//!
//! Cells are walls independently at the difficulty's wall probability, so a
//! round can come out with no path from the start to the exit. That is
//! accepted unless `require_reachable_exit` is set.

use super::types::{Cell, Direction, Grid, MazeSettings, Position};
use crate::core::constants::{EXIT_SAMPLE_LIMIT, MAX_GENERATION_ATTEMPTS};
use crate::core::error::MazeError;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A freshly generated round layout.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub exit: Position,
    pub exit_reachable: bool,
    /// How many grids were generated before this one was accepted.
    pub attempts: u32,
}

/// Fill a `rows × cols` grid with walls at `wall_probability`, keeping the start open.
pub fn generate_grid<R: Rng>(
    rows: usize,
    cols: usize,
    wall_probability: f64,
    rng: &mut R,
) -> Grid {
    let p = wall_probability.clamp(0.0, 1.0);
    let mut grid = Grid::open(rows, cols);
    for y in 0..rows {
        for x in 0..cols {
            if rng.gen::<f64>() < p {
                grid.set(Position { x, y }, Cell::Wall);
            }
        }
    }
    grid.set(Position::START, Cell::Open);
    grid
}

fn is_exit_candidate(grid: &Grid, pos: Position) -> bool {
    pos != Position::START && grid.is_open(pos)
}

/// Pick the exit uniformly among open cells other than the start.
///
/// Uses rejection sampling over the whole grid. After `EXIT_SAMPLE_LIMIT`
/// rejected draws it picks directly from the eligible cells instead, which
/// keeps the distribution uniform and guarantees termination.
pub fn place_exit<R: Rng>(grid: &Grid, rng: &mut R) -> Result<Position, MazeError> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(MazeError::NoExitCandidate);
    }

    for _ in 0..EXIT_SAMPLE_LIMIT {
        let pos = Position::new(rng.gen_range(0..grid.cols()), rng.gen_range(0..grid.rows()));
        if is_exit_candidate(grid, pos) {
            return Ok(pos);
        }
    }

    let candidates: Vec<Position> = grid
        .positions()
        .filter(|p| is_exit_candidate(grid, *p))
        .collect();
    if candidates.is_empty() {
        return Err(MazeError::NoExitCandidate);
    }
    debug!(
        candidates = candidates.len(),
        "exit sampling hit its draw limit, picking directly"
    );
    Ok(candidates[rng.gen_range(0..candidates.len())])
}

/// Flood fill over open cells with 4-neighbour moves.
pub fn reachable(grid: &Grid, from: Position, to: Position) -> bool {
    if !grid.is_open(from) || !grid.is_open(to) {
        return false;
    }
    if from == to {
        return true;
    }

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::new();
    visited[from.y * grid.cols() + from.x] = true;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let Some(next) = grid.step(pos, direction) else {
                continue;
            };
            let index = next.y * grid.cols() + next.x;
            if visited[index] || !grid.is_open(next) {
                continue;
            }
            if next == to {
                return true;
            }
            visited[index] = true;
            queue.push_back(next);
        }
    }

    false
}

/// Generate a grid and exit for a new round.
pub fn generate_round<R: Rng>(
    settings: &MazeSettings,
    rng: &mut R,
) -> Result<GeneratedMaze, MazeError> {
    generate_round_with(settings, settings.difficulty.wall_probability(), rng)
}

/// Like [`generate_round`] with an explicit wall probability.
pub fn generate_round_with<R: Rng>(
    settings: &MazeSettings,
    wall_probability: f64,
    rng: &mut R,
) -> Result<GeneratedMaze, MazeError> {
    settings.check_dimensions()?;

    let mut fallback: Option<GeneratedMaze> = None;

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let grid = generate_grid(settings.rows, settings.cols, wall_probability, rng);
        let Ok(exit) = place_exit(&grid, rng) else {
            continue;
        };
        let exit_reachable = reachable(&grid, Position::START, exit);
        let generated = GeneratedMaze {
            grid,
            exit,
            exit_reachable,
            attempts: attempt,
        };

        if exit_reachable || !settings.require_reachable_exit {
            return Ok(generated);
        }
        fallback = Some(generated);
    }

    match fallback {
        Some(generated) => {
            warn!(
                attempts = MAX_GENERATION_ATTEMPTS,
                "no reachable exit found, accepting unreachable maze"
            );
            Ok(generated)
        }
        None => Err(MazeError::NoExitCandidate),
    }
}
