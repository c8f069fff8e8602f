//! Maze game data structures.
//!
//! A grid navigation game: find the hidden exit before the countdown runs out.

use crate::core::constants::{
    EXIT_HINT_SECONDS, MAZE_COLS, MAZE_MAX_DIMENSION, MAZE_ROWS, ROUND_SECONDS,
};
use crate::core::error::{ConfigError, MazeError};
use crate::core::scheduler::Scheduler;
use serde::{Deserialize, Serialize};

/// Difficulty presets. Only the wall density changes between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MazeDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl MazeDifficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Probability that any non-start cell is a wall.
    pub fn wall_probability(&self) -> f64 {
        match self {
            Self::Easy => 0.15,
            Self::Medium => 0.25,
            Self::Hard => 0.35,
        }
    }
}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// A grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const START: Position = Position { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Fixed-size matrix of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Open; rows * cols],
        }
    }

    /// Build a grid from rows of cells. Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.y * self.cols + pos.x])
        } else {
            None
        }
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            self.cells[pos.y * self.cols + pos.x] = cell;
        }
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Position { x, y }))
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Wall).count()
    }

    /// The neighbour one step in `direction`, if it is inside the grid.
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Position { x, y };
        self.in_bounds(next).then_some(next)
    }
}

/// Per-round maze parameters. Also the `maze` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    pub rows: usize,
    pub cols: usize,
    pub round_seconds: u32,
    pub difficulty: MazeDifficulty,
    /// Regenerate grids until the exit can be reached from the start.
    pub require_reachable_exit: bool,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            rows: MAZE_ROWS,
            cols: MAZE_COLS,
            round_seconds: ROUND_SECONDS,
            difficulty: MazeDifficulty::default(),
            require_reachable_exit: false,
        }
    }
}

impl MazeSettings {
    /// Check that a grid of these dimensions can host a start and an exit.
    pub fn check_dimensions(&self) -> Result<(), MazeError> {
        let valid_side = |n: usize| (1..=MAZE_MAX_DIMENSION).contains(&n);
        if !valid_side(self.rows) || !valid_side(self.cols) || self.rows * self.cols < 2 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                max: MAZE_MAX_DIMENSION,
            });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_dimensions().map_err(|e| ConfigError::Invalid {
            field: "maze.rows/maze.cols",
            reason: e.to_string(),
        })?;
        if self.round_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "maze.round_seconds",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazePhase {
    Playing,
    Won,
    TimedOut,
}

/// Named timers owned by a maze game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeTimer {
    /// 1 Hz countdown while a round is being played.
    Countdown,
    /// One-shot: start the next round after a win or timeout.
    RoundReset,
    /// One-shot: hide the manually revealed exit again.
    RevealExpire,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct MazeGame {
    pub settings: MazeSettings,
    pub grid: Grid,
    pub player: Position,
    pub exit: Position,
    /// Whether a path from the start to the exit exists this round.
    pub exit_reachable: bool,

    pub phase: MazePhase,
    /// Seconds left on the countdown.
    pub time_left: u32,
    /// Set while a manual reveal is showing the exit.
    pub exit_revealed: bool,

    // Scoring
    pub wins: u32,
    pub streak: u32,
    /// Rounds started since the game was created, counting from 1.
    pub round: u32,

    pub timers: Scheduler<MazeTimer>,
}

impl MazeGame {
    pub fn difficulty(&self) -> MazeDifficulty {
        self.settings.difficulty
    }

    /// The exit is hidden until the final seconds or a manual reveal.
    pub fn exit_visible(&self) -> bool {
        self.exit_revealed || self.time_left <= EXIT_HINT_SECONDS
    }

    pub fn low_time(&self) -> bool {
        self.time_left <= EXIT_HINT_SECONDS
    }

    pub fn streak_hot(&self) -> bool {
        self.streak >= 1
    }

    pub fn is_over(&self) -> bool {
        self.phase != MazePhase::Playing
    }

    /// Banner text for the current phase. Empty while playing.
    pub fn status_message(&self) -> String {
        match self.phase {
            MazePhase::Playing => String::new(),
            MazePhase::Won => format!("Victory! (Streak: {})", self.streak),
            MazePhase::TimedOut => "Time's up! New maze loading...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wall_probabilities() {
        assert!((MazeDifficulty::Easy.wall_probability() - 0.15).abs() < f64::EPSILON);
        assert!((MazeDifficulty::Medium.wall_probability() - 0.25).abs() < f64::EPSILON);
        assert!((MazeDifficulty::Hard.wall_probability() - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(MazeDifficulty::Easy.name(), "Easy");
        assert_eq!(MazeDifficulty::Medium.name(), "Medium");
        assert_eq!(MazeDifficulty::Hard.name(), "Hard");
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&MazeDifficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let parsed: MazeDifficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, MazeDifficulty::Easy);
    }

    #[test]
    fn test_grid_bounds_and_access() {
        let mut grid = Grid::open(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.in_bounds(Position::new(3, 2)));
        assert!(!grid.in_bounds(Position::new(4, 0)));
        assert!(!grid.in_bounds(Position::new(0, 3)));
        assert_eq!(grid.get(Position::new(9, 9)), None);

        grid.set(Position::new(1, 1), Cell::Wall);
        assert!(!grid.is_open(Position::new(1, 1)));
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn test_grid_from_rows_is_row_major() {
        use Cell::{Open as O, Wall as W};
        let grid = Grid::from_rows(vec![vec![O, W, O], vec![W, O, O]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Position::new(1, 0)), Some(W));
        assert_eq!(grid.get(Position::new(0, 1)), Some(W));
        assert_eq!(grid.get(Position::new(2, 1)), Some(O));
    }

    #[test]
    fn test_grid_step_stays_in_bounds() {
        let grid = Grid::open(2, 2);
        assert_eq!(grid.step(Position::START, Direction::Up), None);
        assert_eq!(grid.step(Position::START, Direction::Left), None);
        assert_eq!(
            grid.step(Position::START, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.step(Position::new(1, 1), Direction::Down), None);
    }

    #[test]
    fn test_positions_cover_grid() {
        let grid = Grid::open(3, 5);
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(all.len(), 15);
        assert_eq!(all[0], Position::START);
        assert_eq!(all[5], Position::new(0, 1));
    }

    #[test]
    fn test_settings_dimension_checks() {
        assert!(MazeSettings::default().check_dimensions().is_ok());

        let zero = MazeSettings {
            rows: 0,
            ..MazeSettings::default()
        };
        assert!(zero.check_dimensions().is_err());

        let single = MazeSettings {
            rows: 1,
            cols: 1,
            ..MazeSettings::default()
        };
        assert!(single.check_dimensions().is_err());

        let huge = MazeSettings {
            cols: MAZE_MAX_DIMENSION + 1,
            ..MazeSettings::default()
        };
        assert!(huge.check_dimensions().is_err());
    }

    #[test]
    fn test_settings_reject_zero_round() {
        let settings = MazeSettings {
            round_seconds: 0,
            ..MazeSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
