//! The two arcade games and the glue that lets the terminal loop drive either.

pub mod maze;
pub mod shooter;

pub use maze::{MazeDifficulty, MazeGame, MazeInput, MazeSettings};
pub use shooter::{ShooterGame, ShooterInput, ShooterSettings};

use crate::core::error::MazeError;
use rand::Rng;

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Maze,
    Shooter,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Maze, GameKind::Shooter];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Maze => "Maze Runner",
            Self::Shooter => "Sky Shooter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Maze => "Find the hidden exit before time runs out",
            Self::Shooter => "Dodge the falling enemies until the clock runs out",
        }
    }
}

/// The game currently being played. Only one runs at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Maze(Box<MazeGame>),
    Shooter(Box<ShooterGame>),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Maze(_) => GameKind::Maze,
            Self::Shooter(_) => GameKind::Shooter,
        }
    }

    /// Advance whichever game is running by `dt_ms`.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Result<bool, MazeError> {
        match self {
            Self::Maze(game) => maze::tick_maze(game, dt_ms, rng),
            Self::Shooter(game) => Ok(shooter::tick_shooter(game, dt_ms, rng)),
        }
    }
}

/// Start a game of the given kind.
pub fn start_game<R: Rng>(
    kind: GameKind,
    maze_settings: &MazeSettings,
    shooter_settings: &ShooterSettings,
    rng: &mut R,
) -> Result<ActiveGame, MazeError> {
    Ok(match kind {
        GameKind::Maze => ActiveGame::Maze(Box::new(MazeGame::new(maze_settings.clone(), rng)?)),
        GameKind::Shooter => {
            ActiveGame::Shooter(Box::new(ShooterGame::new(shooter_settings.clone())))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_start_each_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for kind in GameKind::ALL {
            let game = start_game(
                kind,
                &MazeSettings::default(),
                &ShooterSettings::default(),
                &mut rng,
            )
            .unwrap();
            assert_eq!(game.kind(), kind);
        }
    }

    #[test]
    fn test_active_game_tick_dispatches() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = start_game(
            GameKind::Maze,
            &MazeSettings::default(),
            &ShooterSettings::default(),
            &mut rng,
        )
        .unwrap();
        assert!(!game.tick(500, &mut rng).unwrap());
        assert!(game.tick(500, &mut rng).unwrap());
        let ActiveGame::Maze(maze) = &game else {
            panic!("expected maze");
        };
        assert_eq!(maze.time_left, 29);
    }

    #[test]
    fn test_game_names() {
        for kind in GameKind::ALL {
            assert!(!kind.name().is_empty());
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_descriptions_do_not_assume_round_length() {
        // Round length comes from config
        for kind in GameKind::ALL {
            assert!(!kind.description().chars().any(|c| c.is_ascii_digit()));
        }
    }
}
