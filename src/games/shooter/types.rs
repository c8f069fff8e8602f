//! Shooter game data structures.
//!
//! Enemies drift down from the top of the arena; the player slides along the
//! bottom firing bullets that fly off at a random angle. Surviving the
//! countdown wins the round, being touched by an enemy loses it.

use crate::core::constants::*;
use crate::core::error::ConfigError;
use crate::core::geometry::Aabb;
use crate::core::scheduler::Scheduler;
use serde::{Deserialize, Serialize};

/// The `shooter` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterSettings {
    pub width: f64,
    pub height: f64,
    pub round_seconds: u32,
}

impl Default for ShooterSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            round_seconds: ROUND_SECONDS,
        }
    }
}

impl ShooterSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && (ARENA_MIN_SIZE..=ARENA_MAX_SIZE).contains(&v);
        if !valid(self.width) {
            return Err(ConfigError::Invalid {
                field: "shooter.width",
                reason: format!("must be between {} and {}", ARENA_MIN_SIZE, ARENA_MAX_SIZE),
            });
        }
        if !valid(self.height) {
            return Err(ConfigError::Invalid {
                field: "shooter.height",
                reason: format!("must be between {} and {}", ARENA_MIN_SIZE, ARENA_MAX_SIZE),
            });
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "shooter.round_seconds",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Where the player starts: the default spot, pulled inside narrow arenas.
    pub fn player_start(&self) -> (f64, f64) {
        let x = PLAYER_START_X.min(self.width - PLAYER_SIZE).max(0.0);
        let y = PLAYER_START_Y.min(self.height - PLAYER_SIZE).max(0.0);
        (x, y)
    }
}

/// The player's ship. Moves horizontally only.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

/// A bullet travelling in a straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
}

impl Bullet {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

/// An enemy falling straight down.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterOutcome {
    /// The countdown ran out with the player untouched.
    Survived,
    /// An enemy reached the player.
    Hit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterPhase {
    Active,
    Ended(ShooterOutcome),
}

/// Named timers owned by a shooter game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterTimer {
    /// ~60 Hz simulation step.
    Simulation,
    /// Enemy spawner.
    Spawn,
    /// 1 Hz round countdown.
    Countdown,
    /// One-shot: start the next round after one ends.
    RoundReset,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct ShooterGame {
    pub settings: ShooterSettings,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,

    pub phase: ShooterPhase,
    /// Seconds left on the countdown.
    pub time_left: u32,
    /// Seconds survived this round.
    pub survived: u32,

    // Session tallies
    pub rounds_survived: u32,
    pub rounds_lost: u32,
    pub enemies_destroyed: u64,

    /// Total simulation steps run.
    pub tick_count: u64,
    pub(crate) next_entity_id: u64,

    pub timers: Scheduler<ShooterTimer>,
}

impl ShooterGame {
    pub fn is_active(&self) -> bool {
        self.phase == ShooterPhase::Active
    }

    pub fn outcome(&self) -> Option<ShooterOutcome> {
        match self.phase {
            ShooterPhase::Active => None,
            ShooterPhase::Ended(outcome) => Some(outcome),
        }
    }

    pub fn low_time(&self) -> bool {
        self.time_left <= EXIT_HINT_SECONDS
    }

    /// Text shown when a round ends. Empty while the round is running.
    pub fn end_message(&self) -> String {
        match self.phase {
            ShooterPhase::Active => String::new(),
            ShooterPhase::Ended(ShooterOutcome::Survived) => format!(
                "YOU WIN! You survived for {} seconds without getting hit!",
                self.survived
            ),
            ShooterPhase::Ended(ShooterOutcome::Hit) => format!(
                "GAME OVER! You survived {}s (but couldn't hit anything anyway)",
                self.survived
            ),
        }
    }

    pub(crate) fn take_entity_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(ShooterSettings::default().validate().is_ok());
    }

    #[test]
    fn test_settings_reject_tiny_arena() {
        let settings = ShooterSettings {
            width: 10.0,
            ..ShooterSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ShooterSettings {
            height: f64::NAN,
            ..ShooterSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_reject_zero_round() {
        let settings = ShooterSettings {
            round_seconds: 0,
            ..ShooterSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_player_start_default() {
        let (x, y) = ShooterSettings::default().player_start();
        assert!((x - 400.0).abs() < f64::EPSILON);
        assert!((y - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_player_start_fits_small_arena() {
        let settings = ShooterSettings {
            width: 200.0,
            height: 200.0,
            round_seconds: 30,
        };
        let (x, y) = settings.player_start();
        assert!((x - 170.0).abs() < f64::EPSILON);
        assert!((y - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_entity_bounds() {
        let player = Player::new(10.0, 20.0);
        assert_eq!(player.bounds(), Aabb::new(10.0, 20.0, 30.0, 30.0));

        let bullet = Bullet {
            id: 0,
            x: 1.0,
            y: 2.0,
            dx: 0.0,
            dy: 0.0,
            size: BULLET_SIZE,
        };
        assert_eq!(bullet.bounds(), Aabb::new(1.0, 2.0, 5.0, 5.0));
    }
}
