//! Application state shared by the terminal loop, input handling and rendering.

use crate::core::config::ArcadeConfig;
use crate::core::constants::MAX_FRAME_DT_MS;
use crate::core::error::Result;
use crate::games::maze::MazeDifficulty;
use crate::games::{start_game, ActiveGame, GameKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Load the config from `path` (or the default location) and apply a
/// difficulty chosen on the command line.
pub fn load_config(
    path: Option<&Path>,
    difficulty: Option<MazeDifficulty>,
) -> Result<ArcadeConfig> {
    let mut config = ArcadeConfig::load(path)?;
    if let Some(difficulty) = difficulty {
        config.maze.difficulty = difficulty;
    }
    Ok(config)
}

pub struct App {
    pub config: ArcadeConfig,
    pub rng: StdRng,
    /// Highlighted entry in the game menu.
    pub menu_selection: usize,
    /// `None` while the menu is showing.
    pub active: Option<ActiveGame>,
    /// Last error worth telling the player about, shown on the menu.
    pub notice: Option<String>,
}

impl App {
    /// Create the app. A `seed` makes every round reproducible.
    pub fn new(config: ArcadeConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            menu_selection: 0,
            active: None,
            notice: None,
        }
    }

    pub fn selected_game(&self) -> GameKind {
        GameKind::ALL[self.menu_selection % GameKind::ALL.len()]
    }

    pub fn menu_up(&mut self) {
        let len = GameKind::ALL.len();
        self.menu_selection = (self.menu_selection + len - 1) % len;
    }

    pub fn menu_down(&mut self) {
        self.menu_selection = (self.menu_selection + 1) % GameKind::ALL.len();
    }

    /// Start `kind`, replacing whatever was running.
    pub fn launch(&mut self, kind: GameKind) -> Result<()> {
        let game = start_game(kind, &self.config.maze, &self.config.shooter, &mut self.rng)?;
        info!(game = kind.name(), "game launched");
        self.active = Some(game);
        self.notice = None;
        Ok(())
    }

    /// Return to the menu. The abandoned game and its timers are dropped.
    pub fn back_to_menu(&mut self) {
        if let Some(game) = self.active.take() {
            info!(game = game.kind().name(), "returned to menu");
        }
    }

    /// Advance the running game, if any.
    pub fn tick(&mut self, dt_ms: u64) -> Result<bool> {
        match self.active.as_mut() {
            Some(game) => Ok(game.tick(dt_ms, &mut self.rng)?),
            None => Ok(false),
        }
    }
}

/// Converts wall-clock time into whole elapsed milliseconds for the scheduler.
///
/// Sub-millisecond remainders carry over to the next call. Gaps longer than
/// `MAX_FRAME_DT_MS` (a suspended terminal, say) are clamped so the games do
/// not fast-forward through a burst of timers.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn elapsed_ms(&mut self) -> u64 {
        self.elapsed_ms_at(Instant::now())
    }

    pub fn elapsed_ms_at(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.last).as_millis() as u64;
        if elapsed > MAX_FRAME_DT_MS {
            self.last = now;
            return MAX_FRAME_DT_MS;
        }
        self.last += Duration::from_millis(elapsed);
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
