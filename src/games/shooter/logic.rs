//! Shooter game logic: input, simulation step, spawning, countdown, resets.

use super::types::*;
use crate::core::constants::{
    BULLET_SIZE, BULLET_SPEED, COUNTDOWN_INTERVAL_MS, ENEMY_SIZE, ENEMY_SPEED,
    ROUND_RESET_DELAY_MS, SIMULATION_INTERVAL_MS, SPAWN_INTERVAL_MS,
};
use crate::core::scheduler::Scheduler;
use rand::Rng;
use std::collections::HashSet;
use std::f64::consts::TAU;
use tracing::{debug, info};

/// UI-agnostic input actions for the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterInput {
    Left,
    Right,
    Fire,
    Other,
}

/// What an input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterInputOutcome {
    Moved,
    /// Already against the arena edge in that direction.
    AtEdge,
    Fired,
    /// The round is not active (or the key is not bound).
    Ignored,
}

/// A bullet and the enemy it destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub bullet: u64,
    pub enemy: u64,
}

/// Everything that happened during one simulation step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Bullets removed for leaving the arena.
    pub bullets_expired: Vec<u64>,
    /// Enemies removed for falling past the bottom edge.
    pub enemies_escaped: Vec<u64>,
    /// Bullet/enemy pairs removed by collision.
    pub kills: Vec<Kill>,
    /// An enemy overlapped the player; the round was lost this step.
    pub player_hit: bool,
}

impl ShooterGame {
    /// Create a game with its first round already running.
    pub fn new(settings: ShooterSettings) -> Self {
        let (x, y) = settings.player_start();
        let mut game = Self {
            player: Player::new(x, y),
            bullets: Vec::new(),
            enemies: Vec::new(),
            phase: ShooterPhase::Active,
            time_left: settings.round_seconds,
            survived: 0,
            rounds_survived: 0,
            rounds_lost: 0,
            enemies_destroyed: 0,
            tick_count: 0,
            next_entity_id: 0,
            timers: Scheduler::new(),
            settings,
        };
        arm_round_timers(&mut game);
        game
    }
}

fn arm_round_timers(game: &mut ShooterGame) {
    game.timers.every(ShooterTimer::Simulation, SIMULATION_INTERVAL_MS);
    game.timers.every(ShooterTimer::Spawn, SPAWN_INTERVAL_MS);
    game.timers.every(ShooterTimer::Countdown, COUNTDOWN_INTERVAL_MS);
}

/// Clear the arena, restore the countdown and restart every round timer.
pub fn start_round(game: &mut ShooterGame) {
    let (x, y) = game.settings.player_start();
    game.player.x = x;
    game.player.y = y;
    game.bullets.clear();
    game.enemies.clear();
    game.time_left = game.settings.round_seconds;
    game.survived = 0;
    game.phase = ShooterPhase::Active;

    game.timers.cancel(ShooterTimer::RoundReset);
    arm_round_timers(game);
    debug!("shooter round started");
}

/// End the round. Simulation, spawning and the countdown stop until the
/// delayed reset. Calling this on an ended round does nothing.
pub fn end_round(game: &mut ShooterGame, outcome: ShooterOutcome) {
    if !game.is_active() {
        return;
    }
    game.phase = ShooterPhase::Ended(outcome);
    match outcome {
        ShooterOutcome::Survived => game.rounds_survived += 1,
        ShooterOutcome::Hit => game.rounds_lost += 1,
    }

    game.timers.cancel(ShooterTimer::Simulation);
    game.timers.cancel(ShooterTimer::Spawn);
    game.timers.cancel(ShooterTimer::Countdown);
    game.timers.once(ShooterTimer::RoundReset, ROUND_RESET_DELAY_MS);

    info!(
        outcome = ?outcome,
        survived = game.survived,
        enemies_destroyed = game.enemies_destroyed,
        "shooter round ended"
    );
}

/// Process player input.
pub fn process_input<R: Rng>(
    game: &mut ShooterGame,
    input: ShooterInput,
    rng: &mut R,
) -> ShooterInputOutcome {
    if !game.is_active() {
        return ShooterInputOutcome::Ignored;
    }

    match input {
        ShooterInput::Left => {
            if game.player.x <= 0.0 {
                return ShooterInputOutcome::AtEdge;
            }
            game.player.x = (game.player.x - game.player.speed).max(0.0);
            ShooterInputOutcome::Moved
        }
        ShooterInput::Right => {
            let max_x = game.settings.width - game.player.size;
            if game.player.x >= max_x {
                return ShooterInputOutcome::AtEdge;
            }
            game.player.x = (game.player.x + game.player.speed).min(max_x);
            ShooterInputOutcome::Moved
        }
        ShooterInput::Fire => {
            fire_bullet(game, rng);
            ShooterInputOutcome::Fired
        }
        ShooterInput::Other => ShooterInputOutcome::Ignored,
    }
}

/// Fire a bullet from the top-centre of the player in a random direction.
pub fn fire_bullet<R: Rng>(game: &mut ShooterGame, rng: &mut R) -> u64 {
    let angle = rng.gen_range(0.0..TAU);
    fire_bullet_at(game, angle)
}

/// Fire a bullet at `angle` radians (0 = right, π/2 = down).
pub fn fire_bullet_at(game: &mut ShooterGame, angle: f64) -> u64 {
    let id = game.take_entity_id();
    game.bullets.push(Bullet {
        id,
        x: game.player.x + game.player.size / 2.0,
        y: game.player.y,
        dx: angle.cos() * BULLET_SPEED,
        dy: angle.sin() * BULLET_SPEED,
        size: BULLET_SIZE,
    });
    id
}

/// Spawn an enemy at a random column along the top edge.
/// Returns `None` when the round is not active.
pub fn spawn_enemy<R: Rng>(game: &mut ShooterGame, rng: &mut R) -> Option<u64> {
    if !game.is_active() {
        return None;
    }
    let max_x = (game.settings.width - ENEMY_SIZE).max(f64::MIN_POSITIVE);
    let x = rng.gen_range(0.0..max_x);
    Some(spawn_enemy_at(game, x))
}

/// Spawn an enemy at column `x` on the top edge.
pub fn spawn_enemy_at(game: &mut ShooterGame, x: f64) -> u64 {
    let id = game.take_entity_id();
    game.enemies.push(Enemy {
        id,
        x,
        y: 0.0,
        size: ENEMY_SIZE,
        speed: ENEMY_SPEED,
    });
    id
}

/// Run one simulation step.
///
/// Bullets move and those outside the arena are dropped; enemies fall and
/// those below the arena are dropped. Each remaining bullet then destroys the
/// earliest-spawned enemy it overlaps that no other bullet claimed this step.
/// Removals happen after the pass. Finally any enemy touching the player ends
/// the round.
pub fn step(game: &mut ShooterGame) -> StepReport {
    let mut report = StepReport::default();
    if !game.is_active() {
        return report;
    }
    game.tick_count += 1;

    let width = game.settings.width;
    let height = game.settings.height;

    for bullet in &mut game.bullets {
        bullet.x += bullet.dx;
        bullet.y += bullet.dy;
    }
    game.bullets.retain(|b| {
        let inside = b.bounds().origin_within(width, height);
        if !inside {
            report.bullets_expired.push(b.id);
        }
        inside
    });

    for enemy in &mut game.enemies {
        enemy.y += enemy.speed;
    }
    game.enemies.retain(|e| {
        let inside = e.y <= height;
        if !inside {
            report.enemies_escaped.push(e.id);
        }
        inside
    });

    let mut hit_bullets = HashSet::new();
    let mut hit_enemies = HashSet::new();
    for bullet in &game.bullets {
        let bounds = bullet.bounds();
        let target = game
            .enemies
            .iter()
            .find(|e| !hit_enemies.contains(&e.id) && bounds.overlaps(&e.bounds()));
        if let Some(enemy) = target {
            hit_bullets.insert(bullet.id);
            hit_enemies.insert(enemy.id);
            report.kills.push(Kill {
                bullet: bullet.id,
                enemy: enemy.id,
            });
        }
    }
    if !report.kills.is_empty() {
        game.bullets.retain(|b| !hit_bullets.contains(&b.id));
        game.enemies.retain(|e| !hit_enemies.contains(&e.id));
        game.enemies_destroyed += report.kills.len() as u64;
    }

    let player = game.player.bounds();
    if game.enemies.iter().any(|e| e.bounds().overlaps(&player)) {
        report.player_hit = true;
        end_round(game, ShooterOutcome::Hit);
    }

    report
}

/// Handle one fired timer.
pub fn on_timer<R: Rng>(game: &mut ShooterGame, timer: ShooterTimer, rng: &mut R) {
    match timer {
        ShooterTimer::Simulation => {
            step(game);
        }
        ShooterTimer::Spawn => {
            spawn_enemy(game, rng);
        }
        ShooterTimer::Countdown => {
            if !game.is_active() {
                return;
            }
            game.time_left = game.time_left.saturating_sub(1);
            game.survived += 1;
            if game.time_left == 0 {
                end_round(game, ShooterOutcome::Survived);
            }
        }
        ShooterTimer::RoundReset => {
            if game.is_active() {
                debug!("ignoring stale shooter reset");
                return;
            }
            start_round(game);
        }
    }
}

/// Advance the shooter by `dt_ms` of wall time, dispatching every timer that
/// comes due. Returns true if anything fired.
pub fn tick_shooter<R: Rng>(game: &mut ShooterGame, dt_ms: u64, rng: &mut R) -> bool {
    game.timers.advance(dt_ms);
    let mut changed = false;
    while let Some(timer) = game.timers.next_fired() {
        on_timer(game, timer, rng);
        changed = true;
    }
    changed
}
