//! Integration test: shooter simulation, collisions and round lifecycle.

use arcade::core::constants::{ROUND_RESET_DELAY_MS, SIMULATION_INTERVAL_MS};
use arcade::games::shooter::{
    end_round, fire_bullet_at, process_input, spawn_enemy_at, step, tick_shooter, Kill,
    ShooterGame, ShooterInput, ShooterInputOutcome, ShooterOutcome, ShooterPhase,
    ShooterSettings, ShooterTimer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::FRAC_PI_2;

/// Straight up the screen.
const UP: f64 = -FRAC_PI_2;

fn quiet_game() -> ShooterGame {
    let mut game = ShooterGame::new(ShooterSettings::default());
    // Only scripted enemies
    game.timers.cancel(ShooterTimer::Spawn);
    game
}

#[test]
fn test_bullet_leaving_the_top_is_removed() {
    let mut game = quiet_game();
    let id = fire_bullet_at(&mut game, UP);

    let mut expired_at = None;
    for n in 1..=100 {
        let report = step(&mut game);
        if report.bullets_expired.contains(&id) {
            expired_at = Some(n);
            break;
        }
    }
    // y goes 450 → 0 in 90 steps; the origin leaves the arena on step 91
    assert_eq!(expired_at, Some(91));
    assert!(game.bullets.is_empty());
}

#[test]
fn test_bullet_destroys_falling_enemy() {
    let mut game = quiet_game();
    let player_x = game.player.x;
    let enemy = spawn_enemy_at(&mut game, player_x);
    let bullet = fire_bullet_at(&mut game, UP);

    let mut kills = Vec::new();
    for _ in 0..100 {
        kills.extend(step(&mut game).kills);
        if !kills.is_empty() {
            break;
        }
    }

    assert_eq!(kills, vec![Kill { bullet, enemy }]);
    assert!(game.bullets.is_empty());
    assert!(game.enemies.is_empty());
    assert_eq!(game.enemies_destroyed, 1);
    assert!(game.is_active());
}

#[test]
fn test_one_enemy_absorbs_only_one_of_two_bullets() {
    let mut game = quiet_game();
    let player_x = game.player.x;
    let enemy = spawn_enemy_at(&mut game, player_x);
    let first = fire_bullet_at(&mut game, UP);
    let second = fire_bullet_at(&mut game, UP);

    let mut kills = Vec::new();
    for _ in 0..100 {
        kills.extend(step(&mut game).kills);
        if !kills.is_empty() {
            break;
        }
    }

    assert_eq!(kills, vec![Kill { bullet: first, enemy }]);
    assert_eq!(game.bullets.len(), 1);
    assert_eq!(game.bullets[0].id, second);
    assert_eq!(game.enemies_destroyed, 1);
}

#[test]
fn test_enemy_reaching_the_player_ends_the_round() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let player_x = game.player.x;
    spawn_enemy_at(&mut game, player_x);

    let mut hit = false;
    for _ in 0..300 {
        if step(&mut game).player_hit {
            hit = true;
            break;
        }
    }
    assert!(hit);
    assert_eq!(game.phase, ShooterPhase::Ended(ShooterOutcome::Hit));
    assert_eq!(game.rounds_lost, 1);
    assert!(game.end_message().starts_with("GAME OVER!"));

    // Frozen until the reset: no steps, no spawns, no input
    assert!(!game.timers.is_scheduled(ShooterTimer::Simulation));
    assert!(!game.timers.is_scheduled(ShooterTimer::Spawn));
    assert!(!game.timers.is_scheduled(ShooterTimer::Countdown));
    assert_eq!(
        process_input(&mut game, ShooterInput::Fire, &mut rng),
        ShooterInputOutcome::Ignored
    );
    let ticks = game.tick_count;
    assert!(step(&mut game).kills.is_empty());
    assert_eq!(game.tick_count, ticks);

    tick_shooter(&mut game, ROUND_RESET_DELAY_MS, &mut rng);
    assert!(game.is_active());
    assert!(game.enemies.is_empty());
    assert!(game.bullets.is_empty());
    assert_eq!(game.time_left, 30);
    assert_eq!((game.player.x, game.player.y), (400.0, 450.0));
}

#[test]
fn test_surviving_the_countdown_wins() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    tick_shooter(&mut game, 29_000, &mut rng);
    assert!(game.is_active());
    assert_eq!(game.time_left, 1);
    assert_eq!(game.survived, 29);

    tick_shooter(&mut game, 1_000, &mut rng);
    assert_eq!(game.outcome(), Some(ShooterOutcome::Survived));
    assert_eq!(game.rounds_survived, 1);
    assert_eq!(
        game.end_message(),
        "YOU WIN! You survived for 30 seconds without getting hit!"
    );

    tick_shooter(&mut game, ROUND_RESET_DELAY_MS, &mut rng);
    assert!(game.is_active());
    assert_eq!(game.survived, 0);
    assert!(game.timers.is_scheduled(ShooterTimer::Spawn));
}

#[test]
fn test_ending_twice_counts_once() {
    let mut game = quiet_game();
    end_round(&mut game, ShooterOutcome::Hit);
    end_round(&mut game, ShooterOutcome::Survived);
    assert_eq!(game.outcome(), Some(ShooterOutcome::Hit));
    assert_eq!(game.rounds_lost, 1);
    assert_eq!(game.rounds_survived, 0);
}

#[test]
fn test_player_stays_inside_the_arena() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    for _ in 0..200 {
        process_input(&mut game, ShooterInput::Left, &mut rng);
    }
    assert_eq!(game.player.x, 0.0);
    assert_eq!(
        process_input(&mut game, ShooterInput::Left, &mut rng),
        ShooterInputOutcome::AtEdge
    );

    for _ in 0..200 {
        process_input(&mut game, ShooterInput::Right, &mut rng);
    }
    assert_eq!(game.player.x, 800.0 - game.player.size);
}

#[test]
fn test_random_play_keeps_entities_bounded() {
    let mut game = ShooterGame::new(ShooterSettings::default());
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    for frame in 0..5_000u32 {
        if frame % 3 == 0 {
            process_input(&mut game, ShooterInput::Fire, &mut rng);
        }
        tick_shooter(&mut game, SIMULATION_INTERVAL_MS, &mut rng);

        for bullet in &game.bullets {
            assert!(bullet.x >= 0.0 && bullet.x <= game.settings.width);
            assert!(bullet.y >= 0.0 && bullet.y <= game.settings.height);
        }
        for enemy in &game.enemies {
            assert!(enemy.y <= game.settings.height);
        }
    }
}
