// Frame pacing
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: u64 = 250;

// Shared round timing
pub const ROUND_SECONDS: u32 = 30;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
pub const ROUND_RESET_DELAY_MS: u64 = 2000;

// Maze
pub const MAZE_ROWS: usize = 10;
pub const MAZE_COLS: usize = 10;
pub const MAZE_MAX_DIMENSION: usize = 64;
pub const EXIT_REVEAL_MS: u64 = 2000;
pub const EXIT_HINT_SECONDS: u32 = 5;
pub const EXIT_SAMPLE_LIMIT: usize = 4096;
pub const MAX_GENERATION_ATTEMPTS: u32 = 64;

// Shooter arena (game units)
pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 500.0;
pub const ARENA_MIN_SIZE: f64 = 100.0;
pub const ARENA_MAX_SIZE: f64 = 4000.0;

// Shooter timing: ~60 Hz simulation, enemy every 1.5s
pub const SIMULATION_INTERVAL_MS: u64 = 16;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Shooter entities
pub const PLAYER_SIZE: f64 = 30.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_START_Y: f64 = 450.0;
pub const BULLET_SIZE: f64 = 5.0;
pub const BULLET_SPEED: f64 = 5.0;
pub const ENEMY_SIZE: f64 = 30.0;
pub const ENEMY_SPEED: f64 = 2.0;
