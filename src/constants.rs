// Game timing constants
pub const TICKS_PER_SECOND: u64 = 60;

// Playfield dimensions (simulation units; the renderer scales to cells)
pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// Bird physics constants
pub const GRAVITY: f64 = 0.4;
pub const FLAP_IMPULSE: f64 = -5.5;
pub const FLAP_COOLDOWN_TICKS: u32 = 10;

// Bird geometry
pub const BIRD_X: f64 = 100.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_START_Y: f64 = PLAYFIELD_HEIGHT / 2.0;

// Pipe constants
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_X: f64 = PLAYFIELD_WIDTH + 50.0;
pub const PIPE_SPAWN_THRESHOLD: f64 = PLAYFIELD_WIDTH - 200.0;
pub const PIPE_DESPAWN_X: f64 = -70.0;
pub const GAP_CENTER_MIN: f64 = 100.0;
pub const GAP_CENTER_MAX: f64 = 400.0;

// Persistence constants
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
