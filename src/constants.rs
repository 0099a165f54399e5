// Board geometry, in logical units. The scene scales these to terminal cells.
pub const BOARD_WIDTH: f32 = 360.0;
pub const BOARD_HEIGHT: f32 = 640.0;
pub const GROUND_HEIGHT: f32 = 50.0;

// Bird
pub const BIRD_X: f32 = BOARD_WIDTH / 4.0;
pub const BIRD_WIDTH: f32 = 34.0;
pub const BIRD_HEIGHT: f32 = 24.0;
pub const GRAVITY: f32 = 0.5;
pub const JUMP_STRENGTH: f32 = -8.0;
pub const BIRD_FRAME_COUNT: usize = 3;

// Pipes
pub const PIPE_WIDTH: f32 = 64.0;
pub const PIPE_HEIGHT: f32 = 512.0;
pub const PIPE_GAP: f32 = 150.0;
pub const PIPE_SPEED: f32 = -4.0;

// Background scroll speeds
pub const CLOUD_SPEED: f32 = 0.2;
pub const GROUND_SPEED: f32 = -4.0;

// Particles
pub const BURST_SIZE: usize = 10;
pub const PARTICLE_FADE: f32 = 0.03;

// Scheduler cadences
pub const FRAME_INTERVAL_MS: u64 = 1000 / 60;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;
pub const BIRD_ANIM_INTERVAL_MS: u64 = 150;
pub const PARTICLE_INTERVAL_MS: u64 = 30;
