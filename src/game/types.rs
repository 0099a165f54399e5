//! Flappy Bird core data structures.
//!
//! All coordinates are in logical board units (360x640); the terminal scene
//! scales them to cells at draw time.

use rand::Rng;

use crate::constants::*;

/// Top-level session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Running,
    GameOver,
}

/// Axis-aligned float rectangle used for collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectf {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rectf {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that merely touch do not intersect.
    pub fn intersects(&self, other: &Rectf) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// The player's bird. X is fixed; only the vertical axis simulates.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the top edge. Clamped to >= 0 every frame.
    pub y: f32,
    /// Vertical velocity, positive = downward.
    pub velocity: f32,
    /// Visual tilt in degrees, recomputed from velocity each frame.
    pub angle: f32,
    /// Wing-flap animation frame (cosmetic, cycles 0..BIRD_FRAME_COUNT).
    pub frame: usize,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BOARD_HEIGHT / 2.0,
            velocity: 0.0,
            angle: 0.0,
            frame: 0,
        }
    }

    pub fn rect(&self) -> Rectf {
        Rectf::new(BIRD_X, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: a top pipe hanging from above and a bottom pipe below the gap.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge, decreasing every frame.
    pub x: f32,
    /// Vertical offset of the top pipe. Always negative at spawn, so the top
    /// pipe's upper part hangs above the screen.
    pub y: f32,
    /// Set once when this pipe has awarded its score point. Never cleared.
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            passed: false,
        }
    }

    pub fn top_rect(&self) -> Rectf {
        Rectf::new(self.x, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn bottom_rect(&self) -> Rectf {
        Rectf::new(
            self.x,
            self.y + PIPE_HEIGHT + PIPE_GAP,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        )
    }

    /// Fully past the left edge of the board.
    pub fn off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

/// One collision-burst particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Starts at 1.0 and fades linearly to 0.
    pub alpha: f32,
    pub size: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            alpha: 1.0,
            size,
        }
    }

    /// Drift down and fade one step. Returns false once fully transparent.
    pub fn update(&mut self) -> bool {
        self.y += 1.0;
        self.alpha -= PARTICLE_FADE;
        if self.alpha < 0.0 {
            self.alpha = 0.0;
        }
        self.alpha > 0.0
    }
}

/// The whole mutable game world. One instance lives for the process lifetime;
/// all periodic actions mutate it through the single-threaded scheduler loop.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first.
    pub pipes: Vec<Pipe>,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Best score this process. Never reset by a restart.
    pub high_score: u32,
    /// Cloud layer scroll position, wraps at the board width.
    pub cloud_offset: f32,
    /// Ground band scroll position, wraps at the negative board width.
    pub ground_offset: f32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
            bird: Bird::new(),
            pipes: Vec::new(),
            particles: Vec::new(),
            score: 0,
            high_score: 0,
            cloud_offset: 0.0,
            ground_offset: 0.0,
        }
    }

    /// Spawn one pipe at the right edge with a random vertical offset.
    ///
    /// Runs on its own cadence. No-op unless the game is running; missed
    /// spawns are never queued.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        if self.state != GameState::Running {
            return;
        }
        let y = -(rng.gen_range(0..200) as f32) - 100.0;
        self.pipes.push(Pipe::new(BOARD_WIDTH, y));
    }

    /// Restart after a game over. High score and scroll offsets survive.
    pub fn restart(&mut self) {
        self.bird.y = BOARD_HEIGHT / 2.0;
        self.bird.velocity = 0.0;
        self.pipes.clear();
        self.particles.clear();
        self.score = 0;
        self.state = GameState::Running;
    }

    /// Advance the cosmetic wing-flap frame.
    pub fn advance_bird_frame(&mut self) {
        self.bird.frame = (self.bird.frame + 1) % BIRD_FRAME_COUNT;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
