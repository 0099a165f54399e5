//! Core game simulation: session data, physics and collision, particles.

pub mod logic;
pub mod particles;
pub mod types;

pub use logic::{process_frame, process_input, GameEvent, GameInput};
pub use types::{Bird, GameSession, GameState, Particle, Pipe};
