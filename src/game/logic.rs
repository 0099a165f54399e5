//! Physics, collision, scoring, and the input state machine.

use rand::Rng;

use super::particles::spawn_burst;
use super::types::{GameSession, GameState};
use crate::constants::*;

/// Key-level inputs delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Enter: start the game from the menu.
    Confirm,
    /// Space: jump while running, restart after a game over.
    Flap,
}

/// Observable side effects of an input or frame, mapped onto the sound
/// boundary by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Score,
    Crash,
}

/// Drive the state machine with one input. Unhandled (state, input)
/// combinations are no-ops.
pub fn process_input(session: &mut GameSession, input: GameInput) -> Option<GameEvent> {
    match (session.state, input) {
        (GameState::Menu, GameInput::Confirm) => {
            session.state = GameState::Running;
            None
        }
        (GameState::Running, GameInput::Flap) => {
            session.bird.velocity = JUMP_STRENGTH;
            Some(GameEvent::Flap)
        }
        (GameState::GameOver, GameInput::Flap) => {
            session.restart();
            None
        }
        _ => None,
    }
}

/// One fixed-timestep physics frame. No-op unless the game is running.
///
/// A game-over transition does not cut the frame short: scrolling and pipe
/// movement still finish the tick, and a second collision in the same frame
/// re-reports the crash. The extra burst and sound match the transition being
/// idempotent.
pub fn process_frame<R: Rng>(session: &mut GameSession, rng: &mut R) -> Vec<GameEvent> {
    if session.state != GameState::Running {
        return Vec::new();
    }
    let mut events = Vec::new();

    // Integrate vertical motion.
    session.bird.velocity += GRAVITY;
    session.bird.y += session.bird.velocity;

    // Tilt follows velocity, capped at 45 degrees nose-down. While ascending
    // the angle is a hard -25 degree override, not a continuous function.
    session.bird.angle = (session.bird.velocity * 3.0).min(45.0);
    if session.bird.velocity < 0.0 {
        session.bird.angle = -25.0;
    }

    // The bird cannot leave through the top of the board.
    if session.bird.y < 0.0 {
        session.bird.y = 0.0;
    }

    // Ground collision.
    if session.bird.y + BIRD_HEIGHT >= BOARD_HEIGHT - GROUND_HEIGHT {
        crash(session, rng, &mut events);
    }

    // Scroll the background layers, wrapping for a seamless loop.
    session.cloud_offset += CLOUD_SPEED;
    if session.cloud_offset > BOARD_WIDTH {
        session.cloud_offset = 0.0;
    }
    session.ground_offset += GROUND_SPEED;
    if session.ground_offset <= -BOARD_WIDTH {
        session.ground_offset = 0.0;
    }

    // Pipes advance first; scoring and collision use the post-move positions.
    for pipe in &mut session.pipes {
        pipe.x += PIPE_SPEED;
    }

    let bird_rect = session.bird.rect();
    let mut hits = 0;
    for pipe in &mut session.pipes {
        if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
            pipe.passed = true;
            session.score += 1;
            events.push(GameEvent::Score);
        }
        if bird_rect.intersects(&pipe.top_rect()) || bird_rect.intersects(&pipe.bottom_rect()) {
            hits += 1;
        }
    }
    for _ in 0..hits {
        crash(session, rng, &mut events);
    }

    session.pipes.retain(|pipe| !pipe.off_screen());

    if session.score > session.high_score {
        session.high_score = session.score;
    }

    events
}

fn crash<R: Rng>(session: &mut GameSession, rng: &mut R, events: &mut Vec<GameEvent>) {
    session.state = GameState::GameOver;
    let center_y = session.bird.y + BIRD_HEIGHT / 2.0;
    spawn_burst(session, rng, BIRD_X, center_y);
    events.push(GameEvent::Crash);
}
