//! Integration test: full session flow
//!
//! Drives the session the way the binary's scheduler does: physics frames,
//! spawner cadence, and particle decay invoked one after another on a single
//! thread, with a seeded RNG so every run is reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyward::constants::{
    BIRD_HEIGHT, BIRD_X, BOARD_HEIGHT, BOARD_WIDTH, BURST_SIZE, GROUND_HEIGHT, PIPE_WIDTH,
};
use skyward::game::logic::{process_frame, process_input, GameEvent, GameInput};
use skyward::game::particles::update_particles;
use skyward::game::types::{GameSession, GameState, Pipe};

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// A session already past the menu, as if the player pressed Enter.
fn running_session() -> GameSession {
    let mut session = GameSession::new();
    process_input(&mut session, GameInput::Confirm);
    assert_eq!(session.state, GameState::Running);
    session
}

// =============================================================================
// Menu and input gating
// =============================================================================

#[test]
fn test_menu_only_reacts_to_confirm() {
    let mut session = GameSession::new();

    assert_eq!(process_input(&mut session, GameInput::Flap), None);
    assert_eq!(session.state, GameState::Menu);
    assert_eq!(session.bird.velocity, 0.0);

    assert_eq!(process_input(&mut session, GameInput::Confirm), None);
    assert_eq!(session.state, GameState::Running);
}

// =============================================================================
// Free-fall trajectory (spawner never fires, no obstacles)
// =============================================================================

#[test]
fn test_free_fall_trajectory_is_exact_until_ground_hit() {
    let mut session = running_session();
    let mut rng = seeded_rng();
    let start_y = BOARD_HEIGHT / 2.0;

    // y after n frames is start + 0.25 * n * (n + 1); every value is a
    // multiple of 0.25, so f32 arithmetic is exact here.
    for n in 1u32..=30 {
        let events = process_frame(&mut session, &mut rng);
        assert!(events.is_empty(), "no collision expected at frame {}", n);
        assert_eq!(session.state, GameState::Running);
        assert_eq!(session.bird.velocity, 0.5 * n as f32);
        assert_eq!(session.bird.y, start_y + 0.25 * (n * (n + 1)) as f32);
    }

    // Frame 31: y = 320 + 0.25 * 992 = 568, bottom edge 592 >= 590.
    let events = process_frame(&mut session, &mut rng);
    assert_eq!(events, vec![GameEvent::Crash]);
    assert_eq!(session.state, GameState::GameOver);
    assert_eq!(session.bird.y, 568.0);
    assert_eq!(session.bird.velocity, 15.5);
    assert!(session.bird.y + BIRD_HEIGHT >= BOARD_HEIGHT - GROUND_HEIGHT);
    assert_eq!(session.particles.len(), BURST_SIZE);
}

#[test]
fn test_flap_interrupts_the_fall() {
    let mut session = running_session();
    let mut rng = seeded_rng();

    for _ in 0..10 {
        process_frame(&mut session, &mut rng);
    }
    let event = process_input(&mut session, GameInput::Flap);
    assert_eq!(event, Some(GameEvent::Flap));
    assert_eq!(session.bird.velocity, -8.0);

    // Next frame the bird climbs: gravity brings velocity to -7.5.
    let y_before = session.bird.y;
    process_frame(&mut session, &mut rng);
    assert_eq!(session.bird.velocity, -7.5);
    assert_eq!(session.bird.y, y_before - 7.5);
    assert_eq!(session.bird.angle, -25.0);
}

// =============================================================================
// Pipes: spawning, scoring, lifecycle
// =============================================================================

#[test]
fn test_spawner_is_deterministic_for_a_fixed_seed() {
    let mut first = running_session();
    let mut second = running_session();
    let mut rng_a = seeded_rng();
    let mut rng_b = seeded_rng();

    for _ in 0..8 {
        first.spawn_pipe(&mut rng_a);
        second.spawn_pipe(&mut rng_b);
    }

    assert_eq!(first.pipes.len(), 8);
    for (a, b) in first.pipes.iter().zip(&second.pipes) {
        assert_eq!(a.x, BOARD_WIDTH);
        assert_eq!(a.y, b.y);
        assert!(a.y <= -100.0 && a.y >= -299.0);
    }
}

#[test]
fn test_pipe_scores_once_then_scrolls_off() {
    let mut session = running_session();
    let mut rng = seeded_rng();
    // Right edge one move away from passing the bird; the offset keeps both
    // collision rects away from the bird's row while it falls.
    session.pipes.push(Pipe::new(BIRD_X - PIPE_WIDTH + 3.0, -250.0));

    let events = process_frame(&mut session, &mut rng);
    assert_eq!(events, vec![GameEvent::Score]);
    assert_eq!(session.score, 1);
    assert_eq!(session.high_score, 1);

    // Keep ticking until the pipe leaves the board; the score stays at 1 and
    // the pipe disappears from the sequence.
    for _ in 0..25 {
        if session.pipes.is_empty() {
            break;
        }
        process_frame(&mut session, &mut rng);
    }
    assert!(session.pipes.is_empty());
    assert_eq!(session.score, 1);
    assert_eq!(session.state, GameState::Running, "nothing ever collided");
}

#[test]
fn test_two_pipe_collision_reports_both_crashes() {
    let mut session = running_session();
    let mut rng = seeded_rng();
    // Both pipes cover the bird's column with the gap far above it.
    session.pipes.push(Pipe::new(BIRD_X, -512.0));
    session.pipes.push(Pipe::new(BIRD_X + 2.0, -512.0));

    let events = process_frame(&mut session, &mut rng);
    let crashes = events
        .iter()
        .filter(|event| **event == GameEvent::Crash)
        .count();
    assert_eq!(crashes, 2);
    assert_eq!(session.particles.len(), 2 * BURST_SIZE);
    assert_eq!(session.state, GameState::GameOver);
}

// =============================================================================
// Restart and high score
// =============================================================================

#[test]
fn test_restart_preserves_high_score_across_history() {
    let mut session = running_session();
    let mut rng = seeded_rng();

    // Score 7 pipes in one frame: all right edges cross the bird at once.
    for i in 0..7 {
        session
            .pipes
            .push(Pipe::new(BIRD_X - PIPE_WIDTH + 3.0 - i as f32, -250.0));
    }
    process_frame(&mut session, &mut rng);
    assert_eq!(session.score, 7);
    assert_eq!(session.high_score, 7);

    // Fall to the ground, then restart.
    while session.state == GameState::Running {
        process_frame(&mut session, &mut rng);
    }
    process_input(&mut session, GameInput::Flap);

    assert_eq!(session.state, GameState::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.high_score, 7);
    assert_eq!(session.bird.y, BOARD_HEIGHT / 2.0);
    assert_eq!(session.bird.velocity, 0.0);
    assert!(session.pipes.is_empty());
    assert!(session.particles.is_empty());

    // A second crash-and-restart behaves identically.
    while session.state == GameState::Running {
        process_frame(&mut session, &mut rng);
    }
    process_input(&mut session, GameInput::Flap);
    assert_eq!(session.score, 0);
    assert_eq!(session.high_score, 7);
}

// =============================================================================
// Particle decay cadence
// =============================================================================

#[test]
fn test_crash_burst_fades_out_after_34_decay_ticks() {
    let mut session = running_session();
    let mut rng = seeded_rng();
    session.bird.y = BOARD_HEIGHT - GROUND_HEIGHT - BIRD_HEIGHT;
    process_frame(&mut session, &mut rng);
    assert_eq!(session.particles.len(), BURST_SIZE);

    // Decay runs on its own cadence, also after the game over.
    for tick in 1..=33 {
        update_particles(&mut session);
        assert_eq!(
            session.particles.len(),
            BURST_SIZE,
            "all particles still visible at decay tick {}",
            tick
        );
    }
    update_particles(&mut session);
    assert!(session.particles.is_empty());
}
