//! Collision burst particles.
//!
//! A burst is spawned at the moment of impact and fades out on its own 30ms
//! cadence, independent of the physics frame and in every session state.

use rand::Rng;

use super::types::{GameSession, Particle};
use crate::constants::BURST_SIZE;

/// Push one burst of particles around (x, y), each with independent jitter
/// and size.
pub fn spawn_burst<R: Rng>(session: &mut GameSession, rng: &mut R, x: f32, y: f32) {
    for _ in 0..BURST_SIZE {
        let jx = rng.gen_range(-10..10) as f32;
        let jy = rng.gen_range(-10..10) as f32;
        let size = rng.gen_range(2..6) as f32;
        session.particles.push(Particle::new(x + jx, y + jy, size));
    }
}

/// Advance every particle one decay step, dropping the ones that faded out.
pub fn update_particles(session: &mut GameSession) {
    session.particles.retain_mut(|particle| particle.update());
}
