//! Per-tick simulation logic: flap handling, gravity integration, pipe
//! lifecycle, collision detection, and scoring.
//!
//! Everything here is pure over [`World`] plus an injected RNG, so tests can
//! drive deterministic runs with a seeded source.

use crate::constants::*;
use crate::game::geometry::{bird_rect, bottom_segment, top_segment};
use crate::game::types::{AudioCue, Pipe, World};
use rand::Rng;

/// Result of one Playing tick.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// The bird hit a pipe segment or left the playfield this tick.
    pub collided: bool,
    /// Audio cues raised this tick, in order.
    pub cues: Vec<AudioCue>,
}

/// Advance the simulation by one tick.
///
/// Stage order: flap input → cooldown → integration → spawn → advance →
/// collision → scoring → prune. On collision the tick short-circuits before
/// scoring; the caller transitions to game over.
pub fn tick<R: Rng>(world: &mut World, flap_held: bool, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Level-triggered flap: a held input re-fires whenever the cooldown has
    // run out. The tick a flap fires does not also decrement the cooldown,
    // so it reads exactly FLAP_COOLDOWN_TICKS immediately after.
    if flap_held && world.flap_cooldown == 0 {
        world.bird.velocity = FLAP_IMPULSE;
        world.flap_cooldown = FLAP_COOLDOWN_TICKS;
        outcome.cues.push(AudioCue::Flap);
    } else if world.flap_cooldown > 0 {
        world.flap_cooldown -= 1;
    }

    integrate(world);
    maybe_spawn(world, rng);
    advance_pipes(world);

    if check_collision(world) {
        outcome.collided = true;
        outcome.cues.push(AudioCue::Hit);
        return outcome;
    }

    let scored = score_passed_pipes(world);
    for _ in 0..scored {
        outcome.cues.push(AudioCue::Point);
    }

    prune_pipes(world);
    outcome
}

/// Apply gravity and move the bird. Position is never clamped; leaving the
/// playfield is caught by [`check_collision`].
pub fn integrate(world: &mut World) {
    world.bird.velocity += GRAVITY;
    world.bird.y += world.bird.velocity;
}

/// Spawn one pipe when the stream has room: the collection is empty, or the
/// newest pipe has scrolled left of the spawn threshold. Consecutive spawn
/// spacing is therefore constant.
pub fn maybe_spawn<R: Rng>(world: &mut World, rng: &mut R) {
    let needs_pipe = match world.pipes.last() {
        None => true,
        Some(last) => last.x < PIPE_SPAWN_THRESHOLD,
    };
    if needs_pipe {
        world.pipes.push(Pipe::spawn(rng));
    }
}

/// Scroll every pipe left by the fixed speed.
pub fn advance_pipes(world: &mut World) {
    for pipe in &mut world.pipes {
        pipe.x -= PIPE_SPEED;
    }
}

/// Drop pipes that have scrolled fully off the left edge, preserving order.
pub fn prune_pipes(world: &mut World) {
    world.pipes.retain(|p| p.x >= PIPE_DESPAWN_X);
}

/// True if the bird's box overlaps any pipe segment, or its center has left
/// the playfield. The boundary check is deliberately center-based while the
/// pipe check uses the full box.
pub fn check_collision(world: &World) -> bool {
    if world.bird.y <= 0.0 || world.bird.y >= PLAYFIELD_HEIGHT {
        return true;
    }

    let bird = bird_rect(&world.bird);
    world.pipes.iter().any(|pipe| {
        bird.intersects(&top_segment(pipe)) || bird.intersects(&bottom_segment(pipe))
    })
}

/// Award one point for every pipe whose right edge has passed the bird and
/// that has not been counted yet. Returns the number of points awarded.
pub fn score_passed_pipes(world: &mut World) -> u32 {
    let mut scored = 0;
    for pipe in &mut world.pipes {
        if !pipe.passed && pipe.right() < BIRD_X {
            pipe.passed = true;
            world.score += 1;
            scored += 1;
        }
    }
    scored
}
