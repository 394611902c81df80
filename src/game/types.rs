//! Core simulation data structures.
//!
//! All coordinates are in playfield units (400×600, y grows downward); the
//! renderer scales them to terminal cells and never feeds anything back.

use crate::constants::*;
use rand::Rng;

/// The player-controlled actor. Horizontal position is fixed at [`BIRD_X`];
/// only the vertical axis is simulated.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the bird's center (float for smooth physics).
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A single pipe obstacle: a top and bottom segment sharing an x-coordinate,
/// with a fixed-height gap between them.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge of both segments (float for smooth scrolling).
    pub x: f64,
    /// Vertical center of the gap.
    pub gap_center: f64,
    /// Whether the bird has cleared this pipe (guards single-counting of score).
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe just off the right edge with a random gap placement.
    /// Gap placement is the only source of randomness in the simulation.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: PIPE_SPAWN_X,
            gap_center: rng.gen_range(GAP_CENTER_MIN..=GAP_CENTER_MAX),
            passed: false,
        }
    }

    /// Right edge of both segments.
    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }
}

/// Fire-and-forget audio cues emitted by the simulation. The binary maps
/// these to the terminal bell; the core never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Flap,
    Point,
    Hit,
}

/// The complete per-run simulation state. Owned by the session and mutated
/// only from within the tick handler.
#[derive(Debug, Clone)]
pub struct World {
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first.
    pub pipes: Vec<Pipe>,
    /// Pipes cleared this run.
    pub score: u32,
    /// Ticks remaining until the next flap is allowed.
    pub flap_cooldown: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            flap_cooldown: 0,
        }
    }

    /// Reset to run-start state: bird recentered, pipes cleared, score zeroed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
