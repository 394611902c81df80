//! Axis-aligned rectangle overlap, independent of any rendering primitive.

use crate::constants::*;
use crate::game::types::{Bird, Pipe};

/// An axis-aligned rectangle in playfield units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open AABB overlap test: rectangles that merely share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// The bird's visual bounding box, centered on its position.
pub fn bird_rect(bird: &Bird) -> Rect {
    Rect::new(
        BIRD_X - BIRD_WIDTH / 2.0,
        bird.y - BIRD_HEIGHT / 2.0,
        BIRD_WIDTH,
        BIRD_HEIGHT,
    )
}

/// Top segment: playfield top down to the gap's upper edge.
pub fn top_segment(pipe: &Pipe) -> Rect {
    let bottom = pipe.gap_center - PIPE_GAP / 2.0;
    Rect::new(pipe.x, 0.0, PIPE_WIDTH, bottom)
}

/// Bottom segment: the gap's lower edge down to the playfield bottom.
pub fn bottom_segment(pipe: &Pipe) -> Rect {
    let top = pipe.gap_center + PIPE_GAP / 2.0;
    Rect::new(pipe.x, top, PIPE_WIDTH, PLAYFIELD_HEIGHT - top)
}
