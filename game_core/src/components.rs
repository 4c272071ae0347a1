use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Opponent paddle (computer or second player)
    Left,
    /// Player paddle
    Right,
}

/// Paddle component; `y` is the top edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Strict vertical overlap test used by the collision zones
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Ball component. `vel` is the displacement per frame (+x right, +y down).
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Re-serve from `center` toward the side that just conceded,
    /// with the horizontal speed damped
    pub fn reset(&mut self, center: Vec2, damping: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x / damping;
    }
}

/// Pointer intent for a paddle: the desired paddle center in playfield space
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub target_y: Option<f32>,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
