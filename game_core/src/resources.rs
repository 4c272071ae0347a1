use serde::Serialize;

use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub left: u8,  // Opponent score
    pub right: u8, // Player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Rally flags that gate ball and opponent movement
#[derive(Debug, Clone, Copy, Default)]
pub struct RallyState {
    /// Set on the first pointer or key input of the session
    pub has_moved: bool,
    /// Set when the ball touches the right paddle; cleared on every serve
    pub paddle_contact: bool,
}

/// Per-frame movement step of the computer paddle
#[derive(Debug, Clone, Copy)]
pub struct OpponentSpeed {
    pub speed: f32,
    pub boosted: bool,
}

impl OpponentSpeed {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            boosted: false,
        }
    }

    /// Raise the speed by `boost`; only the first call has an effect.
    /// Returns whether the boost was applied.
    pub fn boost(&mut self, boost: f32) -> bool {
        if self.boosted {
            return false;
        }
        self.speed += boost;
        self.boosted = true;
        true
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub paddle_hit: Option<Side>,
    pub wall_bounce: bool,
    pub opponent_boosted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
