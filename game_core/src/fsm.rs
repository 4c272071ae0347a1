//! Session state machine
//!
//! `NotStarted -> Running -> {Paused <-> Running} -> Over`, with `Reset`
//! returning any phase to `NotStarted`.

use serde::Serialize;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
    Over,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    GameOver,
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: SessionPhase,
    pub to: SessionPhase,
    pub action: SessionAction,
}

#[derive(Debug, Clone)]
pub struct SessionFsm {
    phase: SessionPhase,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::NotStarted,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the phase unchanged
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: SessionAction) -> Option<SessionPhase> {
        match (self.phase, action) {
            (_, SessionAction::Reset) => Some(SessionPhase::NotStarted),

            (SessionPhase::NotStarted, SessionAction::Start) => Some(SessionPhase::Running),

            (SessionPhase::Running, SessionAction::Pause) => Some(SessionPhase::Paused),
            (SessionPhase::Running, SessionAction::GameOver) => Some(SessionPhase::Over),

            (SessionPhase::Paused, SessionAction::Resume) => Some(SessionPhase::Running),

            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
