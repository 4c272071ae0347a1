//! Frame driver
//!
//! One cooperative step per display refresh. The host owns scheduling: the
//! driver asks for another frame only while the session is running, so
//! pausing or finishing simply stops the loop.

use serde::Serialize;

use crate::{Score, Session, SessionPhase, Side};

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub paddle_left_x: f32,
    pub paddle_left_y: f32,
    pub paddle_right_x: f32,
    pub paddle_right_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub phase: SessionPhase,
    pub game_over: bool,
    pub winner: Option<Side>,
}

/// Host side of the frame loop (canvas, `requestAnimationFrame`, overlays)
pub trait FrameHost {
    fn render(&mut self, frame: &FrameSnapshot);

    /// Schedule the next call to [`animate`] on the next display refresh
    fn request_frame(&mut self);

    fn game_over(&mut self, winner: Side, score: Score);
}

/// What a call to [`animate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame ran and the next one was requested
    Scheduled,
    /// Session is paused; nothing ran
    Paused,
    /// Frame ran and ended the game
    Finished(Side),
    /// Session not started or already over; nothing ran
    Idle,
}

/// Run one frame: render, advance, resolve, move paddles, check for a winner
pub fn animate<H: FrameHost + ?Sized>(session: &mut Session, host: &mut H) -> FrameOutcome {
    match session.phase() {
        SessionPhase::Running => {}
        SessionPhase::Paused => return FrameOutcome::Paused,
        SessionPhase::NotStarted | SessionPhase::Over => return FrameOutcome::Idle,
    }

    host.render(&session.snapshot());
    session.step();

    if let Some(winner) = session.winner() {
        host.game_over(winner, session.score());
        return FrameOutcome::Finished(winner);
    }

    host.request_frame();
    FrameOutcome::Scheduled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    #[derive(Default)]
    struct RecordingHost {
        rendered: Vec<FrameSnapshot>,
        requested: usize,
        finished: Option<(Side, Score)>,
    }

    impl FrameHost for RecordingHost {
        fn render(&mut self, frame: &FrameSnapshot) {
            self.rendered.push(frame.clone());
        }

        fn request_frame(&mut self) {
            self.requested += 1;
        }

        fn game_over(&mut self, winner: Side, score: Score) {
            self.finished = Some((winner, score));
        }
    }

    #[test]
    fn test_not_started_session_is_idle() {
        let mut session = Session::default();
        let mut host = RecordingHost::default();

        assert_eq!(animate(&mut session, &mut host), FrameOutcome::Idle);
        assert!(host.rendered.is_empty());
        assert_eq!(host.requested, 0);
    }

    #[test]
    fn test_running_frame_renders_before_stepping() {
        let mut session = Session::default();
        session.start();
        let before = session.snapshot();
        let mut host = RecordingHost::default();

        assert_eq!(animate(&mut session, &mut host), FrameOutcome::Scheduled);
        assert_eq!(host.rendered, vec![before]);
        assert_eq!(host.requested, 1);
        assert_ne!(session.snapshot().ball_x, host.rendered[0].ball_x);
    }

    #[test]
    fn test_paused_session_does_nothing() {
        let mut session = Session::default();
        session.start();
        session.toggle_pause();
        let before = session.snapshot();
        let mut host = RecordingHost::default();

        assert_eq!(animate(&mut session, &mut host), FrameOutcome::Paused);
        assert!(host.rendered.is_empty());
        assert_eq!(host.requested, 0);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_loop_stops_on_game_over() {
        let mut session = Session::default();
        session.reset(GameMode::mouse());
        session.start();
        // Park the player paddle at the top so the returned ball gets past it
        session.pointer_moved(30.0);
        let mut host = RecordingHost::default();

        let mut outcome = FrameOutcome::Scheduled;
        let mut frames = 0;
        while outcome == FrameOutcome::Scheduled && frames < 10_000 {
            outcome = animate(&mut session, &mut host);
            frames += 1;
        }

        let FrameOutcome::Finished(winner) = outcome else {
            panic!("game never finished: {:?}", outcome);
        };
        let (host_winner, score) = host.finished.unwrap();
        assert_eq!(winner, host_winner);
        assert_eq!(score.get(winner), session.config().win_score);
        assert_eq!(host.requested, frames - 1);
        assert_eq!(animate(&mut session, &mut host), FrameOutcome::Idle);
    }
}
