use crate::{Ball, Config, Events, RallyState, Score, Side};

/// Award a point to `scorer` and re-serve the ball from the center
pub fn score_point(
    ball: &mut Ball,
    scorer: Side,
    config: &Config,
    score: &mut Score,
    rally: &mut RallyState,
    events: &mut Events,
) {
    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    ball.reset(config.center(), config.reset_damping);
    rally.paddle_contact = false;

    log::debug!(
        "{:?} scored ({}:{}), serving at speed {:.2}",
        scorer,
        score.left,
        score.right,
        ball.vel.x.abs()
    );
}

/// Side that reached the winning score, if any
pub fn check_winner(score: &Score, config: &Config) -> Option<Side> {
    score.has_winner(config.win_score)
}
