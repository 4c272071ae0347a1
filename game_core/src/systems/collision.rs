use crate::systems::score_point;
use crate::{Ball, Config, Events, OpponentSpeed, Paddle, RallyState, Score, Side};
use hecs::World;

/// Resolve walls, paddle hits and scoring for this frame.
///
/// Each check is guarded by the ball's direction of travel, so running the
/// pass twice without motion in between changes nothing. `opponent` is the
/// computer paddle's speed in single-player modes and `None` otherwise.
pub fn resolve_boundaries(
    world: &mut World,
    config: &Config,
    rally: &mut RallyState,
    opponent: Option<&mut OpponentSpeed>,
    score: &mut Score,
    events: &mut Events,
) {
    // Collect data first so no borrow is held while resolving
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };
    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return,
    };

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    let left = paddles.iter().find(|p| p.side == Side::Left).copied();
    let right = paddles.iter().find(|p| p.side == Side::Right).copied();

    bounce_walls(&mut ball, config, events);

    if let Some(paddle) = right {
        if ball.pos.x > config.playfield_width - config.paddle_reach {
            if paddle.spans(ball.pos.y, config.paddle_height) {
                if ball.vel.x > 0.0 {
                    hit_right_paddle(&mut ball, &paddle, config, rally, opponent, events);
                }
            } else if ball.pos.x > config.playfield_width {
                score_point(&mut ball, Side::Left, config, score, rally, events);
            }
        }
    }

    if let Some(paddle) = left {
        if ball.pos.x < config.paddle_reach {
            if paddle.spans(ball.pos.y, config.paddle_height) {
                if ball.vel.x < 0.0 {
                    hit_left_paddle(&mut ball, config, rally, events);
                }
            } else if ball.pos.x < 0.0 {
                score_point(&mut ball, Side::Right, config, score, rally, events);
            }
        }
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

fn bounce_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y > config.playfield_height && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
        log::trace!("ball bounced off the bottom wall at x={:.1}", ball.pos.x);
    }
    if ball.pos.y < 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
        log::trace!("ball bounced off the top wall at x={:.1}", ball.pos.x);
    }
}

/// Speed up (once input has been seen) and clamp to the cap.
/// Returns the new magnitude and whether the cap was exceeded.
fn hit_speed(current: f32, config: &Config, rally: &RallyState) -> (f32, bool) {
    let mut speed = current.abs();
    if rally.has_moved {
        speed += config.ball_hit_increment;
    }
    if speed > config.ball_speed_max {
        (config.ball_speed_max, true)
    } else {
        (speed, false)
    }
}

fn hit_right_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    rally: &mut RallyState,
    opponent: Option<&mut OpponentSpeed>,
    events: &mut Events,
) {
    rally.paddle_contact = true;

    let (speed, capped) = hit_speed(ball.vel.x, config, rally);
    if capped {
        if let Some(opponent) = opponent {
            if opponent.boost(config.opponent_boost) {
                events.opponent_boosted = true;
                log::debug!("ball reached max speed, computer speed now {}", opponent.speed);
            }
        }
    }
    ball.vel.x = -speed;

    // Deflection grows linearly with the distance from the paddle center
    let trajectory_y = ball.pos.y - paddle.center_y(config.paddle_height);
    ball.vel.y = trajectory_y * config.deflection_factor;

    events.paddle_hit = Some(Side::Right);
    log::trace!("right paddle hit: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
}

fn hit_left_paddle(ball: &mut Ball, config: &Config, rally: &RallyState, events: &mut Events) {
    let (speed, _) = hit_speed(ball.vel.x, config, rally);
    ball.vel.x = speed;

    events.paddle_hit = Some(Side::Left);
    log::trace!("left paddle hit: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
}
