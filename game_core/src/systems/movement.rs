use crate::{Ball, Config, Paddle, PaddleIntent, RallyState, Side};
use hecs::World;

/// Move the ball by one frame of velocity.
///
/// Horizontal motion is unconditional. Vertical motion waits until the player
/// has moved and the ball has touched the right paddle in this rally. No
/// clamping: the boundary pass detects the ball leaving the playfield.
pub fn advance_ball(world: &mut World, rally: &RallyState) {
    let vertical = rally.has_moved && rally.paddle_contact;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x += ball.vel.x;
        if vertical {
            ball.pos.y += ball.vel.y;
        }
    }
}

/// Shift one paddle by `delta`, clamped to the playfield
pub fn move_paddle(world: &mut World, side: Side, delta: f32, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}

/// Snap pointer-driven paddles to their latest target
pub fn apply_pointer_intents(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if let Some(target) = intent.target_y.take() {
            paddle.y = config.clamp_paddle_y(target - config.paddle_height / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        *ball
    }

    #[test]
    fn test_ball_moves_horizontally_only_before_contact() {
        let config = Config::new();
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(350.0, 250.0), Vec2::new(2.0, -2.0), config.ball_radius);

        let rally = RallyState {
            has_moved: true,
            paddle_contact: false,
        };
        advance_ball(&mut world, &rally);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, Vec2::new(352.0, 250.0));
    }

    #[test]
    fn test_ball_moves_vertically_after_contact_and_input() {
        let config = Config::new();
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(350.0, 250.0), Vec2::new(-3.0, 1.5), config.ball_radius);

        let rally = RallyState {
            has_moved: true,
            paddle_contact: true,
        };
        advance_ball(&mut world, &rally);

        assert_eq!(ball_of(&world).pos, Vec2::new(347.0, 251.5));
    }

    #[test]
    fn test_ball_is_not_clamped() {
        let config = Config::new();
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(699.0, 250.0), Vec2::new(2.0, 0.0), config.ball_radius);

        advance_ball(&mut world, &RallyState::default());

        assert!(ball_of(&world).pos.x > config.playfield_width);
    }

    #[test]
    fn test_move_paddle_clamps() {
        let config = Config::new();
        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, 5.0);
        let right = create_paddle(&mut world, Side::Right, 440.0);

        move_paddle(&mut world, Side::Left, -20.0, &config);
        move_paddle(&mut world, Side::Right, 20.0, &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().y, 0.0);
        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 450.0);
    }

    #[test]
    fn test_pointer_intent_centers_paddle_and_is_consumed() {
        let config = Config::new();
        let mut world = World::new();
        let right = create_paddle(&mut world, Side::Right, 225.0);
        world
            .get::<&mut PaddleIntent>(right)
            .unwrap()
            .target_y = Some(100.0);

        apply_pointer_intents(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 75.0);
        assert!(world.get::<&PaddleIntent>(right).unwrap().target_y.is_none());
    }

    #[test]
    fn test_pointer_intent_is_clamped() {
        let config = Config::new();
        let mut world = World::new();
        let right = create_paddle(&mut world, Side::Right, 225.0);
        world
            .get::<&mut PaddleIntent>(right)
            .unwrap()
            .target_y = Some(495.0);

        apply_pointer_intents(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 450.0);
    }
}
