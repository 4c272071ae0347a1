use crate::systems::move_paddle;
use crate::{Ball, Config, KeyBindings, OpponentSpeed, Paddle, RallyState, Side};
use hecs::World;

/// Step the computer (left) paddle toward the ball.
///
/// Pure tracking with a fixed step: no prediction and no deadband, so the
/// paddle may jitter around the ball. Idle until the player has moved.
pub fn computer_ai(world: &mut World, config: &Config, rally: &RallyState, speed: &OpponentSpeed) {
    if !rally.has_moved {
        return;
    }

    let ball_y = world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.y);
    let paddle_y = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == Side::Left)
        .map(|(_e, p)| p.y);

    if let (Some(ball_y), Some(paddle_y)) = (ball_y, paddle_y) {
        let delta = if paddle_y + config.paddle_height / 2.0 < ball_y {
            speed.speed
        } else {
            -speed.speed
        };
        move_paddle(world, Side::Left, delta, config);
    }
}

/// Run the action of every held key once
pub fn apply_held_keys(world: &mut World, config: &Config, keys: &KeyBindings) {
    for action in keys.held_actions() {
        move_paddle(world, action.side, action.dir.sign() * config.key_step, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameMode, Key};
    use glam::Vec2;

    fn left_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Left)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_ai_waits_for_player_input() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 225.0);
        create_ball(&mut world, Vec2::new(350.0, 400.0), Vec2::ZERO, config.ball_radius);

        computer_ai(&mut world, &config, &RallyState::default(), &OpponentSpeed::new(3.0));

        assert_eq!(left_y(&world), 225.0);
    }

    #[test]
    fn test_ai_tracks_ball_down_and_up() {
        let config = Config::new();
        let rally = RallyState {
            has_moved: true,
            paddle_contact: false,
        };
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 225.0);
        let ball = create_ball(&mut world, Vec2::new(350.0, 400.0), Vec2::ZERO, config.ball_radius);

        computer_ai(&mut world, &config, &rally, &OpponentSpeed::new(3.0));
        assert_eq!(left_y(&world), 228.0);

        world.get::<&mut Ball>(ball).unwrap().pos.y = 10.0;
        computer_ai(&mut world, &config, &rally, &OpponentSpeed::new(3.0));
        assert_eq!(left_y(&world), 225.0);
    }

    #[test]
    fn test_ai_moves_up_when_centered() {
        let config = Config::new();
        let rally = RallyState {
            has_moved: true,
            paddle_contact: false,
        };
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 225.0);
        create_ball(&mut world, Vec2::new(350.0, 250.0), Vec2::ZERO, config.ball_radius);

        computer_ai(&mut world, &config, &rally, &OpponentSpeed::new(3.0));

        assert_eq!(left_y(&world), 222.0, "No deadband: equal centers move up");
    }

    #[test]
    fn test_ai_paddle_is_clamped() {
        let config = Config::new();
        let rally = RallyState {
            has_moved: true,
            paddle_contact: false,
        };
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 1.0);
        create_ball(&mut world, Vec2::new(350.0, -20.0), Vec2::ZERO, config.ball_radius);

        computer_ai(&mut world, &config, &rally, &OpponentSpeed::new(6.0));

        assert_eq!(left_y(&world), 0.0);
    }

    #[test]
    fn test_held_keys_move_their_paddles() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 100.0);
        create_paddle(&mut world, Side::Right, 100.0);
        let mut keys = KeyBindings::for_mode(GameMode::multiplayer());
        keys.set_held(Key::S, true);

        apply_held_keys(&mut world, &config, &keys);
        apply_held_keys(&mut world, &config, &keys);

        assert_eq!(left_y(&world), 100.0 + 2.0 * config.key_step);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 100.0);
        let mut keys = KeyBindings::for_mode(GameMode::multiplayer());
        keys.set_held(Key::W, true);
        keys.set_held(Key::S, true);

        apply_held_keys(&mut world, &config, &keys);

        assert_eq!(left_y(&world), 100.0);
    }
}
