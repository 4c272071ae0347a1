//! Frame-driven Pong simulation.
//!
//! A [`Session`] owns the ball and both paddles (as entities in a
//! `hecs::World`), the score and the rally flags. The host calls
//! [`driver::animate`] once per display refresh; input handlers only write
//! key-held state or a pointer target through the session.

pub mod components;
pub mod config;
pub mod driver;
pub mod fsm;
pub mod input;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
