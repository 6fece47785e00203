pub mod ai;
pub mod collision;
pub mod input;
pub mod interference;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use interference::*;
pub use movement::*;
pub use scoring::*;

use crate::{Ball, Paddle, PaddleRole};
use hecs::World;

/// Copy of the (single) ball, if one exists
pub fn ball_snapshot(world: &World) -> Option<Ball> {
    let mut query = world.query::<&Ball>();
    let ball = query.iter().next().map(|(_e, ball)| *ball);
    ball
}

/// Copy of the paddle with the given role, if one exists
pub fn paddle_snapshot(world: &World, role: PaddleRole) -> Option<Paddle> {
    let mut query = world.query::<&Paddle>();
    let paddle = query
        .iter()
        .map(|(_e, paddle)| *paddle)
        .find(|paddle| paddle.role == role);
    paddle
}
