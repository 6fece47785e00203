use crate::{Arena, Ball, Events, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.move_dir(intent.dir, arena);
        }
    }
}

/// Move ball based on velocity, bouncing off the top and bottom
pub fn move_ball(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(arena) {
            events.ball_hit_wall = true;
        }
    }
}
