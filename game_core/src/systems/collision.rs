use log::debug;

use crate::{Ball, Config, Events, Paddle, PaddleRole, Rect};
use hecs::World;

/// Which paddle, if any, the ball bounced off this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Interference,
    Paddle(PaddleRole),
}

/// Bounce the ball off whatever it overlaps.
///
/// The interference paddle is tested first and only while active; if it is
/// hit, the main paddles are not checked this tick. A hit reverses the
/// horizontal direction and speeds the ball up. The ball is not pushed out of
/// the paddle, so a very fast ball can tunnel through.
pub fn check_collisions(
    world: &mut World,
    interference_active: bool,
    config: &Config,
    events: &mut Events,
) -> Option<Hit> {
    // Collect paddle rects without holding borrows
    let paddles: Vec<(PaddleRole, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.role, p.rect))
        .collect();

    let mut hit = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        hit = find_hit(&ball.rect, &paddles, interference_active);
        if let Some(hit) = hit {
            bounce(ball, config);
            match hit {
                Hit::Interference => events.ball_hit_interference = true,
                Hit::Paddle(_) => events.ball_hit_paddle = true,
            }
            debug!("Ball hit {:?}, rally {}", hit, ball.rally_count);
        }
    }
    hit
}

fn find_hit(ball: &Rect, paddles: &[(PaddleRole, Rect)], interference_active: bool) -> Option<Hit> {
    let overlaps = |role: PaddleRole| {
        paddles
            .iter()
            .any(|(r, rect)| *r == role && rect.intersects(ball))
    };

    if interference_active && overlaps(PaddleRole::Interference) {
        Some(Hit::Interference)
    } else if overlaps(PaddleRole::Player) {
        Some(Hit::Paddle(PaddleRole::Player))
    } else if overlaps(PaddleRole::Opponent) {
        Some(Hit::Paddle(PaddleRole::Opponent))
    } else {
        None
    }
}

fn bounce(ball: &mut Ball, config: &Config) {
    ball.vel.x = -ball.vel.x;
    ball.increase_speed(config.ball_speed_step, config.ball_speed_bonus_max);
}
