use rand::Rng;

use crate::{Ball, Config, Paddle, PaddleIntent, PaddleRole};
use hecs::World;

/// Reactive AI: chase the ball's vertical centre, but with probability
/// `mistake_chance` go the wrong way this tick.
///
/// Exactly one uniform draw is taken per call so the RNG stream stays in
/// lock-step regardless of the outcome.
pub fn ai_dir<R: Rng + ?Sized>(
    paddle: &Paddle,
    ball: &Ball,
    mistake_chance: f64,
    rng: &mut R,
) -> i8 {
    let roll: f64 = rng.gen();
    let dir = paddle.dir_toward(ball.rect.center_y());
    if roll < mistake_chance {
        -dir
    } else {
        dir
    }
}

/// Set the opponent paddle's intent for this tick
pub fn drive_opponent<R: Rng + ?Sized>(
    world: &mut World,
    ball: &Ball,
    config: &Config,
    rng: &mut R,
) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.role == PaddleRole::Opponent {
            intent.dir = ai_dir(paddle, ball, config.ai_mistake_chance, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use glam::Vec2;
    use rand::rngs::mock::StepRng;

    fn opponent() -> Paddle {
        // centre at y = 300
        Paddle::new(PaddleRole::Opponent, Rect::new(740.0, 250.0, 10.0, 100.0), 5.0)
    }

    fn ball_at(y: f32) -> Ball {
        Ball::new(Vec2::new(400.0, y), 30.0, 5.0)
    }

    // Draws 0.0 forever: always below the mistake threshold
    fn always_mistaken() -> StepRng {
        StepRng::new(0, 0)
    }

    // Draws just under 1.0 forever: never a mistake
    fn never_mistaken() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_ai_pursues_ball() {
        let mut rng = never_mistaken();
        assert_eq!(ai_dir(&opponent(), &ball_at(100.0), 0.1, &mut rng), -1);
        assert_eq!(ai_dir(&opponent(), &ball_at(500.0), 0.1, &mut rng), 1);
    }

    #[test]
    fn test_ai_mistake_inverts_direction() {
        let mut rng = always_mistaken();
        assert_eq!(ai_dir(&opponent(), &ball_at(100.0), 0.1, &mut rng), 1);
        assert_eq!(ai_dir(&opponent(), &ball_at(500.0), 0.1, &mut rng), -1);
    }

    #[test]
    fn test_ai_holds_when_aligned() {
        let mut rng = always_mistaken();
        assert_eq!(ai_dir(&opponent(), &ball_at(300.0), 0.1, &mut rng), 0);
    }

    #[test]
    fn test_ai_mistake_rate_is_roughly_ten_percent() {
        use crate::GameRng;
        let mut rng = GameRng::new(7);
        let mistakes = (0..10_000)
            .filter(|_| ai_dir(&opponent(), &ball_at(100.0), 0.1, &mut rng) == 1)
            .count();
        assert!((800..1200).contains(&mistakes), "{mistakes} mistakes in 10k ticks");
    }
}
