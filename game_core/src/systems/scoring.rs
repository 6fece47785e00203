use log::info;
use rand::Rng;

use crate::{Arena, Ball, Banner, Config, Events, Score, Winner};
use hecs::World;

pub const POINT_LOST: &str = "Point Lost!";
pub const POINT_SCORED: &str = "Point Scored!";

/// Award a point when the ball reaches a side edge, then serve again from the centre
pub fn check_scoring<R: Rng + ?Sized>(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    banner: &mut Banner,
    events: &mut Events,
    now: f64,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() <= 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            banner.show(POINT_LOST, now);
            info!("Opponent scores ({}-{})", score.player, score.opponent);
        } else if ball.rect.right() >= arena.width {
            score.increment_player();
            events.player_scored = true;
            banner.show(POINT_SCORED, now);
            info!("Player scores ({}-{})", score.player, score.opponent);
        } else {
            continue;
        }
        ball.reset(arena.center(), rng);
    }
}

/// The winner, once either side has reached the winning score
pub fn check_game_over(score: &Score, config: &Config, events: &mut Events) -> Option<Winner> {
    let winner = score.has_winner(config.win_score);
    if let Some(winner) = winner {
        events.game_over = true;
        info!(
            "Game over, {:?} wins {}-{}",
            winner, score.player, score.opponent
        );
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, GameRng};
    use glam::Vec2;

    fn setup() -> (World, Config, Arena, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let arena = Arena::from(&config);
        let ball = create_ball(&mut world, &config);
        (world, config, arena, ball)
    }

    /// Run one scoring check from a fresh score, banner and event set
    fn run_scoring(world: &mut World, arena: &Arena, now: f64) -> (Score, Banner, Events) {
        let mut score = Score::new();
        let mut banner = Banner::new();
        let mut events = Events::new();
        let mut rng = GameRng::new(1);
        check_scoring(world, arena, &mut score, &mut banner, &mut events, now, &mut rng);
        (score, banner, events)
    }

    #[test]
    fn test_left_edge_scores_for_opponent() {
        let (mut world, _config, arena, ball) = setup();
        world.get::<&mut Ball>(ball).unwrap().rect.pos.x = -1.0;

        let (score, banner, events) = run_scoring(&mut world, &arena, 3.0);

        assert_eq!((score.player, score.opponent), (0, 1));
        assert!(events.opponent_scored);
        assert_eq!(banner.visible(3.5, 1.0), Some(POINT_LOST));
        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.rect.center(), Vec2::new(400.0, 300.0), "Ball re-served from centre");
    }

    #[test]
    fn test_right_edge_scores_for_player() {
        let (mut world, _config, arena, ball) = setup();
        world.get::<&mut Ball>(ball).unwrap().rect.pos.x = 771.0;

        let (score, banner, events) = run_scoring(&mut world, &arena, 0.0);

        assert_eq!((score.player, score.opponent), (1, 0));
        assert!(events.player_scored);
        assert_eq!(banner.visible(0.0, 1.0), Some(POINT_SCORED));
    }

    #[test]
    fn test_no_score_inside_field() {
        let (mut world, _config, arena, ball) = setup();
        world.get::<&mut Ball>(ball).unwrap().rect.pos.x = 1.0;

        let (score, banner, _events) = run_scoring(&mut world, &arena, 0.0);

        assert_eq!(score, Score::new());
        assert_eq!(banner.visible(0.0, 1.0), None);
        assert_eq!(world.get::<&Ball>(ball).unwrap().rect.pos.x, 1.0);
    }

    #[test]
    fn test_game_over_at_win_score() {
        let config = Config::new();
        let mut events = Events::new();

        let mut score = Score {
            player: 4,
            opponent: 4,
        };
        assert_eq!(check_game_over(&score, &config, &mut events), None);
        assert!(!events.game_over);

        score.opponent = 5;
        assert_eq!(
            check_game_over(&score, &config, &mut events),
            Some(Winner::Opponent)
        );
        assert!(events.game_over);
    }
}
