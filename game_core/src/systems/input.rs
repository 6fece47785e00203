use crate::{InputState, Paddle, PaddleIntent, PaddleRole};
use hecs::World;

/// Turn held keys into the player paddle's movement intent
pub fn ingest_input(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.role == PaddleRole::Player {
            intent.dir = input.dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_input_only_drives_player() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, &config, PaddleRole::Player);
        let opponent = create_paddle(&mut world, &config, PaddleRole::Opponent);

        ingest_input(&mut world, &InputState::UP);

        assert_eq!(world.get::<&PaddleIntent>(player).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(opponent).unwrap().dir, 0);
    }

    #[test]
    fn test_releasing_keys_stops_player() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, &config, PaddleRole::Player);

        ingest_input(&mut world, &InputState::DOWN);
        assert_eq!(world.get::<&PaddleIntent>(player).unwrap().dir, 1);

        ingest_input(&mut world, &InputState::new());
        assert_eq!(world.get::<&PaddleIntent>(player).unwrap().dir, 0);
    }
}
