pub mod arena;
pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod ui;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use ui::*;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use systems::*;

/// Everything the game loop mutates, in one place.
///
/// The RNG is a type parameter so tests can inject a scripted source; the
/// game itself uses the seeded [`GameRng`].
pub struct GameState<R: Rng = GameRng> {
    pub world: World,
    pub config: Config,
    pub arena: Arena,
    pub fsm: GameFsm,
    pub score: Score,
    pub banner: Banner,
    pub interference: InterferenceState,
    pub events: Events,
    pub winner: Option<Winner>,
    pub ticks: u64,
    pub start_button: Button,
    pub restart_button: Button,
    rng: R,
}

impl GameState<GameRng> {
    /// New game on the title screen, seeded from `config.seed`
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: Config, mut rng: R) -> anyhow::Result<Self> {
        config.validate()?;

        let arena = Arena::from(&config);
        let mut world = World::new();
        create_paddle(&mut world, &config, PaddleRole::Player);
        create_paddle(&mut world, &config, PaddleRole::Opponent);
        create_paddle(&mut world, &config, PaddleRole::Interference);
        create_ball(&mut world, &config);
        let interference = InterferenceState::inactive(&config, &mut rng);

        Ok(Self {
            world,
            arena,
            fsm: GameFsm::new(),
            score: Score::new(),
            banner: Banner::new(),
            interference,
            events: Events::new(),
            winner: None,
            ticks: 0,
            start_button: Button::start(&arena),
            restart_button: Button::restart(&arena),
            config,
            rng,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.fsm.phase()
    }

    /// Scores to zero, every paddle centred, ball re-served, interference hidden
    pub fn reset_game(&mut self) {
        self.score = Score::new();
        self.winner = None;
        self.banner.clear();
        self.events.clear();

        let paddles = self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>();
        for (_entity, (paddle, intent)) in paddles {
            paddle.recenter(&self.arena);
            intent.dir = 0;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(self.arena.center(), &mut self.rng);
        }
        self.interference = InterferenceState::inactive(&self.config, &mut self.rng);
    }

    /// Handle a mouse click at `pos` (canvas pixels). Returns true when it
    /// started or restarted a game.
    pub fn click(&mut self, pos: Vec2) -> bool {
        let action = match self.fsm.phase() {
            GamePhase::NotStarted if self.start_button.is_clicked(pos) => GameAction::Start,
            GamePhase::GameOver if self.restart_button.is_clicked(pos) => GameAction::Restart,
            _ => return false,
        };
        self.reset_game();
        self.fsm.transition(action).success
    }

    /// Run one fixed tick of play. `now` is the client clock in seconds and
    /// only timestamps the score banner. Outside play this is a no-op.
    pub fn step(&mut self, input: &InputState, now: f64) -> &Events {
        self.events.clear();
        if !self.fsm.is_playing() {
            return &self.events;
        }
        let Some(ball) = ball_snapshot(&self.world) else {
            return &self.events;
        };
        self.ticks += 1;

        // 1. Paddle intents: keyboard, AI, interference
        ingest_input(&mut self.world, input);
        drive_opponent(&mut self.world, &ball, &self.config, &mut self.rng);
        tick_interference(
            &mut self.interference,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        drive_interference(&mut self.world, &self.interference, &ball);

        // 2. Move paddles, then the ball
        move_paddles(&mut self.world, &self.arena);
        move_ball(&mut self.world, &self.arena, &mut self.events);

        // 3. Bounce off paddles
        check_collisions(
            &mut self.world,
            self.interference.is_active(),
            &self.config,
            &mut self.events,
        );

        // 4. Points and match end
        check_scoring(
            &mut self.world,
            &self.arena,
            &mut self.score,
            &mut self.banner,
            &mut self.events,
            now,
            &mut self.rng,
        );
        if let Some(winner) = check_game_over(&self.score, &self.config, &mut self.events) {
            self.winner = Some(winner);
            self.fsm.transition(GameAction::GameOver);
        }

        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        ball_snapshot(&self.world)
    }

    pub fn paddle(&self, role: PaddleRole) -> Option<Paddle> {
        paddle_snapshot(&self.world, role)
    }

    /// Banner text still on screen at `now`
    pub fn banner_text(&self, now: f64) -> Option<&str> {
        self.banner.visible(now, self.config.banner_seconds)
    }
}

/// Helper to create a paddle entity, vertically centred at its role's column
pub fn create_paddle(world: &mut World, config: &Config, role: PaddleRole) -> hecs::Entity {
    let rect = Rect::new(
        config.paddle_x(role),
        config.paddle_center_y(),
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((
        Paddle::new(role, rect, config.paddle_speed(role)),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity at the arena centre
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let center = Arena::from(config).center();
    world.spawn((Ball::new(center, config.ball_size, config.ball_speed_initial),))
}
