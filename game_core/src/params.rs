/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 6.0; // pixels per tick
    pub const OPPONENT_MARGIN: f32 = 60.0; // distance of opponent x from the right edge
    pub const OPPONENT_SPEED: f32 = 5.0;
    pub const INTERFERENCE_X: f32 = 100.0;
    pub const INTERFERENCE_SPEED: f32 = 7.0;

    // Ball
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0; // per axis, per tick
    pub const BALL_SPEED_STEP: f32 = 0.1; // bonus per rally hit
    pub const BALL_SPEED_BONUS_MAX: f32 = 5.0;

    // AI
    pub const AI_MISTAKE_CHANCE: f64 = 0.1;

    // Interference paddle timing (ticks, half-open ranges)
    pub const INTERFERENCE_IDLE_MIN: u32 = 300;
    pub const INTERFERENCE_IDLE_MAX: u32 = 600;
    pub const INTERFERENCE_ACTIVE_MIN: u32 = 180;
    pub const INTERFERENCE_ACTIVE_MAX: u32 = 300;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // HUD
    pub const BANNER_SECONDS: f64 = 1.0;

    // Frame pacing
    pub const TICK_RATE: f64 = 60.0;
    pub const FIXED_DT: f64 = 1.0 / Self::TICK_RATE;
    pub const MAX_DT: f64 = 0.25; // Clamp to prevent large jumps
    pub const MAX_SUBSTEPS: u32 = 8;
}
