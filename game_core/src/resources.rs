use rand::{RngCore, SeedableRng};

use crate::params::Params;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,   // Left paddle score
    pub opponent: u8, // Right (AI) paddle score
}

/// Which side won a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Winner> {
        if self.player >= win_score {
            Some(Winner::Player)
        } else if self.opponent >= win_score {
            Some(Winner::Opponent)
        } else {
            None
        }
    }
}

/// Seeded random number generator
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_interference: bool,
    pub ball_hit_wall: bool,
    pub interference_appeared: bool,
    pub interference_vanished: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Transient centre-screen message ("Point Lost!" and friends)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banner {
    pub text: String,
    pub shown_at: Option<f64>, // seconds on the client clock
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>, now: f64) {
        self.text = text.into();
        self.shown_at = Some(now);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.shown_at = None;
    }

    /// The message to draw at `now`, if it has not yet expired
    pub fn visible(&self, now: f64, duration: f64) -> Option<&str> {
        match self.shown_at {
            Some(t) if now - t < duration => Some(&self.text),
            _ => None,
        }
    }
}

/// Keys held down this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Only the up key held
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    /// Only the down key held
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Net paddle direction; both keys together cancel out
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

/// Interference paddle lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterferenceState {
    /// Hidden; `elapsed` counts up toward `activate_at`
    Inactive { elapsed: u32, activate_at: u32 },
    /// In play for `remaining` more ticks
    Active { remaining: u32 },
}

impl InterferenceState {
    pub fn is_active(&self) -> bool {
        matches!(self, InterferenceState::Active { .. })
    }
}

/// Converts wall-clock frame timestamps into fixed simulation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the timestamp of a new frame (seconds) and get the number of ticks to run
    pub fn advance(&mut self, now: f64) -> u32 {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, Params::MAX_DT),
            None => Params::FIXED_DT,
        };
        self.last = Some(now);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT && ticks < Params::MAX_SUBSTEPS {
            self.accumulator -= Params::FIXED_DT;
            ticks += 1;
        }
        if ticks == Params::MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = 0.0;
        }
        ticks
    }
}
