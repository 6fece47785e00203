use glam::Vec2;
use rand::Rng;

use crate::arena::{Arena, Rect};

/// RGB colour used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which paddle an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleRole {
    Player,       // left, keyboard controlled
    Opponent,     // right, AI controlled
    Interference, // roaming obstacle, only present while active
}

impl PaddleRole {
    pub fn color(self) -> Color {
        match self {
            PaddleRole::Player => Color::GREEN,
            PaddleRole::Opponent => Color::RED,
            PaddleRole::Interference => Color::BLUE,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub role: PaddleRole,
    pub rect: Rect,
    pub speed: f32, // pixels per tick
}

impl Paddle {
    pub fn new(role: PaddleRole, rect: Rect, speed: f32) -> Self {
        Self { role, rect, speed }
    }

    pub fn color(&self) -> Color {
        self.role.color()
    }

    /// Move by `dir` steps of `speed` (-1 = up, 1 = down), staying on screen
    pub fn move_dir(&mut self, dir: i8, arena: &Arena) {
        let y = self.rect.pos.y + dir as f32 * self.speed;
        self.rect.pos.y = arena.clamp_y(y, self.rect.size.y);
    }

    /// Direction that brings the paddle centre toward `target_y` (0 when aligned)
    pub fn dir_toward(&self, target_y: f32) -> i8 {
        let center = self.rect.center_y();
        if target_y < center {
            -1
        } else if target_y > center {
            1
        } else {
            0
        }
    }

    pub fn recenter(&mut self, arena: &Arena) {
        let y = arena.height / 2.0 - self.rect.size.y / 2.0;
        self.rect.pos.y = arena.clamp_y(y, self.rect.size.y);
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub base_speed: f32,
    pub rally_count: u32,
}

impl Ball {
    /// Centred ball moving down-right at `base_speed` on both axes
    pub fn new(center: Vec2, size: f32, base_speed: f32) -> Self {
        Self {
            rect: Rect::from_center_size(center, Vec2::splat(size)),
            vel: Vec2::splat(base_speed),
            base_speed,
            rally_count: 0,
        }
    }

    /// Integrate one tick. Reflects off the top and bottom bounds and returns
    /// true when a bound was touched.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.rect.pos += self.vel;

        if self.rect.top() <= 0.0 {
            self.rect.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
            true
        } else if self.rect.bottom() >= arena.height {
            self.rect.pos.y = arena.height - self.rect.size.y;
            self.vel.y = -self.vel.y.abs();
            true
        } else {
            false
        }
    }

    /// Bonus added to the base speed for the current rally, capped at `max`
    pub fn speed_bonus(&self, step: f32, max: f32) -> f32 {
        (self.rally_count as f32 * step).min(max)
    }

    /// Register a paddle hit: the rally grows and the bonus is added on top of
    /// each axis' current speed, keeping its sign. Only the bonus is capped.
    pub fn increase_speed(&mut self, step: f32, max: f32) {
        self.rally_count += 1;
        let bonus = self.speed_bonus(step, max);
        self.vel = Vec2::new(
            (self.vel.x.abs() + bonus).copysign(self.vel.x),
            (self.vel.y.abs() + bonus).copysign(self.vel.y),
        );
    }

    /// Reset ball to center with a random diagonal direction
    pub fn reset<R: Rng + ?Sized>(&mut self, center: Vec2, rng: &mut R) {
        self.rect = Rect::from_center_size(center, self.rect.size);
        let sx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * self.base_speed, sy * self.base_speed);
        self.rally_count = 0;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
