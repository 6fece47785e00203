use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub interference_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_step: f32,
    pub ball_speed_bonus_max: f32,
    pub ai_mistake_chance: f64,
    /// Ticks the interference paddle stays hidden, `[min, max)`
    pub interference_idle_ticks: (u32, u32),
    /// Ticks the interference paddle stays in play, `[min, max)`
    pub interference_active_ticks: (u32, u32),
    pub win_score: u8,
    pub banner_seconds: f64,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_speed: Params::PLAYER_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            interference_speed: Params::INTERFERENCE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_speed_bonus_max: Params::BALL_SPEED_BONUS_MAX,
            ai_mistake_chance: Params::AI_MISTAKE_CHANCE,
            interference_idle_ticks: (
                Params::INTERFERENCE_IDLE_MIN,
                Params::INTERFERENCE_IDLE_MAX,
            ),
            interference_active_ticks: (
                Params::INTERFERENCE_ACTIVE_MIN,
                Params::INTERFERENCE_ACTIVE_MAX,
            ),
            win_score: Params::WIN_SCORE,
            banner_seconds: Params::BANNER_SECONDS,
            seed: 12345,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with a specific RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot honour.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.arena_width > 0.0 && self.arena_height > 0.0,
            "arena must have a positive size, got {}x{}",
            self.arena_width,
            self.arena_height
        );
        ensure!(
            self.paddle_height > 0.0 && self.paddle_height <= self.arena_height,
            "paddle height {} does not fit an arena {} high",
            self.paddle_height,
            self.arena_height
        );
        ensure!(
            self.ball_size > 0.0 && self.ball_size < self.arena_height,
            "ball size {} does not fit an arena {} high",
            self.ball_size,
            self.arena_height
        );
        ensure!(
            self.ball_speed_initial > 0.0,
            "initial ball speed must be positive"
        );
        ensure!(
            (0.0..=1.0).contains(&self.ai_mistake_chance),
            "AI mistake chance {} is not a probability",
            self.ai_mistake_chance
        );
        let (idle_min, idle_max) = self.interference_idle_ticks;
        ensure!(
            0 < idle_min && idle_min < idle_max,
            "interference idle range [{idle_min}, {idle_max}) is empty"
        );
        let (active_min, active_max) = self.interference_active_ticks;
        ensure!(
            0 < active_min && active_min < active_max,
            "interference active range [{active_min}, {active_max}) is empty"
        );
        ensure!(self.win_score > 0, "win score must be at least 1");
        Ok(())
    }

    /// Get X position for the paddle with the given role
    pub fn paddle_x(&self, role: crate::PaddleRole) -> f32 {
        match role {
            crate::PaddleRole::Player => Params::PLAYER_X,
            crate::PaddleRole::Opponent => self.arena_width - Params::OPPONENT_MARGIN,
            crate::PaddleRole::Interference => Params::INTERFERENCE_X,
        }
    }

    /// Get per-tick speed for the paddle with the given role
    pub fn paddle_speed(&self, role: crate::PaddleRole) -> f32 {
        match role {
            crate::PaddleRole::Player => self.player_speed,
            crate::PaddleRole::Opponent => self.opponent_speed,
            crate::PaddleRole::Interference => self.interference_speed,
        }
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_center_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaddleRole;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(PaddleRole::Player), 50.0, "Player X");
        assert_eq!(config.paddle_x(PaddleRole::Opponent), 740.0, "Opponent X");
        assert_eq!(config.paddle_x(PaddleRole::Interference), 100.0);
    }

    #[test]
    fn test_config_paddle_center_y() {
        let config = Config::new();
        assert_eq!(config.paddle_center_y(), 250.0);
        let tall = Config {
            paddle_height: 200.0,
            ..Config::default()
        };
        assert_eq!(tall.paddle_center_y(), 200.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "seed": 7, "win_score": 3 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.win_score, 3);
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.interference_idle_ticks, (300, 600));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse game config"));
    }

    #[test]
    fn test_empty_interference_range_is_rejected() {
        let config = Config {
            interference_active_ticks: (300, 300),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mistake_chance_must_be_probability() {
        let config = Config {
            ai_mistake_chance: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
