//! Runtime game configuration
//!
//! Built from [`crate::Settings`] or taken from the compile-time defaults in
//! [`crate::consts`]. Everything the simulation reads at construction lives here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lane count must be at least 1")]
    NoLanes,
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
    #[error("player size {size} is outside [{min}, {max}]")]
    SizeOutOfRange { size: f32, min: f32, max: f32 },
    #[error("starting hearts must be at least 1, got {0}")]
    NoHearts(i32),
    #[error("starting hearts {start} exceed the maximum of {max}")]
    TooManyHearts { start: i32, max: i32 },
    #[error("{name} interval must be non-zero")]
    ZeroInterval { name: &'static str },
    #[error("rain poison chance {0} must be within [0, 1]")]
    InvalidChance(f32),
}

/// Session configuration, fixed for the lifetime of a [`super::GameState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub lanes: u32,
    /// Catcher width at session start
    pub start_size: f32,
    pub start_hearts: i32,
    pub max_hearts: i32,
    /// Milliseconds between plain fruit spawns
    pub fruit_interval_ms: u64,
    /// Milliseconds between power-up rolls
    pub power_up_interval_ms: u64,
    /// Ticks the catcher must wait after a lane change
    pub move_cooldown_frames: u32,
    pub rain_duration_ms: u64,
    pub rain_spawn_interval_ms: u64,
    pub rain_poison_chance: f32,
    pub big_board_duration_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        let fruit_interval_ms = 2_000;
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            lanes: LANES,
            start_size: PLAYER_MIN_SIZE,
            start_hearts: START_HEARTS,
            max_hearts: MAX_HEARTS,
            fruit_interval_ms,
            power_up_interval_ms: fruit_interval_ms * POWER_UP_INTERVAL_FACTOR,
            move_cooldown_frames: 10,
            rain_duration_ms: RAIN_DURATION_MS,
            rain_spawn_interval_ms: RAIN_SPAWN_INTERVAL_MS,
            rain_poison_chance: RAIN_POISON_CHANCE,
            big_board_duration_ms: BIG_BOARD_DURATION_MS,
        }
    }
}

impl GameConfig {
    /// Width of a single lane
    pub fn lane_width(&self) -> f32 {
        self.canvas_width / self.lanes as f32
    }

    /// Highest point (smallest y) the catcher may reach
    pub fn min_y(&self) -> f32 {
        self.canvas_height * PLAYER_MIN_Y_FRACTION
    }

    /// Lowest point (largest y) the catcher may reach
    pub fn max_y(&self) -> f32 {
        self.canvas_height * PLAYER_MAX_Y_FRACTION
    }

    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes == 0 {
            return Err(ConfigError::NoLanes);
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(PLAYER_MIN_SIZE..=PLAYER_MAX_SIZE).contains(&self.start_size) {
            return Err(ConfigError::SizeOutOfRange {
                size: self.start_size,
                min: PLAYER_MIN_SIZE,
                max: PLAYER_MAX_SIZE,
            });
        }
        if self.start_hearts < 1 {
            return Err(ConfigError::NoHearts(self.start_hearts));
        }
        if self.start_hearts > self.max_hearts {
            return Err(ConfigError::TooManyHearts {
                start: self.start_hearts,
                max: self.max_hearts,
            });
        }
        let intervals = [
            ("fruit", self.fruit_interval_ms),
            ("power-up", self.power_up_interval_ms),
            ("rain spawn", self.rain_spawn_interval_ms),
        ];
        if let Some(&(name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ZeroInterval { name });
        }
        if !(0.0..=1.0).contains(&self.rain_poison_chance) {
            return Err(ConfigError::InvalidChance(self.rain_poison_chance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.lane_width(), 160.0);
        assert_eq!(config.min_y(), 200.0);
        assert_eq!(config.max_y(), 360.0);
    }

    #[test]
    fn test_rejects_zero_lanes() {
        let config = GameConfig {
            lanes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLanes));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = GameConfig {
            rain_spawn_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval { name: "rain spawn" })
        );
    }

    #[test]
    fn test_rejects_bad_heart_bounds() {
        let dead_on_arrival = GameConfig {
            start_hearts: 0,
            ..Default::default()
        };
        assert_eq!(dead_on_arrival.validate(), Err(ConfigError::NoHearts(0)));

        let inverted = GameConfig {
            start_hearts: 3,
            max_hearts: 0,
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::TooManyHearts { start: 3, max: 0 })
        );
    }

    #[test]
    fn test_rejects_oversized_player() {
        let config = GameConfig {
            start_size: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SizeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::NoLanes.to_string(), "lane count must be at least 1");
        assert_eq!(
            ConfigError::InvalidChance(1.5).to_string(),
            "rain poison chance 1.5 must be within [0, 1]"
        );
    }
}
