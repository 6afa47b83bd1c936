//! Game settings and preferences
//!
//! Named presets for spawn rate, catcher agility and catcher width. Stored as
//! JSON and turned into a [`GameConfig`] when a session starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::POWER_UP_INTERVAL_FACTOR;
use crate::sim::{ConfigError, GameConfig};

/// Errors loading or applying settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings produce an invalid game config: {0}")]
    Config(#[from] ConfigError),
}

/// How often plain fruit spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FruitSpeed {
    Easy,
    #[default]
    Medium,
    Hard,
    Pro,
}

impl FruitSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitSpeed::Easy => "Easy",
            FruitSpeed::Medium => "Medium",
            FruitSpeed::Hard => "Hard",
            FruitSpeed::Pro => "Pro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(FruitSpeed::Easy),
            "medium" | "med" => Some(FruitSpeed::Medium),
            "hard" => Some(FruitSpeed::Hard),
            "pro" => Some(FruitSpeed::Pro),
            _ => None,
        }
    }

    /// Milliseconds between fruit spawns
    pub fn spawn_interval_ms(&self) -> u64 {
        match self {
            FruitSpeed::Easy => 3_000,
            FruitSpeed::Medium => 2_000,
            FruitSpeed::Hard => 1_000,
            FruitSpeed::Pro => 500,
        }
    }
}

/// How long the catcher waits between lane changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayerSpeed {
    #[default]
    Smooth,
    Slow,
    Fast,
    Pro,
}

impl PlayerSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerSpeed::Smooth => "Smooth",
            PlayerSpeed::Slow => "Slow",
            PlayerSpeed::Fast => "Fast",
            PlayerSpeed::Pro => "Pro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "smooth" => Some(PlayerSpeed::Smooth),
            "slow" => Some(PlayerSpeed::Slow),
            "fast" => Some(PlayerSpeed::Fast),
            "pro" => Some(PlayerSpeed::Pro),
            _ => None,
        }
    }

    /// Ticks of cooldown after each lane change
    pub fn cooldown_frames(&self) -> u32 {
        match self {
            PlayerSpeed::Smooth => 10,
            PlayerSpeed::Slow => 15,
            PlayerSpeed::Fast => 5,
            PlayerSpeed::Pro => 0,
        }
    }
}

/// Starting catcher width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayerSize {
    Large,
    Medium,
    Small,
    #[default]
    Pro,
}

impl PlayerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerSize::Large => "Large",
            PlayerSize::Medium => "Medium",
            PlayerSize::Small => "Small",
            PlayerSize::Pro => "Pro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "large" => Some(PlayerSize::Large),
            "medium" | "med" => Some(PlayerSize::Medium),
            "small" => Some(PlayerSize::Small),
            "pro" => Some(PlayerSize::Pro),
            _ => None,
        }
    }

    pub fn pixels(&self) -> f32 {
        match self {
            PlayerSize::Large => 150.0,
            PlayerSize::Medium => 120.0,
            PlayerSize::Small => 80.0,
            PlayerSize::Pro => 60.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fruit_speed: FruitSpeed,
    pub player_speed: PlayerSpeed,
    pub player_size: PlayerSize,
    /// Number of lanes
    pub lanes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            fruit_speed: FruitSpeed::Medium,
            player_speed: PlayerSpeed::Smooth,
            player_size: PlayerSize::Pro,
            lanes: config.lanes,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a validated session configuration
    pub fn to_config(&self) -> Result<GameConfig, SettingsError> {
        let fruit_interval_ms = self.fruit_speed.spawn_interval_ms();
        let config = GameConfig {
            lanes: self.lanes,
            start_size: self.player_size.pixels(),
            fruit_interval_ms,
            power_up_interval_ms: fruit_interval_ms * POWER_UP_INTERVAL_FACTOR,
            move_cooldown_frames: self.player_speed.cooldown_frames(),
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(FruitSpeed::Easy.spawn_interval_ms(), 3_000);
        assert_eq!(FruitSpeed::Pro.spawn_interval_ms(), 500);
        assert_eq!(PlayerSpeed::Slow.cooldown_frames(), 15);
        assert_eq!(PlayerSpeed::Pro.cooldown_frames(), 0);
        assert_eq!(PlayerSize::Large.pixels(), 150.0);
        assert_eq!(PlayerSize::Small.pixels(), 80.0);
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for speed in [FruitSpeed::Easy, FruitSpeed::Medium, FruitSpeed::Hard, FruitSpeed::Pro] {
            assert_eq!(FruitSpeed::from_str(speed.as_str()), Some(speed));
        }
        assert_eq!(PlayerSpeed::from_str("FAST"), Some(PlayerSpeed::Fast));
        assert_eq!(PlayerSize::from_str("med"), Some(PlayerSize::Medium));
        assert_eq!(PlayerSize::from_str("huge"), None);
    }

    #[test]
    fn test_to_config() {
        let settings = Settings {
            fruit_speed: FruitSpeed::Hard,
            player_speed: PlayerSpeed::Fast,
            player_size: PlayerSize::Medium,
            lanes: 7,
        };
        let config = settings.to_config().expect("valid settings");
        assert_eq!(config.fruit_interval_ms, 1_000);
        assert_eq!(config.power_up_interval_ms, 5_000);
        assert_eq!(config.move_cooldown_frames, 5);
        assert_eq!(config.start_size, 120.0);
        assert_eq!(config.lanes, 7);
    }

    #[test]
    fn test_default_settings_match_default_config() {
        let config = Settings::default().to_config().expect("valid settings");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "fruit_speed": "Pro" }"#).expect("parses");
        assert_eq!(settings.fruit_speed, FruitSpeed::Pro);
        assert_eq!(settings.player_size, PlayerSize::Pro);
        assert_eq!(settings.lanes, 5);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            lanes: 3,
            ..Default::default()
        };
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Json(_))
        ));
        let settings = Settings {
            lanes: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.to_config(),
            Err(SettingsError::Config(ConfigError::NoLanes))
        ));
    }
}
