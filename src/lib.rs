//! Fruit Catcher - A lane-based falling fruit arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, player, collisions, game state)
//! - `settings`: Named difficulty presets and JSON load/save
//!
//! Rendering, audio and camera input live outside this crate and drive
//! [`sim::tick`] once per frame.

pub mod settings;
pub mod sim;

pub use settings::{FruitSpeed, PlayerSize, PlayerSpeed, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame length for the native runner (~60 Hz)
    pub const FRAME_MS: u64 = 16;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Number of horizontal lanes the catcher snaps between
    pub const LANES: u32 = 5;

    /// Player vertical band as fractions of canvas height
    pub const PLAYER_MIN_Y_FRACTION: f32 = 0.5;
    pub const PLAYER_MAX_Y_FRACTION: f32 = 0.9;
    /// Vertical movement per up/down step
    pub const PLAYER_Y_STEP: f32 = 10.0;

    /// Catcher width bounds (pixels)
    pub const PLAYER_MIN_SIZE: f32 = 60.0;
    pub const PLAYER_MAX_SIZE: f32 = 150.0;

    /// Hearts
    pub const START_HEARTS: i32 = 3;
    pub const MAX_HEARTS: i32 = 3;

    /// Base fruit geometry, scaled by depth
    pub const FRUIT_BASE_SIZE: f32 = 20.0;
    pub const FRUIT_BASE_SPEED: f32 = 3.0;
    /// Fixed size of the rain and big-board power-ups
    pub const POWER_UP_SIZE: f32 = 30.0;
    /// Fall speed of everything (except poison) while it rains
    pub const RAIN_FALL_SPEED: f32 = 10.0;
    /// Poison fall speed before score scaling
    pub const POISON_BASE_SPEED: f32 = 5.0;
    /// Score at which poison reaches its top speed multiplier
    pub const POISON_SCORE_CAP: u32 = 100;
    pub const POISON_MAX_MULTIPLIER: f32 = 3.0;

    /// Depth range for randomly spawned fruit
    pub const MIN_DEPTH: f32 = 0.5;
    pub const MAX_DEPTH: f32 = 1.5;
    /// Opacity range mapped from depth
    pub const MIN_OPACITY: f32 = 150.0;
    pub const MAX_OPACITY: f32 = 255.0;

    /// Catch tolerance along y (x tolerance is half the catcher width)
    pub const CATCH_Y_TOLERANCE: f32 = 15.0;

    /// Big-board power-up
    pub const BIG_BOARD_SIZE_BOOST: f32 = 20.0;
    pub const BIG_BOARD_DURATION_MS: u64 = 20_000;

    /// Rain session
    pub const RAIN_DURATION_MS: u64 = 5_000;
    pub const RAIN_SPAWN_INTERVAL_MS: u64 = 100;
    /// Chance that a rain spawn is poison instead of fruit
    pub const RAIN_POISON_CHANCE: f32 = 0.3;

    /// Power-ups spawn this many times slower than plain fruit
    pub const POWER_UP_INTERVAL_FACTOR: u64 = 5;

    /// Splash particle counts for the smallest/largest catcher
    pub const MIN_SPLASH_PARTICLES: f32 = 10.0;
    pub const MAX_SPLASH_PARTICLES: f32 = 25.0;
}

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]` (unclamped)
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Center x of a lane
#[inline]
pub fn lane_center(lane: u32, lane_width: f32) -> f32 {
    lane as f32 * lane_width + lane_width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints_and_midpoint() {
        assert_eq!(map_range(0.0, 0.0, 100.0, 1.0, 3.0), 1.0);
        assert_eq!(map_range(100.0, 0.0, 100.0, 1.0, 3.0), 3.0);
        assert_eq!(map_range(50.0, 0.0, 100.0, 1.0, 3.0), 2.0);
        assert_eq!(map_range(1.0, 0.5, 1.5, 150.0, 255.0), 202.5);
    }

    #[test]
    fn test_lane_center() {
        assert_eq!(lane_center(0, 160.0), 80.0);
        assert_eq!(lane_center(4, 160.0), 720.0);
    }
}
