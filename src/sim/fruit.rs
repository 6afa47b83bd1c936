//! Falling entities: plain fruit and the power-up variants
//!
//! Every variant shares one data shape; behavior differs by `FruitKind`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::catcher_overlaps;
use super::logic::poison_speed;
use super::player::Player;
use crate::consts::*;
use crate::{lane_center, map_range};

/// Falling entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FruitKind {
    /// +1 score
    Fruit,
    /// -1 heart, falls faster as score rises
    Poison,
    /// Starts a rain session
    Rainy,
    /// Temporarily widens the catcher
    #[serde(rename = "bigboard")]
    BigBoard,
    /// +1 heart up to the cap
    ExtraHeart,
}

impl FruitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Fruit => "fruit",
            FruitKind::Poison => "poison",
            FruitKind::Rainy => "rainy",
            FruitKind::BigBoard => "bigboard",
            FruitKind::ExtraHeart => "extraHeart",
        }
    }

    /// Anything other than plain fruit
    pub fn is_power_up(&self) -> bool {
        *self != FruitKind::Fruit
    }
}

/// What a caught entity asks the caller to do beyond its direct effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectResult {
    /// Nothing further
    None,
    /// Start a rain session
    TriggerRain,
    /// The catcher grew; revert to `original_size` after the boost expires
    Boosted { original_size: f32 },
}

/// A falling entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    /// Simulated distance; scales size, speed and opacity
    pub depth: f32,
    pub size: f32,
    /// Fall speed per tick (unused by poison)
    pub speed: f32,
    /// Render alpha in [150, 255] for depths in [0.5, 1.5]
    pub opacity: f32,
    /// Poison speed before score scaling (0 for other kinds)
    pub base_speed: f32,
}

impl Fruit {
    /// Create an entity at the top of `lane`
    pub fn new(kind: FruitKind, lane: u32, lane_width: f32, depth: f32) -> Self {
        let size = match kind {
            FruitKind::Rainy | FruitKind::BigBoard => POWER_UP_SIZE,
            _ => FRUIT_BASE_SIZE * depth,
        };
        let base_speed = if kind == FruitKind::Poison {
            POISON_BASE_SPEED
        } else {
            0.0
        };
        Self {
            id: 0,
            kind,
            pos: Vec2::new(lane_center(lane, lane_width), 0.0),
            depth,
            size,
            speed: FRUIT_BASE_SPEED * depth,
            opacity: map_range(depth, MIN_DEPTH, MAX_DEPTH, MIN_OPACITY, MAX_OPACITY),
            base_speed,
        }
    }

    /// Create an entity at depth 1.0
    pub fn with_default_depth(kind: FruitKind, lane: u32, lane_width: f32) -> Self {
        Self::new(kind, lane, lane_width, 1.0)
    }

    /// Builder-style id assignment
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Advance one tick.
    ///
    /// Rain normalizes every kind except poison to a fixed speed; poison
    /// instead speeds up with `score`.
    pub fn fall(&mut self, is_raining: bool, score: u32) {
        self.pos.y += match self.kind {
            FruitKind::Poison => poison_speed(self.base_speed, score),
            _ if is_raining => RAIN_FALL_SPEED,
            _ => self.speed,
        };
    }

    pub fn check_collision(&self, player: &Player) -> bool {
        catcher_overlaps(self.pos, player.pos(), player.size)
    }

    /// Apply this entity's catch effect to `player`
    pub fn apply_effect(&self, player: &mut Player) -> EffectResult {
        match self.kind {
            FruitKind::Fruit => {
                player.score += 1;
                EffectResult::None
            }
            FruitKind::Poison => {
                player.hearts -= 1;
                EffectResult::None
            }
            FruitKind::Rainy => EffectResult::TriggerRain,
            FruitKind::BigBoard => {
                let original_size = player.size;
                player.size = (player.size + BIG_BOARD_SIZE_BOOST).min(PLAYER_MAX_SIZE);
                EffectResult::Boosted { original_size }
            }
            FruitKind::ExtraHeart => {
                player.hearts = (player.hearts + 1).min(player.max_hearts());
                EffectResult::None
            }
        }
    }

    /// Below the bottom edge; the edge itself is still on screen
    pub fn is_off_screen(&self, canvas_height: f32) -> bool {
        self.pos.y > canvas_height
    }
}
