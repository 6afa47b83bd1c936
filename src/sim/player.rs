//! The player's catcher

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::consts::PLAYER_Y_STEP;
use crate::lane_center;

/// Lane-snapped catcher with health and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center x is derived from `lane`; y is free within [min_y, max_y]
    pos: Vec2,
    lane: u32,
    lanes: u32,
    lane_width: f32,
    min_y: f32,
    max_y: f32,
    /// Catcher width (pixels)
    pub size: f32,
    /// Remaining hearts (may go negative, see `is_alive`)
    pub hearts: i32,
    max_hearts: i32,
    pub score: u32,
}

impl Player {
    /// Create a player in the middle lane at the bottom of its band
    pub fn new(config: &GameConfig) -> Self {
        let lane_width = config.lane_width();
        let lane = config.lanes / 2;
        Self {
            pos: Vec2::new(lane_center(lane, lane_width), config.max_y()),
            lane,
            lanes: config.lanes,
            lane_width,
            min_y: config.min_y(),
            max_y: config.max_y(),
            size: config.start_size,
            hearts: config.start_hearts,
            max_hearts: config.max_hearts,
            score: 0,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn lane(&self) -> u32 {
        self.lane
    }

    pub fn lanes(&self) -> u32 {
        self.lanes
    }

    pub fn lane_width(&self) -> f32 {
        self.lane_width
    }

    /// Cap applied by heart pickups
    pub fn max_hearts(&self) -> i32 {
        self.max_hearts
    }

    fn update_position(&mut self) {
        self.pos.x = lane_center(self.lane, self.lane_width);
    }

    pub fn move_right(&mut self) {
        if self.lane + 1 < self.lanes {
            self.lane += 1;
            self.update_position();
        }
    }

    pub fn move_left(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
            self.update_position();
        }
    }

    /// Jump straight to `lane` (clamped to the last lane)
    pub fn move_to_lane(&mut self, lane: u32) {
        self.lane = lane.min(self.lanes.saturating_sub(1));
        self.update_position();
    }

    /// Step toward `min_y`, stopping exactly on the bound
    pub fn move_up(&mut self) {
        self.pos.y = (self.pos.y - PLAYER_Y_STEP).max(self.min_y);
    }

    /// Step toward `max_y`, stopping exactly on the bound
    pub fn move_down(&mut self) {
        self.pos.y = (self.pos.y + PLAYER_Y_STEP).min(self.max_y);
    }

    /// Place the catcher vertically, clamped to its band
    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y.clamp(self.min_y, self.max_y);
    }

    pub fn is_alive(&self) -> bool {
        self.hearts > 0
    }
}
