//! Pause / rain / game-over flags gating the simulation

use serde::{Deserialize, Serialize};

/// Coarse phase derived from the control flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Session control flags.
///
/// Invariant: `is_game_over` implies `is_paused`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameControl {
    is_paused: bool,
    is_raining: bool,
    is_rainy_fruits_active: bool,
    is_game_over: bool,
}

impl GameControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_raining(&self) -> bool {
        self.is_raining
    }

    pub fn is_rainy_fruits_active(&self) -> bool {
        self.is_rainy_fruits_active
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else if self.is_paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    /// Flip Running/Paused; ignored once the game is over
    pub fn toggle_pause(&mut self) {
        if self.is_game_over {
            return;
        }
        self.is_paused = !self.is_paused;
    }

    pub fn trigger_game_over(&mut self) {
        self.is_game_over = true;
        self.is_paused = true;
    }

    pub fn start_rain(&mut self) {
        self.is_raining = true;
        self.is_rainy_fruits_active = true;
    }

    pub fn end_rain(&mut self) {
        self.is_raining = false;
        self.is_rainy_fruits_active = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
