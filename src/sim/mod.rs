//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Simulation clock only (no wall-clock timers)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod control;
pub mod fruit;
pub mod logic;
pub mod mouth;
pub mod player;
pub mod schedule;
pub mod state;
pub mod tick;

pub use collision::catcher_overlaps;
pub use config::{ConfigError, GameConfig};
pub use control::{GameControl, GamePhase};
pub use fruit::{EffectResult, Fruit, FruitKind};
pub use logic::{determine_power_up_type, extra_heart_probability, poison_speed, splash_particles};
pub use player::Player;
pub use schedule::{Schedule, ScheduledEvent};
pub use state::{GameEvent, GameState, SpawnTimer, SpawnTimers};
pub use tick::{TickInput, tick};
