//! Game state and core simulation types
//!
//! Everything a session owns lives here. Nothing is global; the tick takes the
//! state by `&mut`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::config::{ConfigError, GameConfig};
use super::control::GameControl;
use super::fruit::{Fruit, FruitKind};
use super::player::Player;
use super::schedule::Schedule;
use crate::consts::{MAX_DEPTH, MIN_DEPTH};

/// Something the presentation layer may want to react to.
/// Cleared at the start of every tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// An entity was caught; `splash_particles` sizes the splash effect
    Caught {
        id: u32,
        kind: FruitKind,
        pos: Vec2,
        splash_particles: u32,
    },
    /// Poison or a heart pickup moved the heart count to `hearts`
    HeartsChanged { hearts: i32 },
    RainStarted,
    RainEnded,
    /// Catcher grew to `size`
    BoardBoosted { size: f32 },
    /// Catcher returned to `size` after the boost expired
    BoardReverted { size: f32 },
    GameOver { score: u32 },
}

/// Fires every `interval_ms` of simulation time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnTimer {
    pub interval_ms: u64,
    elapsed_ms: u64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Advance by `dt_ms`, returning how many times the timer fired
    pub fn advance(&mut self, dt_ms: u64) -> u64 {
        if self.interval_ms == 0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired
    }

    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }
}

/// Spawn cadences for a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnTimers {
    /// Plain fruit
    pub fruit: SpawnTimer,
    /// Power-up rolls
    pub power_up: SpawnTimer,
    /// Extra spawns while raining
    pub rain: SpawnTimer,
}

impl SpawnTimers {
    fn new(config: &GameConfig) -> Self {
        Self {
            fruit: SpawnTimer::new(config.fruit_interval_ms),
            power_up: SpawnTimer::new(config.power_up_interval_ms),
            rain: SpawnTimer::new(config.rain_spawn_interval_ms),
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    pub player: Player,
    pub control: GameControl,
    /// Falling entities (sorted by id for determinism)
    pub fruits: Vec<Fruit>,
    /// Deferred effects for this session
    pub schedule: Schedule,
    pub timers: SpawnTimers,
    /// Simulation clock; only advances while running
    pub clock_ms: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks left before the catcher may change lane again
    pub move_cooldown: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given configuration and seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, seed))
    }

    /// Create a new game state with the default configuration
    pub fn with_defaults(seed: u64) -> Self {
        Self::from_valid_config(GameConfig::default(), seed)
    }

    fn from_valid_config(config: GameConfig, seed: u64) -> Self {
        log::info!(
            "New session: seed={}, lanes={}, fruit every {}ms",
            seed,
            config.lanes,
            config.fruit_interval_ms
        );
        Self {
            player: Player::new(&config),
            timers: SpawnTimers::new(&config),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            control: GameControl::new(),
            fruits: Vec::new(),
            schedule: Schedule::new(),
            clock_ms: 0,
            time_ticks: 0,
            move_cooldown: 0,
            events: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Start over: fresh player, empty field, flags cleared, pending
    /// effects cancelled. The RNG stream carries on.
    pub fn reset(&mut self) {
        log::info!(
            "Session reset (score {}, {} ticks)",
            self.player.score,
            self.time_ticks
        );
        self.player = Player::new(&self.config);
        self.control.reset();
        self.schedule.new_session();
        self.timers = SpawnTimers::new(&self.config);
        self.fruits.clear();
        self.events.clear();
        self.clock_ms = 0;
        self.time_ticks = 0;
        self.move_cooldown = 0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity at the top of `lane`, returning its id
    pub fn spawn(&mut self, kind: FruitKind, lane: u32, depth: f32) -> u32 {
        let id = self.next_entity_id();
        let fruit = Fruit::new(kind, lane, self.config.lane_width(), depth).with_id(id);
        log::debug!("Spawned {} #{} in lane {}", kind.as_str(), id, lane);
        self.fruits.push(fruit);
        id
    }

    /// Uniform roll in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn random_lane(&mut self) -> u32 {
        self.rng.random_range(0..self.config.lanes)
    }

    pub fn random_depth(&mut self) -> f32 {
        self.rng.random_range(MIN_DEPTH..MAX_DEPTH)
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.fruits.sort_by_key(|f| f.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_timer_fires_per_interval() {
        let mut timer = SpawnTimer::new(100);
        assert_eq!(timer.advance(50), 0);
        assert_eq!(timer.advance(50), 1);
        assert_eq!(timer.advance(250), 2);
        assert_eq!(timer.advance(50), 1);
        timer.restart();
        assert_eq!(timer.advance(99), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            lanes: 0,
            ..Default::default()
        };
        assert_eq!(GameState::new(config, 1).err(), Some(ConfigError::NoLanes));
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let mut state = GameState::with_defaults(7);
        let a = state.spawn(FruitKind::Fruit, 0, 1.0);
        let b = state.spawn(FruitKind::Poison, 4, 1.0);
        assert!(b > a);
        assert_eq!(state.fruits.len(), 2);
        assert_eq!(state.fruits[1].pos.x, 720.0);
    }

    #[test]
    fn test_random_helpers_stay_in_range() {
        let mut state = GameState::with_defaults(42);
        for _ in 0..1000 {
            let lane = state.random_lane();
            assert!(lane < 5);
            let depth = state.random_depth();
            assert!((MIN_DEPTH..MAX_DEPTH).contains(&depth));
            let roll = state.roll();
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[test]
    fn test_reset_restores_fresh_session() {
        let mut state = GameState::with_defaults(3);
        state.spawn(FruitKind::Fruit, 1, 1.0);
        state.player.hearts = 0;
        state.player.score = 12;
        state.control.trigger_game_over();
        state.clock_ms = 9_000;
        let session = state.schedule.session();

        state.reset();

        assert!(state.fruits.is_empty());
        assert_eq!(state.player, Player::new(&state.config));
        assert_eq!(state.control, GameControl::new());
        assert_eq!(state.clock_ms, 0);
        assert_eq!(state.schedule.session(), session + 1);
    }
}
