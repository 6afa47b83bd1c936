//! Per-frame simulation tick
//!
//! Order within a tick: deferred effects, input, fall, catches, prune, spawn,
//! game-over check.

use glam::Vec2;

use super::fruit::{EffectResult, Fruit, FruitKind};
use super::logic::{determine_power_up_type, splash_particles};
use super::mouth::{mirror_mouth, steer_player};
use super::schedule::ScheduledEvent;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Raw camera-space mouth position (face-tracking control)
    pub mouth: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
    /// Start a fresh session
    pub restart: bool,
}

/// Advance the game state by `dt_ms` of simulation time
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) {
    state.events.clear();

    if input.restart {
        state.reset();
    }

    if input.pause {
        state.control.toggle_pause();
    }

    // Don't tick if paused or game over
    if state.control.is_paused() {
        return;
    }

    state.time_ticks += 1;
    state.clock_ms += dt_ms;

    for event in state.schedule.drain_due(state.clock_ms) {
        apply_scheduled(state, event);
    }

    apply_input(state, input);

    let raining = state.control.is_raining();
    let score = state.player.score;
    for fruit in &mut state.fruits {
        fruit.fall(raining, score);
    }

    let player = &state.player;
    let (caught, remaining): (Vec<Fruit>, Vec<Fruit>) = std::mem::take(&mut state.fruits)
        .into_iter()
        .partition(|f| f.check_collision(player));
    state.fruits = remaining;
    for fruit in &caught {
        apply_catch(state, fruit);
    }

    let floor = state.config.canvas_height;
    state.fruits.retain(|f| !f.is_off_screen(floor));

    spawn_on_timers(state, dt_ms);

    if !state.player.is_alive() {
        state.control.trigger_game_over();
        state.events.push(GameEvent::GameOver {
            score: state.player.score,
        });
        log::info!(
            "Game over: score {} after {} ticks",
            state.player.score,
            state.time_ticks
        );
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    // Tracking drops out as NaN; keep the catcher where it is
    if let Some(raw) = input.mouth.filter(|m| m.is_finite()) {
        let mouth = mirror_mouth(raw, state.config.canvas_width);
        steer_player(&mut state.player, mouth);
    }

    if state.move_cooldown > 0 {
        state.move_cooldown -= 1;
        return;
    }

    let player = &mut state.player;
    let lane = player.lane();
    if input.right {
        player.move_right();
    }
    if input.left {
        player.move_left();
    }
    if player.lane() != lane {
        state.move_cooldown = state.config.move_cooldown_frames;
    }
    if input.up {
        player.move_up();
    }
    if input.down {
        player.move_down();
    }
}

fn apply_catch(state: &mut GameState, fruit: &Fruit) {
    state.events.push(GameEvent::Caught {
        id: fruit.id,
        kind: fruit.kind,
        pos: fruit.pos,
        splash_particles: splash_particles(state.player.size),
    });
    if fruit.kind.is_power_up() {
        log::info!("Caught power-up {} #{}", fruit.kind.as_str(), fruit.id);
    } else {
        log::debug!("Caught {} #{}", fruit.kind.as_str(), fruit.id);
    }

    let hearts = state.player.hearts;
    let effect = fruit.apply_effect(&mut state.player);
    if state.player.hearts != hearts {
        state.events.push(GameEvent::HeartsChanged {
            hearts: state.player.hearts,
        });
    }

    match effect {
        EffectResult::None => {}
        EffectResult::TriggerRain => start_rain(state),
        EffectResult::Boosted { original_size } => {
            // A boost on top of a pending one extends it and keeps the
            // unboosted size as the revert target
            let restore = state
                .schedule
                .cancel_where(|e| matches!(e, ScheduledEvent::RevertSize { .. }))
                .into_iter()
                .find_map(|e| match e {
                    ScheduledEvent::RevertSize { original_size } => Some(original_size),
                    ScheduledEvent::EndRain => None,
                })
                .unwrap_or(original_size);
            state.schedule.schedule(
                state.clock_ms + state.config.big_board_duration_ms,
                ScheduledEvent::RevertSize {
                    original_size: restore,
                },
            );
            state.events.push(GameEvent::BoardBoosted {
                size: state.player.size,
            });
        }
    }
}

fn start_rain(state: &mut GameState) {
    let extended = !state
        .schedule
        .cancel_where(|e| *e == ScheduledEvent::EndRain)
        .is_empty();
    state.control.start_rain();
    state.timers.rain.restart();
    state.schedule.schedule(
        state.clock_ms + state.config.rain_duration_ms,
        ScheduledEvent::EndRain,
    );
    if extended {
        log::info!("Rain extended");
    } else {
        log::info!("Rain started");
        state.events.push(GameEvent::RainStarted);
    }
}

fn apply_scheduled(state: &mut GameState, event: ScheduledEvent) {
    match event {
        ScheduledEvent::EndRain => {
            state.control.end_rain();
            state.events.push(GameEvent::RainEnded);
            log::info!("Rain ended");
        }
        ScheduledEvent::RevertSize { original_size } => {
            state.player.size = original_size;
            state.events.push(GameEvent::BoardReverted {
                size: original_size,
            });
        }
    }
}

fn spawn_on_timers(state: &mut GameState, dt_ms: u64) {
    for _ in 0..state.timers.fruit.advance(dt_ms) {
        let lane = state.random_lane();
        let depth = state.random_depth();
        state.spawn(FruitKind::Fruit, lane, depth);
    }

    for _ in 0..state.timers.power_up.advance(dt_ms) {
        let roll = state.roll();
        let kind = determine_power_up_type(
            roll,
            state.control.is_rainy_fruits_active(),
            state.player.hearts,
        );
        if let Some(kind) = kind {
            let lane = state.random_lane();
            state.spawn(kind, lane, 1.0);
        }
    }

    if state.control.is_raining() {
        for _ in 0..state.timers.rain.advance(dt_ms) {
            let kind = if state.roll() < state.config.rain_poison_chance {
                FruitKind::Poison
            } else {
                FruitKind::Fruit
            };
            let lane = state.random_lane();
            state.spawn(kind, lane, 1.0);
        }
    }
}
