//! Fruit Catcher headless runner
//!
//! Plays a seeded autoplay session against the simulation core and logs the
//! outcome. Usage: `fruit-catcher [settings.json] [seed]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Catcher (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives the core directly
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use fruit_catcher::Settings;
    use fruit_catcher::consts::FRAME_MS;
    use fruit_catcher::sim::{FruitKind, GameEvent, GameState, TickInput, tick};

    /// Give up after this much simulated time (ms)
    const MAX_SESSION_MS: u64 = 5 * 60 * 1000;
    const DEFAULT_SEED: u64 = 12345;

    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                log::info!("Loaded settings from {path}");
                Settings::from_json(&json)?
            }
            None => Settings::default(),
        };
        let seed = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => DEFAULT_SEED,
        };

        log::info!(
            "Fruit speed {}, player speed {}, player size {}, {} lanes",
            settings.fruit_speed.as_str(),
            settings.player_speed.as_str(),
            settings.player_size.as_str(),
            settings.lanes
        );

        let mut state = GameState::new(settings.to_config()?, seed)?;
        let mut catches = 0u32;

        while !state.control.is_game_over() && state.clock_ms < MAX_SESSION_MS {
            let input = autopilot(&state);
            tick(&mut state, &input, FRAME_MS);
            catches += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Caught { .. }))
                .count() as u32;
        }

        log::info!(
            "Session finished ({:?}) after {:.1}s: score {}, hearts {}, {} catches",
            state.control.phase(),
            state.clock_ms as f64 / 1000.0,
            state.player.score,
            state.player.hearts,
            catches
        );
        println!("{}", state.player.score);
        Ok(())
    }

    /// Chase the lowest catchable item, stepping out of the way of poison
    fn autopilot(state: &GameState) -> TickInput {
        let player = &state.player;
        let lane_of = |x: f32| (x / player.lane_width()) as u32;
        let above = |y: f32| y <= player.y() + 15.0;

        let poison_overhead = state.fruits.iter().any(|f| {
            f.kind == FruitKind::Poison
                && lane_of(f.pos.x) == player.lane()
                && above(f.pos.y)
                && player.y() - f.pos.y < 120.0
        });

        let target = state
            .fruits
            .iter()
            .filter(|f| f.kind != FruitKind::Poison && above(f.pos.y))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|f| lane_of(f.pos.x));

        let mut input = TickInput::default();
        match target {
            Some(lane) if lane > player.lane() => input.right = true,
            Some(lane) if lane < player.lane() => input.left = true,
            _ if poison_overhead => {
                if player.lane() + 1 < player.lanes() {
                    input.right = true;
                } else {
                    input.left = true;
                }
            }
            _ => {}
        }
        input
    }
}
