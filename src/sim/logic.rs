//! Spawn-rate and difficulty curves
//!
//! Pure functions so the balance can be tested without a running session.

use super::fruit::FruitKind;
use crate::consts::*;
use crate::map_range;

/// Chance that a power-up roll produces an extra heart.
/// Rises as the player gets closer to death.
pub fn extra_heart_probability(hearts: i32) -> f32 {
    match hearts {
        h if h <= 1 => 0.5,
        2 => 0.2,
        _ => 0.05,
    }
}

/// Pick what a power-up roll spawns, if anything.
///
/// `roll` is uniform in `[0, 1)`. While rainy fruits are active the field is
/// flooded with poison (60%) and fruit. Otherwise poison takes `[0, 0.1)`,
/// rain `[0.1, 0.3)`, and the rest is offered to the extra heart.
///
/// The big-board branch sits behind the rain threshold and can never be
/// taken. This matches the shipped spawn table; big boards only appear when
/// created explicitly.
pub fn determine_power_up_type(roll: f32, rainy_active: bool, hearts: i32) -> Option<FruitKind> {
    if rainy_active {
        return if roll < 0.6 {
            Some(FruitKind::Poison)
        } else {
            Some(FruitKind::Fruit)
        };
    }

    let extra_heart = extra_heart_probability(hearts);
    if roll < 0.1 {
        Some(FruitKind::Poison)
    } else if roll < 0.3 {
        Some(FruitKind::Rainy)
    } else if roll < 0.2 {
        Some(FruitKind::BigBoard)
    } else if roll < extra_heart {
        Some(FruitKind::ExtraHeart)
    } else {
        None
    }
}

/// Poison fall speed: `base_speed` scaled linearly from x1 at score 0 to x3 at
/// score 100, flat beyond that
pub fn poison_speed(base_speed: f32, score: u32) -> f32 {
    let capped = score.min(POISON_SCORE_CAP) as f32;
    let multiplier = map_range(capped, 0.0, POISON_SCORE_CAP as f32, 1.0, POISON_MAX_MULTIPLIER);
    base_speed * multiplier
}

/// Number of splash particles for a catch, larger catchers splash more
pub fn splash_particles(player_size: f32) -> u32 {
    map_range(
        player_size,
        PLAYER_MIN_SIZE,
        PLAYER_MAX_SIZE,
        MIN_SPLASH_PARTICLES,
        MAX_SPLASH_PARTICLES,
    )
    .round()
    .max(0.0) as u32
}
