//! Catch detection
//!
//! Falling items are points; the catcher is a horizontal bar whose half width
//! is the x tolerance. The y tolerance is fixed for every item kind.

use glam::Vec2;

use crate::consts::CATCH_Y_TOLERANCE;

/// Whether an item at `item` is caught by a catcher of width `catcher_size`
/// centered at `catcher`. Both tolerances are inclusive.
pub fn catcher_overlaps(item: Vec2, catcher: Vec2, catcher_size: f32) -> bool {
    let delta = (item - catcher).abs();
    delta.y <= CATCH_Y_TOLERANCE && delta.x <= catcher_size / 2.0
}
