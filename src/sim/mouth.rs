//! Face-tracking control
//!
//! The camera feed is mirrored, so a raw mouth keypoint has its x flipped
//! before it is mapped onto the playfield.

use glam::Vec2;

use super::player::Player;

/// Mirror a raw camera-space mouth point onto the canvas
pub fn mirror_mouth(raw: Vec2, canvas_width: f32) -> Vec2 {
    Vec2::new((canvas_width - raw.x).clamp(0.0, canvas_width), raw.y)
}

/// Lane containing canvas x (clamped to the outer lanes)
pub fn lane_at(x: f32, lane_width: f32, lanes: u32) -> u32 {
    let lane = (x / lane_width).floor().max(0.0) as u32;
    lane.min(lanes.saturating_sub(1))
}

/// Move the catcher under a mirrored mouth point
pub fn steer_player(player: &mut Player, mouth: Vec2) {
    let lane = lane_at(mouth.x, player.lane_width(), player.lanes());
    player.move_to_lane(lane);
    player.set_y(mouth.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::GameConfig;

    #[test]
    fn test_mirror_flips_and_clamps() {
        assert_eq!(mirror_mouth(Vec2::new(100.0, 50.0), 800.0), Vec2::new(700.0, 50.0));
        assert_eq!(mirror_mouth(Vec2::new(-20.0, 50.0), 800.0).x, 800.0);
        assert_eq!(mirror_mouth(Vec2::new(900.0, 50.0), 800.0).x, 0.0);
    }

    #[test]
    fn test_lane_at() {
        assert_eq!(lane_at(0.0, 160.0, 5), 0);
        assert_eq!(lane_at(159.9, 160.0, 5), 0);
        assert_eq!(lane_at(160.0, 160.0, 5), 1);
        assert_eq!(lane_at(800.0, 160.0, 5), 4);
        assert_eq!(lane_at(-5.0, 160.0, 5), 0);
    }

    #[test]
    fn test_steer_player() {
        let mut player = Player::new(&GameConfig::default());
        let mouth = mirror_mouth(Vec2::new(700.0, 250.0), 800.0);
        steer_player(&mut player, mouth);
        assert_eq!(player.lane(), 0);
        assert_eq!(player.x(), 80.0);
        assert_eq!(player.y(), 250.0);

        steer_player(&mut player, Vec2::new(790.0, 10.0));
        assert_eq!(player.lane(), 4);
        assert_eq!(player.y(), 200.0);
    }
}
