//! Collision detection for the scrolling obstacle field
//!
//! The player's box never moves horizontally; obstacles sweep through its
//! fixed span. Each obstacle is only ever approached through the gap its
//! pair leaves open, so the vertical test compares a single edge per kind.

use glam::Vec2;

use crate::config::GameConfig;
use super::state::{Obstacle, ObstacleKind};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }
}

/// The player's box: fixed horizontal span, vertical span at the given height
pub fn player_aabb(config: &GameConfig, y: f32) -> Aabb {
    Aabb::from_pos_size(
        Vec2::new(config.player_left, y),
        Vec2::splat(config.player_size),
    )
}

/// Gap-aware collision between the player box and one obstacle
///
/// Horizontal overlap is a strict open-interval test. Vertically only the
/// gap-facing edge is compared: a Lower obstacle is hit when the player's
/// bottom is below its top, an Upper obstacle when the player's top is above
/// its bottom. Grazes clipping an obstacle's anchored-side corner therefore
/// read as misses - a deliberate tolerance, not full box intersection.
///
/// Pure function of its arguments; identical inputs always agree.
pub fn check_collision(player: &Aabb, obstacle: &Obstacle, config: &GameConfig) -> bool {
    let overlaps_x =
        player.max.x > obstacle.x && player.min.x < obstacle.x + config.obstacle_width;
    if !overlaps_x {
        return false;
    }

    match obstacle.kind {
        ObstacleKind::Lower => player.min.y < obstacle.height,
        ObstacleKind::Upper => player.max.y > config.arena_height - obstacle.height,
    }
}
