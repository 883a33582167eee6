//! Obstacle pair generation
//!
//! Pairs are a pure function of the seeded RNG stream: two heights drawn
//! uniformly, shrunk together until the opening between them meets the
//! configured minimum gap, clamped so neither half degenerates.

use rand::Rng;

use crate::config::GameConfig;
use crate::render::RenderCommand;
use super::state::{GamePhase, GameState, Obstacle, ObstacleKind};

/// Shrink a drawn height pair until the opening between them is at least
/// `min_gap`, then floor both at the configured minimum height.
///
/// The clamp wins over the gap when the two conflict under extreme tuning;
/// validated configs leave enough arena for both to hold.
pub(crate) fn adjusted_pair_heights(h1: f32, h2: f32, config: &GameConfig) -> (f32, f32) {
    let remaining = config.arena_height - (h1 + h2);
    let (h1, h2) = if remaining < config.min_gap {
        let adjustment = (config.min_gap - remaining) / 2.0;
        (h1 - adjustment, h2 - adjustment)
    } else {
        (h1, h2)
    };
    (
        h1.max(config.min_obstacle_height),
        h2.max(config.min_obstacle_height),
    )
}

/// Spawn one Upper/Lower pair at the right edge. No-op unless Running.
pub fn spawn_tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    let config = state.config;
    let h1 = state.rng.random_range(config.height_min..config.height_max);
    let h2 = state.rng.random_range(config.height_min..config.height_max);
    let (upper_height, lower_height) = adjusted_pair_heights(h1, h2, &config);

    let pair = state.next_pair_id();
    let x = config.arena_width;
    for (kind, height) in [
        (ObstacleKind::Upper, upper_height),
        (ObstacleKind::Lower, lower_height),
    ] {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind,
            x,
            height,
            pair,
        });
        state.push_command(RenderCommand::ObstacleSpawned { id, kind, x, height });
    }

    log::debug!("spawned pair {pair}: upper {upper_height:.0}, lower {lower_height:.0}");
}
