//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advanced only through synchronous `tick()` / `spawn_tick()` calls
//! - Seeded RNG only
//! - No timers, rendering, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision, player_aabb};
pub use spawn::spawn_tick;
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Player, PlayerState};
pub use tick::tick;
