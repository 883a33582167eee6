//! Bean Dash - a side-scrolling obstacle-hopper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `render`: Command list the presentation layer consumes
//! - `runner`: Wall-clock scheduling shim driving the tick and spawn clocks
//! - `config`: Data-driven game balance and validation

pub mod config;
pub mod render;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use render::RenderCommand;

/// Game configuration constants (default tuning)
pub mod consts {
    /// Fixed simulation timestep target (ticks per second)
    pub const TARGET_TPS: u32 = 60;
    /// Maximum sim substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults - the player never moves horizontally, the world scrolls
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_LEFT: f32 = 10.0;
    /// Resting height of the player's bottom edge above the arena bottom
    pub const FLOOR_Y: f32 = 10.0;

    /// Vertical motion (units per tick)
    pub const GRAVITY: f32 = 1.5;
    pub const JUMP_RISE: f32 = 10.0;
    /// Ticks a jump keeps rising before gravity takes over
    pub const JUMP_TICKS: u32 = 20;

    /// Obstacle defaults
    pub const SCROLL_SPEED: f32 = 2.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Random obstacle height range, half-open
    pub const OBSTACLE_HEIGHT_MIN: f32 = 50.0;
    pub const OBSTACLE_HEIGHT_MAX: f32 = 300.0;
    /// Shortest an obstacle may end up after gap adjustment
    pub const MIN_OBSTACLE_HEIGHT: f32 = 10.0;
    /// Guaranteed passable opening between a pair's two obstacles
    pub const MIN_GAP: f32 = 150.0;

    /// Wall-clock delay between obstacle pair spawns
    pub const SPAWN_INTERVAL_MS: u64 = 2000;

    /// Banner text
    pub const START_BANNER: &str = "Click to Start";
    pub const GAME_OVER_BANNER: &str = "Game Over! Click to Restart.";
}
