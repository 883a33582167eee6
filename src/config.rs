//! Data-driven game balance
//!
//! Every tunable the simulation reads lives here so a host can override the
//! stock constants at construction. Validation happens once, up front:
//! a config that would make every spawn unplayable is rejected instead of
//! silently degrading mid-session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration values, reported at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive (got {width}x{height})")]
    ArenaDegenerate { width: f32, height: f32 },
    #[error("player size must be positive (got {0})")]
    PlayerDegenerate(f32),
    #[error("player resting at {floor} with size {size} does not fit a {arena_height} arena")]
    PlayerTallerThanArena {
        floor: f32,
        size: f32,
        arena_height: f32,
    },
    #[error("gap {gap} plus two minimum obstacles ({min_height} each) exceeds arena height {arena_height}")]
    GapTallerThanArena {
        gap: f32,
        min_height: f32,
        arena_height: f32,
    },
    #[error("gap {gap} is too narrow for a {player} unit player")]
    GapNarrowerThanPlayer { gap: f32, player: f32 },
    #[error("obstacle height range [{min}, {max}) is empty or non-positive")]
    HeightRangeEmpty { min: f32, max: f32 },
    #[error("obstacle width must be positive (got {0})")]
    ObstacleWidthDegenerate(f32),
    #[error("scroll speed must be positive (got {0})")]
    ScrollSpeedDegenerate(f32),
    #[error("jump must rise a positive amount for at least one tick")]
    JumpDegenerate,
    #[error("gravity must be positive (got {0})")]
    GravityDegenerate(f32),
    #[error("spawn interval must be non-zero")]
    SpawnIntervalZero,
}

/// All simulation tunables, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width in world units
    pub arena_width: f32,
    /// Arena height in world units
    pub arena_height: f32,
    /// Player bounding-box edge length
    pub player_size: f32,
    /// Fixed left edge of the player box (the world scrolls, the player doesn't)
    pub player_left: f32,
    /// Resting height of the player's bottom edge
    pub floor_y: f32,
    /// Per-tick fall decrement when not rising
    pub gravity: f32,
    /// Per-tick climb while a jump is active
    pub jump_rise: f32,
    /// Number of ticks a jump keeps climbing
    pub jump_ticks: u32,
    /// Per-tick leftward obstacle translation
    pub scroll_speed: f32,
    /// Obstacle width (constant across all obstacles)
    pub obstacle_width: f32,
    /// Random height range for a freshly drawn obstacle, half-open
    pub height_min: f32,
    pub height_max: f32,
    /// Floor applied to heights after gap adjustment
    pub min_obstacle_height: f32,
    /// Guaranteed opening between a pair's obstacles
    pub min_gap: f32,
    /// Wall-clock milliseconds between pair spawns
    pub spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            player_left: PLAYER_LEFT,
            floor_y: FLOOR_Y,
            gravity: GRAVITY,
            jump_rise: JUMP_RISE,
            jump_ticks: JUMP_TICKS,
            scroll_speed: SCROLL_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            height_min: OBSTACLE_HEIGHT_MIN,
            height_max: OBSTACLE_HEIGHT_MAX,
            min_obstacle_height: MIN_OBSTACLE_HEIGHT,
            min_gap: MIN_GAP,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Highest the player's bottom edge can sit without poking out the top
    #[inline]
    pub fn ceiling_y(&self) -> f32 {
        self.arena_height - self.player_size
    }

    /// Check every tunable against the invariants the simulation assumes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::ArenaDegenerate {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.player_size <= 0.0 {
            return Err(ConfigError::PlayerDegenerate(self.player_size));
        }
        if self.floor_y < 0.0 || self.floor_y + self.player_size > self.arena_height {
            return Err(ConfigError::PlayerTallerThanArena {
                floor: self.floor_y,
                size: self.player_size,
                arena_height: self.arena_height,
            });
        }
        if self.min_obstacle_height <= 0.0
            || self.min_gap + 2.0 * self.min_obstacle_height > self.arena_height
        {
            return Err(ConfigError::GapTallerThanArena {
                gap: self.min_gap,
                min_height: self.min_obstacle_height,
                arena_height: self.arena_height,
            });
        }
        if self.min_gap < self.player_size {
            return Err(ConfigError::GapNarrowerThanPlayer {
                gap: self.min_gap,
                player: self.player_size,
            });
        }
        if self.height_min <= 0.0 || self.height_min >= self.height_max {
            return Err(ConfigError::HeightRangeEmpty {
                min: self.height_min,
                max: self.height_max,
            });
        }
        if self.obstacle_width <= 0.0 {
            return Err(ConfigError::ObstacleWidthDegenerate(self.obstacle_width));
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::ScrollSpeedDegenerate(self.scroll_speed));
        }
        if self.jump_rise <= 0.0 || self.jump_ticks == 0 {
            return Err(ConfigError::JumpDegenerate);
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::GravityDegenerate(self.gravity));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::SpawnIntervalZero);
        }
        Ok(())
    }
}
