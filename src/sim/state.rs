//! Game state and core simulation types
//!
//! Everything a session owns lives here: the player's vertical state
//! machine, the scrolling obstacle field, the derived score, and the
//! Idle/Running/Ended lifecycle. The tick and spawn clocks mutate it through
//! the functions in `tick` and `spawn`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::consts::{GAME_OVER_BANNER, START_BANNER};
use crate::render::RenderCommand;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activation
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on a collision, waiting for a restart activation
    Ended,
}

/// Player vertical motion - grounded, climbing a jump, or falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Grounded,
    /// Jump in progress; climbs a fixed amount per tick until exhausted
    Rising { ticks_left: u32 },
    Falling,
}

/// The player entity
///
/// Never moves horizontally - the world scrolls past it instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Height of the bottom edge above the arena bottom
    pub y: f32,
    pub state: PlayerState,
}

impl Player {
    fn at_rest(floor_y: f32) -> Self {
        Self {
            y: floor_y,
            state: PlayerState::Grounded,
        }
    }

    /// Begin a jump. A jump can cancel a fall but cannot stack on an
    /// active climb, so this is a no-op while already rising.
    pub fn activate_jump(&mut self, jump_ticks: u32) {
        if matches!(self.state, PlayerState::Rising { .. }) {
            return;
        }
        self.state = PlayerState::Rising {
            ticks_left: jump_ticks,
        };
    }
}

/// Which arena edge an obstacle hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Anchored to the top edge, extends downward
    Upper,
    /// Anchored to the bottom edge, extends upward
    Lower,
}

/// A scrolling obstacle; always spawned as half of an Upper/Lower pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Left edge, in arena coordinates
    pub x: f32,
    pub height: f32,
    /// Shared by both halves of a spawn pair
    pub pair: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Derived each tick: count of surviving pairs on screen
    pub score: u32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    next_id: u32,
    next_pair: u32,
    commands: Vec<RenderCommand>,
}

impl GameState {
    /// Create a session with the given tuning and seed
    ///
    /// Rejects configurations that would make every spawn unplayable or the
    /// integration degenerate.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            player: Player::at_rest(config.floor_y),
            obstacles: Vec::new(),
            time_ticks: 0,
            next_id: 1,
            next_pair: 1,
            commands: Vec::new(),
        };
        state.push_command(RenderCommand::BannerShown {
            text: START_BANNER,
        });
        state.push_command(RenderCommand::PlayerMoved { y: state.player.y });
        Ok(state)
    }

    /// Allocate a new obstacle ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Allocate a new pair ID
    pub(crate) fn next_pair_id(&mut self) -> u32 {
        let pair = self.next_pair;
        self.next_pair += 1;
        pair
    }

    pub(crate) fn push_command(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Take the commands accumulated since the last drain
    pub fn drain_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Begin a run. Valid from Idle or Ended; a running session is untouched.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Running {
            return;
        }
        let stale = std::mem::take(&mut self.obstacles);
        for obstacle in stale {
            self.push_command(RenderCommand::ObstacleRemoved { id: obstacle.id });
        }
        self.score = 0;
        self.time_ticks = 0;
        self.player = Player::at_rest(self.config.floor_y);
        self.phase = GamePhase::Running;
        self.push_command(RenderCommand::ScoreChanged { score: 0 });
        self.push_command(RenderCommand::PlayerMoved { y: self.player.y });
        self.push_command(RenderCommand::BannerHidden);
        log::info!("session started (seed {})", self.seed);
    }

    /// The single external input signal: starts a session, or jumps mid-run
    pub fn activate(&mut self) {
        if self.phase == GamePhase::Running {
            self.player.activate_jump(self.config.jump_ticks);
        } else {
            self.start();
        }
    }

    /// End the current run (collision detected). The spawn and tick clocks
    /// observe Ended and stop on their own.
    pub(crate) fn end_run(&mut self) {
        self.phase = GamePhase::Ended;
        self.push_command(RenderCommand::BannerShown {
            text: GAME_OVER_BANNER,
        });
        log::info!(
            "run ended at tick {} with score {}",
            self.time_ticks,
            self.score
        );
    }
}
