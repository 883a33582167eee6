//! Render command surface
//!
//! The simulation never touches a drawing API. Each mutation that the
//! presentation layer needs to mirror is recorded as a command; the host
//! drains the buffer once per frame and replays it against whatever surface
//! it owns (DOM, canvas, terminal, test collector).

use serde::Serialize;

use crate::sim::ObstacleKind;

/// One presentation-visible change produced by the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderCommand {
    /// A new obstacle entered at the right edge
    ObstacleSpawned {
        id: u32,
        kind: ObstacleKind,
        x: f32,
        height: f32,
    },
    /// An obstacle scrolled to a new horizontal position
    ObstacleMoved { id: u32, x: f32 },
    /// An obstacle left the arena (or was cleared on restart)
    ObstacleRemoved { id: u32 },
    /// The player's bottom edge moved to a new height
    PlayerMoved { y: f32 },
    /// The derived score changed
    ScoreChanged { score: u32 },
    /// Show the banner with the given text
    BannerShown { text: &'static str },
    /// Hide the banner
    BannerHidden,
}
