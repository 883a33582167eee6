//! Bean Dash entry point
//!
//! Headless demo host: drives one autopiloted session against the real
//! clocks and mirrors the render commands into the log. Pass a JSON file
//! path to override the default tuning.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use bean_dash::config::GameConfig;
use bean_dash::render::RenderCommand;
use bean_dash::runner::FrameClock;
use bean_dash::sim::{GamePhase, GameState, ObstacleKind};

/// Hard stop for the demo run (two minutes at the target rate)
const MAX_DEMO_TICKS: u64 = 7200;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => GameConfig::default(),
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Bean Dash starting (seed {seed})");

    let mut state = GameState::new(config, seed).context("invalid configuration")?;
    let mut clock = FrameClock::new(&state);
    present(state.drain_commands());

    state.activate();

    let frame_dur = Duration::from_millis(16);
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        let frame_dt = now - last;
        last = now;

        autopilot(&mut state);
        clock.advance(&mut state, frame_dt);
        present(state.drain_commands());

        if state.phase == GamePhase::Ended {
            log::info!(
                "run over after {} ticks, final score {}",
                state.time_ticks,
                state.score
            );
            break;
        }
        if state.time_ticks >= MAX_DEMO_TICKS {
            log::info!("demo window elapsed at score {}", state.score);
            break;
        }
        std::thread::sleep(frame_dur);
    }
    Ok(())
}

fn load_config(path: &str) -> Result<GameConfig> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config = serde_json::from_str(&raw).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

/// Demo pilot: hop whenever the nearest oncoming floor obstacle demands
/// more altitude than the player currently has
fn autopilot(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    let config = state.config;
    let player_right = config.player_left + config.player_size;

    let nearest = state
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Lower && o.x + config.obstacle_width > config.player_left)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(obstacle) = nearest {
        let closing = obstacle.x - player_right;
        if closing < 120.0 && state.player.y < obstacle.height + 5.0 {
            state.activate();
        }
    }
}

/// Mirror the frame's commands into the log; a real host would replay them
/// against its drawing surface
fn present(commands: Vec<RenderCommand>) {
    for command in &commands {
        match command {
            RenderCommand::ScoreChanged { score } => log::info!("score: {score}"),
            RenderCommand::BannerShown { text } => log::info!("banner: {text}"),
            RenderCommand::BannerHidden => log::info!("banner hidden"),
            other => log::trace!("{other:?}"),
        }
    }
}
