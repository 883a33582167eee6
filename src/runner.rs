//! Wall-clock scheduling shim
//!
//! The simulation owns no timers; this clock turns real frame deltas into
//! synchronous core calls. Two independent accumulators share one frame
//! delta: a fixed-timestep accumulator drives `tick()` at the target rate
//! (with a substep cap against the spiral of death), and a wall-clock
//! accumulator fires `spawn_tick()` on the configured interval. Spawn
//! cadence therefore tracks real time while movement tracks ticks, and the
//! relative order of the two within a frame is not part of the contract.
//! Both clocks run only while the session does.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TARGET_TPS};
use crate::sim::{GamePhase, GameState, spawn_tick, tick};

/// Longest frame delta fed to the tick accumulator; anything slower is
/// treated as a hitch and clamped
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Drives a session's tick and spawn clocks from wall-clock frame deltas
#[derive(Debug)]
pub struct FrameClock {
    fixed_dt: Duration,
    spawn_interval: Duration,
    max_substeps: u32,
    accumulator: Duration,
    spawn_accumulator: Duration,
}

impl FrameClock {
    /// Clock for the given session at the default tick rate
    pub fn new(state: &GameState) -> Self {
        Self::with_rate(state, TARGET_TPS, MAX_SUBSTEPS)
    }

    pub fn with_rate(state: &GameState, target_tps: u32, max_substeps: u32) -> Self {
        Self {
            fixed_dt: Duration::from_secs_f64(1.0 / target_tps.max(1) as f64),
            spawn_interval: Duration::from_millis(state.config.spawn_interval_ms),
            max_substeps: max_substeps.max(1),
            accumulator: Duration::ZERO,
            spawn_accumulator: Duration::ZERO,
        }
    }

    /// Feed one frame's elapsed wall-clock time into the session
    pub fn advance(&mut self, state: &mut GameState, frame_dt: Duration) {
        if state.phase != GamePhase::Running {
            // Idle time never counts toward the next spawn or tick backlog
            self.accumulator = Duration::ZERO;
            self.spawn_accumulator = Duration::ZERO;
            return;
        }
        // The spawn clock sees real elapsed time and catches up through
        // hitches; only the tick backlog is clamped
        self.spawn_accumulator += frame_dt;
        while self.spawn_accumulator >= self.spawn_interval {
            self.spawn_accumulator -= self.spawn_interval;
            spawn_tick(state);
        }

        let sim_dt = frame_dt.min(MAX_FRAME_DELTA);
        let (steps, remaining, dropped) =
            plan_steps(self.accumulator + sim_dt, self.fixed_dt, self.max_substeps);
        self.accumulator = remaining;
        if dropped > Duration::ZERO {
            log::debug!("dropped {} ms of tick backlog", dropped.as_millis());
        }
        for _ in 0..steps {
            tick(state);
            if state.phase != GamePhase::Running {
                break;
            }
        }
    }
}

/// Fixed steps owed for the accumulated time, capped at `max_steps`
///
/// Returns (steps to run, leftover accumulator, dropped backlog). Backlog
/// past the cap is dropped rather than carried, so a long stall cannot
/// snowball into ever-larger frames.
fn plan_steps(accumulated: Duration, fixed_dt: Duration, max_steps: u32) -> (u32, Duration, Duration) {
    let mut remaining = accumulated;
    let mut steps = 0u32;
    while remaining >= fixed_dt && steps < max_steps {
        remaining -= fixed_dt;
        steps += 1;
    }
    if remaining >= fixed_dt {
        (steps, Duration::ZERO, remaining)
    } else {
        (steps, remaining, Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use super::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 4242).unwrap();
        state.activate();
        state
    }

    #[test]
    fn test_plan_steps_exact_division() {
        let dt = Duration::from_millis(10);
        let (steps, remaining, dropped) = plan_steps(Duration::from_millis(30), dt, 8);
        assert_eq!(steps, 3);
        assert_eq!(remaining, Duration::ZERO);
        assert_eq!(dropped, Duration::ZERO);
    }

    #[test]
    fn test_plan_steps_keeps_remainder() {
        let dt = Duration::from_millis(10);
        let (steps, remaining, dropped) = plan_steps(Duration::from_millis(25), dt, 8);
        assert_eq!(steps, 2);
        assert_eq!(remaining, Duration::from_millis(5));
        assert_eq!(dropped, Duration::ZERO);
    }

    #[test]
    fn test_plan_steps_drops_backlog_past_cap() {
        let dt = Duration::from_millis(10);
        let (steps, remaining, dropped) = plan_steps(Duration::from_millis(500), dt, 8);
        assert_eq!(steps, 8);
        assert_eq!(remaining, Duration::ZERO);
        assert_eq!(dropped, Duration::from_millis(420));
    }

    #[test]
    fn test_ticks_follow_the_fixed_rate() {
        let mut state = running_state();
        let mut clock = FrameClock::with_rate(&state, 60, 8);

        // Four 16.67 ms frames: one tick each
        for _ in 0..4 {
            clock.advance(&mut state, Duration::from_micros(16_667));
        }
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_spawn_cadence_is_wall_clock_based() {
        let mut state = running_state();
        // One sim step per frame at most, so spawning clearly outpaces ticking
        let mut clock = FrameClock::with_rate(&state, 60, 1);

        // 4 x 500 ms = 2000 ms: exactly one pair regardless of tick backlog
        for _ in 0..4 {
            clock.advance(&mut state, Duration::from_millis(500));
        }
        assert_eq!(state.obstacles.len(), 2);

        // Another 2000 ms: second pair
        for _ in 0..4 {
            clock.advance(&mut state, Duration::from_millis(500));
        }
        assert_eq!(state.obstacles.len(), 4);
    }

    #[test]
    fn test_clocks_stop_with_the_session() {
        let mut state = running_state();
        let mut clock = FrameClock::new(&state);

        clock.advance(&mut state, Duration::from_millis(1900));
        state.end_run();

        // Ended: no spawns, no ticks, accumulators wiped
        let ticks_at_end = state.time_ticks;
        clock.advance(&mut state, Duration::from_millis(1900));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.time_ticks, ticks_at_end);

        // A restart waits the full interval before the first spawn
        state.activate();
        clock.advance(&mut state, Duration::from_millis(1900));
        assert!(state.obstacles.is_empty());
        clock.advance(&mut state, Duration::from_millis(100));
        assert_eq!(state.obstacles.len(), 2);
    }
}
