//! Two-stage one-shot timer driving the scene phase
//!
//! Delays are converted to tick thresholds up front, so the sequence is a
//! pure function of the tick counter and replays identically.

use serde::{Deserialize, Serialize};

use super::state::{Phase, SceneState};
use crate::consts::*;

/// Convert a delay to whole ticks, rounding up
pub const fn ms_to_ticks(ms: u64) -> u64 {
    (ms * TICK_RATE_HZ).div_ceil(1000)
}

/// Tick at which the ball splits
pub const SPLIT_TICK: u64 = ms_to_ticks(SPLIT_DELAY_MS);
/// Tick at which balls roll and capsules spin
pub const MOVING_TICK: u64 = SPLIT_TICK + ms_to_ticks(MOVE_DELAY_MS);

/// Phase for a given tick count
pub fn phase_at(elapsed_ticks: u64) -> Phase {
    if elapsed_ticks >= MOVING_TICK {
        Phase::Moving
    } else if elapsed_ticks >= SPLIT_TICK {
        Phase::Split
    } else {
        Phase::Idle
    }
}

/// Deterministic tick counter with fixed phase thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sequencer {
    state: SceneState,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Advance one tick, returning the phase entered on this tick (if any)
    pub fn advance(&mut self) -> Option<Phase> {
        self.state.elapsed_ticks += 1;
        let phase = phase_at(self.state.elapsed_ticks);
        if phase == self.state.phase {
            return None;
        }
        self.state.phase = phase;
        Some(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(SPLIT_TICK, 120);
        assert_eq!(MOVING_TICK, 180);
        assert_eq!(ms_to_ticks(0), 0);
        assert_eq!(ms_to_ticks(1), 1);
        assert_eq!(ms_to_ticks(17), 2);
    }

    #[test]
    fn test_phase_at() {
        assert_eq!(phase_at(0), Phase::Idle);
        assert_eq!(phase_at(SPLIT_TICK - 1), Phase::Idle);
        assert_eq!(phase_at(SPLIT_TICK), Phase::Split);
        assert_eq!(phase_at(MOVING_TICK - 1), Phase::Split);
        assert_eq!(phase_at(MOVING_TICK), Phase::Moving);
        assert_eq!(phase_at(u64::MAX), Phase::Moving);
    }

    #[test]
    fn test_advance_fires_each_transition_once() {
        let mut seq = Sequencer::new();
        let mut entered = Vec::new();
        for _ in 0..MOVING_TICK * 3 {
            if let Some(phase) = seq.advance() {
                entered.push((phase, seq.state().elapsed_ticks));
            }
        }
        assert_eq!(
            entered,
            vec![(Phase::Split, SPLIT_TICK), (Phase::Moving, MOVING_TICK)]
        );
        assert_eq!(seq.state().phase, Phase::Moving);
    }

    #[test]
    fn test_split_to_moving_delay() {
        let mut seq = Sequencer::new();
        while seq.state().phase != Phase::Split {
            seq.advance();
        }
        let split_ms = seq.state().elapsed_ms();
        while seq.state().phase != Phase::Moving {
            seq.advance();
        }
        assert_eq!(split_ms, SPLIT_DELAY_MS);
        assert_eq!(seq.state().elapsed_ms() - split_ms, MOVE_DELAY_MS);
    }
}
