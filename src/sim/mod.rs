//! Deterministic scene simulation
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, phase derived from the tick counter
//! - Producers take an immutable `SceneState` and return new owned state
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod ball;
pub mod capsule;
pub mod sequencer;
pub mod state;
pub mod tick;

pub use ball::{Ball, Motion};
pub use capsule::Capsule;
pub use sequencer::{MOVING_TICK, SPLIT_TICK, Sequencer, ms_to_ticks, phase_at};
pub use state::{Phase, Scene, SceneEvent, SceneState};
pub use tick::tick;
