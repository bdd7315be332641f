//! Scene state and core simulation types
//!
//! Everything a frame needs lives here and is plain owned data.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::capsule::Capsule;
use super::sequencer::Sequencer;
use crate::consts::*;

/// Coarse stage of the scripted sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Single ball, nothing spinning yet
    #[default]
    Idle,
    /// Two balls exist and are dropping into place
    Split,
    /// Balls roll and capsules spin (terminal)
    Moving,
}

/// Immutable per-frame snapshot handed to every producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneState {
    pub phase: Phase,
    pub elapsed_ticks: u64,
}

impl SceneState {
    /// Balls may start rolling
    pub fn moving(&self) -> bool {
        self.phase == Phase::Moving
    }

    /// Capsules spin
    pub fn rolling(&self) -> bool {
        self.phase == Phase::Moving
    }

    /// The single ball has been replaced by two
    pub fn split(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Elapsed scene time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ticks * 1000 / TICK_RATE_HZ
    }
}

/// Things worth telling the host about, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    PhaseChanged { phase: Phase, tick: u64 },
    BallBounced { ball_id: u32, direction: f32 },
    BallRejoined { ball_id: u32 },
}

/// The whole animated scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub sequencer: Sequencer,
    /// Active balls (sorted by id)
    pub balls: Vec<Ball>,
    pub capsules: [Capsule; 2],
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<SceneEvent>,
    next_id: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Scene at tick zero: one ball above center, two idle capsules
    pub fn new() -> Self {
        let mut scene = Self {
            sequencer: Sequencer::new(),
            balls: Vec::with_capacity(2),
            capsules: CAPSULE_POSITIONS.map(Capsule::new),
            events: Vec::new(),
            next_id: 1,
        };

        let id = scene.next_entity_id();
        scene.balls.push(Ball::new(id, BALL_START, false));

        scene
    }

    /// Current snapshot
    pub fn state(&self) -> SceneState {
        self.sequencer.state()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.state().phase
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the single ball with the two split balls
    pub fn split_balls(&mut self) {
        self.balls.clear();
        for start in SPLIT_BALL_STARTS {
            let id = self.next_entity_id();
            self.balls.push(Ball::new(id, start, true));
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
