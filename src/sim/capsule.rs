//! Capsule transform producer

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::SceneState;
use crate::consts::SPIN_STEP;

/// A capsule pinned in place, spinning around Z once the scene rolls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    pub position: Vec3,
    /// Accumulated spin (radians, never wrapped)
    pub rotation_z: f32,
}

impl Capsule {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation_z: 0.0,
        }
    }

    pub fn step(&self, scene: SceneState) -> Capsule {
        let mut next = *self;
        if scene.rolling() {
            next.rotation_z += SPIN_STEP;
        }
        next
    }

    pub fn advance(&mut self, scene: SceneState) {
        *self = self.step(scene);
    }
}
