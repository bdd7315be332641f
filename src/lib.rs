//! Pill Split - a tiny scripted 3D vignette
//!
//! A ball drops between two capsules, splits in two, and the halves roll
//! outward while the capsules spin.
//!
//! Core modules:
//! - `sim`: Deterministic scene simulation (sequencer, ball and capsule producers)
//! - `renderer`: Scene composition for a rendering collaborator (meshes, lights, camera)
//! - `settings`: Host runtime settings

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Phase, Scene, SceneState, tick};

/// Scene constants
pub mod consts {
    use glam::Vec3;

    /// Fixed frame rate of the simulation
    pub const TICK_RATE_HZ: u64 = 60;
    /// Seconds per tick
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ as f32;

    /// Delay from scene start until the ball splits
    pub const SPLIT_DELAY_MS: u64 = 2000;
    /// Delay from the split until balls roll and capsules spin
    pub const MOVE_DELAY_MS: u64 = 1000;

    /// Per-frame drop of a falling ball
    pub const FALL_STEP: f32 = 0.05;
    /// Per-frame angle advance of a rolling ball (radians)
    pub const ROLL_STEP: f32 = 0.05;
    /// Per-frame capsule spin around Z (radians)
    pub const SPIN_STEP: f32 = 0.05;

    /// A rolling ball with |x| below this has rejoined the center
    pub const REJOIN_THRESHOLD: f32 = 0.5;
    /// A split ball with |x| above this bounces off its twin
    pub const BOUNCE_THRESHOLD: f32 = 1.5;
    /// Heights at or below this count as ground (absorbs f32 drift of repeated steps)
    pub const GROUND_EPSILON: f32 = 1e-4;

    /// Start position of the single ball
    pub const BALL_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Start positions of the split balls
    pub const SPLIT_BALL_STARTS: [Vec3; 2] = [Vec3::new(-1.5, 1.0, 0.0), Vec3::new(1.5, 1.0, 0.0)];
    /// Fixed capsule positions
    pub const CAPSULE_POSITIONS: [Vec3; 2] = [Vec3::new(-1.5, 0.0, 0.0), Vec3::new(1.5, 0.0, 0.0)];

    /// Ball and capsule end-cap radius
    pub const BALL_RADIUS: f32 = 0.5;
    pub const CAPSULE_RADIUS: f32 = 0.5;
    /// Length of the capsule's cylindrical body
    pub const CAPSULE_BODY_LENGTH: f32 = 2.0;
    /// Radial segments used for mesh generation
    pub const MESH_SEGMENTS: u32 = 32;
}
