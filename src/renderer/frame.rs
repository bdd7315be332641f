//! Scene composition
//!
//! Turns the simulated scene into a flat list of drawable primitives plus
//! lights. The rendering collaborator draws whatever this returns.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::shapes::{Mesh, cylinder, sphere};
use super::vertex::colors;
use crate::consts::*;
use crate::sim::{Ball, Capsule, Phase, Scene};

/// Primitive shape of a draw item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Sphere,
    Cylinder,
}

/// One primitive placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub shape: ShapeKind,
    pub model: Mat4,
    pub color: [f32; 4],
}

/// Scene lighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { position: Vec3, intensity: f32 },
}

/// Lights of the vignette: soft ambient fill plus one point light up and to the right
pub const LIGHTS: [Light; 2] = [
    Light::Ambient { intensity: 0.5 },
    Light::Point {
        position: Vec3::new(10.0, 10.0, 10.0),
        intensity: 1.0,
    },
];

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: Phase,
    pub items: Vec<DrawItem>,
    pub lights: Vec<Light>,
    pub clear_color: [f32; 4],
}

/// Shared local-space meshes, one per shape kind
#[derive(Debug, Clone)]
pub struct Meshes {
    pub sphere: Mesh,
    pub cylinder: Mesh,
}

impl Default for Meshes {
    fn default() -> Self {
        Self::new()
    }
}

impl Meshes {
    /// Unit-radius meshes; draw items scale them into place
    pub fn new() -> Self {
        Self {
            sphere: sphere(1.0, MESH_SEGMENTS, MESH_SEGMENTS),
            cylinder: cylinder(1.0, 1.0, MESH_SEGMENTS),
        }
    }

    pub fn get(&self, shape: ShapeKind) -> &Mesh {
        match shape {
            ShapeKind::Sphere => &self.sphere,
            ShapeKind::Cylinder => &self.cylinder,
        }
    }
}

/// Build the draw list for the scene's current state
pub fn compose(scene: &Scene) -> Frame {
    let state = scene.state();
    let mut items = Vec::with_capacity(scene.capsules.len() * 3 + scene.balls.len());

    for capsule in &scene.capsules {
        items.extend(capsule_items(capsule));
    }
    for ball in &scene.balls {
        items.push(ball_item(ball));
    }

    Frame {
        tick: state.elapsed_ticks,
        phase: state.phase,
        items,
        lights: LIGHTS.to_vec(),
        clear_color: colors::BACKGROUND,
    }
}

/// Cylinder body plus two end-caps, rotated together around Z
pub fn capsule_items(capsule: &Capsule) -> [DrawItem; 3] {
    let group = Mat4::from_rotation_translation(
        Quat::from_rotation_z(capsule.rotation_z),
        capsule.position,
    );
    let cap = Vec3::splat(CAPSULE_RADIUS);
    let half = CAPSULE_BODY_LENGTH / 2.0;

    [
        DrawItem {
            shape: ShapeKind::Cylinder,
            model: group
                * Mat4::from_scale(Vec3::new(
                    CAPSULE_RADIUS,
                    CAPSULE_BODY_LENGTH,
                    CAPSULE_RADIUS,
                )),
            color: colors::CAPSULE,
        },
        DrawItem {
            shape: ShapeKind::Sphere,
            model: group * Mat4::from_scale_rotation_translation(cap, Quat::IDENTITY, Vec3::Y * half),
            color: colors::CAPSULE,
        },
        DrawItem {
            shape: ShapeKind::Sphere,
            model: group * Mat4::from_scale_rotation_translation(cap, Quat::IDENTITY, -Vec3::Y * half),
            color: colors::CAPSULE,
        },
    ]
}

pub fn ball_item(ball: &Ball) -> DrawItem {
    DrawItem {
        shape: ShapeKind::Sphere,
        model: Mat4::from_scale_rotation_translation(
            Vec3::splat(BALL_RADIUS),
            Quat::IDENTITY,
            ball.position,
        ),
        color: if ball.split {
            colors::BALL_SPLIT
        } else {
            colors::BALL
        },
    }
}
