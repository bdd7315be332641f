//! Mesh generation for 3D primitives
//!
//! Meshes are built once in local space; per-object placement is a model
//! matrix on the draw item.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices
            .push(Vertex::new(position.to_array(), normal.to_array()));
        index
    }
}

/// UV sphere centered on the origin
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(((w + 1) * (h + 1)) as usize),
        indices: Vec::with_capacity((w * (h - 1) * 6) as usize),
    };

    for iy in 0..=h {
        let phi = iy as f32 / h as f32 * PI;
        for ix in 0..=w {
            let theta = ix as f32 / w as f32 * TAU;
            let normal = Vec3::new(
                -theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            mesh.push(normal * radius, normal);
        }
    }

    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            // Pole rows collapse to a single triangle
            if iy != 0 {
                mesh.indices.extend([a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend([b, c, d]);
            }
        }
    }

    mesh
}

/// Closed cylinder along Y, centered on the origin
pub fn cylinder(radius: f32, height: f32, radial_segments: u32) -> Mesh {
    let segments = radial_segments.max(3);
    let half = height / 2.0;
    let mut mesh = Mesh::default();

    // Side wall: top ring then bottom ring
    for y in [half, -half] {
        for ix in 0..=segments {
            let theta = ix as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push(Vec3::new(radius * sin, y, radius * cos), Vec3::new(sin, 0.0, cos));
        }
    }
    let row = segments + 1;
    for ix in 0..segments {
        let a = ix;
        let b = row + ix;
        let c = row + ix + 1;
        let d = ix + 1;
        mesh.indices.extend([a, b, d, b, c, d]);
    }

    // End caps
    for (y, up) in [(half, 1.0f32), (-half, -1.0)] {
        let normal = Vec3::new(0.0, up, 0.0);
        let center = mesh.push(Vec3::new(0.0, y, 0.0), normal);
        for ix in 0..=segments {
            let theta = ix as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for ix in 0..segments {
            let i = center + 1 + ix;
            if up > 0.0 {
                mesh.indices.extend([i, i + 1, center]);
            } else {
                mesh.indices.extend([i + 1, i, center]);
            }
        }
    }

    mesh
}
