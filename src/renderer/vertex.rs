//! Vertex types for 3D meshes

use bytemuck::{Pod, Zeroable};

/// Lit mesh vertex with position and normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const CAPSULE: [f32; 4] = [0.0, 0.0, 1.0, 1.0]; // Blue
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // Red, before the split
    pub const BALL_SPLIT: [f32; 4] = [0.0, 0.5, 0.0, 1.0]; // CSS green
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);

        let verts = [Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0])];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), Vertex::STRIDE);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
    }
}
