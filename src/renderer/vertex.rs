//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (world units, y down) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.439, 0.773, 0.808, 1.0];
    pub const GROUND: [f32; 4] = [0.776, 0.494, 0.290, 1.0];
    pub const GROUND_MARK: [f32; 4] = [0.0, 0.0, 0.0, 0.06];
    pub const PIPE: [f32; 4] = [0.180, 0.545, 0.341, 1.0];
    pub const PIPE_EDGE: [f32; 4] = [0.098, 0.435, 0.239, 1.0];
    pub const BIRD: [f32; 4] = [1.0, 0.824, 0.247, 1.0];
    pub const BEAK: [f32; 4] = [1.0, 0.549, 0.259, 1.0];
    pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
