//! Vertex types for wireframe rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Line-list vertex with world position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    pub fn at(p: Vec3, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, p.z, color)
    }

    /// Raw bytes of a vertex slice, ready for a GPU upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const WALL: [f32; 4] = [0.85, 0.85, 0.9, 1.0];
    pub const ITEM: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
    pub const TRAP: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const ENEMY: [f32; 4] = [0.7, 0.3, 0.9, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * 4);
        let v = [Vertex::at(Vec3::new(1.0, 2.0, 3.0), colors::WALL)];
        assert_eq!(Vertex::as_bytes(&v).len(), 28);
    }
}
