//! Vertex type for the scene's triangle list

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and color, laid out for direct GPU upload
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

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for scene elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.98, 1.0];
    pub const GRASS: [f32; 4] = [0.18, 0.55, 0.34, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TRUNK: [f32; 4] = [0.5, 0.35, 0.05, 1.0];
    pub const FOLIAGE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BUILDING: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
    pub const WINDOW: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const ANTENNA: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const FUSELAGE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const WING: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
    pub const PORTHOLE: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
    /// Blast color; alpha comes from the particle
    pub const BLAST: [f32; 3] = [1.0, 0.5, 0.0];
}
