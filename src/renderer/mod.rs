//! Render handoff
//!
//! Turns a [`SceneSnapshot`] into a colored triangle list ready for upload.
//! Window, context and presentation belong to whatever implements
//! [`SceneRenderer`]; the crate ships a headless one.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::SceneSnapshot;

/// Receives one snapshot per frame, after the update for that frame
pub trait SceneRenderer {
    fn present(&mut self, snapshot: &SceneSnapshot);
}

/// Back-to-front triangle list for a whole frame
pub fn build_frame(snapshot: &SceneSnapshot) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    shapes::ground(&mut out);
    for &cloud in &snapshot.clouds {
        shapes::cloud(&mut out, cloud);
    }
    for &tree in &snapshot.trees {
        shapes::tree(&mut out, tree);
    }
    for lane in &snapshot.lanes {
        shapes::building(&mut out, &lane.building);
    }
    for lane in &snapshot.lanes {
        shapes::aircraft(&mut out, &lane.aircraft);
    }
    for particle in &snapshot.particles {
        shapes::particle(&mut out, particle);
    }

    out
}

/// Builds each frame's vertex batch without a GPU
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_batch_bytes: usize,
}

impl HeadlessRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Size of the most recent batch as it would be uploaded
    pub fn last_batch_bytes(&self) -> usize {
        self.last_batch_bytes
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn present(&mut self, snapshot: &SceneSnapshot) {
        let vertices = build_frame(snapshot);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        self.last_batch_bytes = bytes.len();
        self.frames += 1;
        log::trace!(
            "Frame {}: {} vertices, {} bytes, {} particles",
            self.frames,
            vertices.len(),
            bytes.len(),
            snapshot.particles.len()
        );
    }
}
