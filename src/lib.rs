//! Skyline Loop - a self-resetting 2D collapse vignette
//!
//! Core modules:
//! - `sim`: Deterministic scene simulation (lanes, impacts, collapse, blast particles)
//! - `clock`: Wall-clock sampling into bounded per-frame deltas
//! - `config`: Data-driven scene tuning loaded from JSON
//! - `renderer`: Snapshot to vertex-batch handoff for an external renderer

pub mod clock;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use clock::Clock;
pub use config::{Config, LoopConfig, SceneConfig};
pub use error::ConfigError;

use glam::Vec2;

/// Scene configuration defaults
///
/// Coordinates are normalized device coordinates: x and y in [-1, 1].
pub mod consts {
    /// Horizontal aircraft speed (units/s)
    pub const PLANE_SPEED: f32 = 0.3;
    /// Distance from an aircraft's anchor to its nose (drawn length at scale)
    pub const NOSE_OFFSET: f32 = 0.4;
    /// Scale applied to the aircraft outline when drawn
    pub const PLANE_SCALE: f32 = 0.4;

    /// Building defaults
    pub const BUILDING_WIDTH: f32 = 0.15;
    pub const BUILDING_HEIGHT: f32 = 1.0;
    /// Collapse floor - a collapsed building stops shrinking once at or below this
    pub const MIN_HEIGHT: f32 = 0.1;
    /// Height lost per second while collapsing
    pub const COLLAPSE_RATE: f32 = 0.3;
    /// Buildings stand on this line
    pub const GROUND_Y: f32 = -0.5;
    pub const ANTENNA_HEIGHT: f32 = 0.2;

    /// Blast particles
    pub const BLAST_PARTICLES: usize = 50;
    /// Longest possible particle lifetime (seconds)
    pub const BLAST_DURATION: f32 = 0.5;
    pub const BLAST_SPEED_MIN: f32 = 0.2;
    pub const BLAST_SPEED_MAX: f32 = 0.7;

    /// Scenery
    pub const NUM_CLOUDS: usize = 5;
    pub const NUM_TREES: usize = 6;
    pub const CLOUD_SIZE: f32 = 0.1;
    pub const TREE_WIDTH: f32 = 0.05;
    pub const TREE_HEIGHT: f32 = 0.15;
    pub const TREE_Y: f32 = -0.7;

    /// Pause between scene completion and reset (seconds)
    pub const RESET_DELAY: f32 = 3.0;

    /// Largest dt handed to the simulation after a stall
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Post-frame sleep (~60 frames per second)
    pub const FRAME_PACING_MS: u64 = 16;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(2.0, FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 2.0).abs() < 1e-6);

        let v = polar_to_cartesian(0.5, PI);
        assert!((v.x + 0.5).abs() < 1e-6);
    }
}
