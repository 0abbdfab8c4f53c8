//! Read-only view of a scene for the renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Scene, ScenePhase};
use crate::consts::GROUND_Y;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub pos: Vec2,
    pub crashed: bool,
    /// Crashed aircraft are not drawn
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingView {
    pub x: f32,
    pub height: f32,
    /// Top edge: ground line plus height
    pub roof_y: f32,
    pub collapsed: bool,
    pub antenna: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneView {
    pub aircraft: AircraftView,
    pub building: BuildingView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining lifetime as a fraction of the blast duration
    pub alpha: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub phase: ScenePhase,
    pub show_game_over: bool,
    pub cycle: u64,
    pub lanes: Vec<LaneView>,
    pub clouds: Vec<Vec2>,
    pub trees: Vec<Vec2>,
    pub particles: Vec<ParticleView>,
}

impl Scene {
    /// Capture the state produced by the most recent tick
    pub fn snapshot(&self) -> SceneSnapshot {
        // The rightmost building carries the antenna
        let antenna_lane = self.lanes.len().saturating_sub(1);
        let lanes = self
            .lanes
            .iter()
            .enumerate()
            .map(|(index, lane)| LaneView {
                aircraft: AircraftView {
                    pos: lane.aircraft.pos,
                    crashed: lane.aircraft.crashed,
                    visible: !lane.aircraft.crashed,
                },
                building: BuildingView {
                    x: lane.building.x,
                    height: lane.building.height,
                    roof_y: GROUND_Y + lane.building.height,
                    collapsed: lane.building.collapsed,
                    antenna: index == antenna_lane,
                },
            })
            .collect();

        let particles = self
            .particles
            .iter()
            .map(|p| ParticleView {
                pos: p.pos,
                alpha: self.particles.alpha(p),
            })
            .collect();

        SceneSnapshot {
            phase: self.phase,
            show_game_over: self.show_game_over(),
            cycle: self.cycle,
            lanes,
            clouds: self.scenery.clouds.clone(),
            trees: self.scenery.trees.clone(),
            particles,
        }
    }
}
