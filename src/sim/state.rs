//! Scene state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`Scene`] aggregate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use super::rng::RandomSource;
use crate::config::{LaneLayout, SceneConfig, SceneryConfig};

/// Current phase of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Aircraft fly, buildings collapse, particles animate
    Active,
    /// Simulation frozen; only the reset countdown runs
    ResettingDelay { elapsed: f32 },
}

/// Notable transitions raised during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// Aircraft in `lane` reached its building
    Impact { lane: usize },
    /// Blast batch created at `origin`
    BlastSpawned { lane: usize, origin: Vec2, count: usize },
    /// Building in `lane` reached the collapse floor
    CollapseFinished { lane: usize },
    /// Every lane resolved and the blast has burned out
    SceneComplete,
    /// Entity state reinitialized; `cycle` is the new cycle number
    Reset { cycle: u64 },
}

/// An aircraft flying level toward its building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Anchor (tail end); the nose sits `nose_offset` further along x
    pub pos: Vec2,
    pub crashed: bool,
}

impl Aircraft {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            crashed: false,
        }
    }

    /// Move forward along x. y never changes.
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.pos.x += speed * dt;
    }
}

/// A building standing on the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub height: f32,
    pub original_height: f32,
    pub collapsed: bool,
}

impl Building {
    pub fn new(x: f32, height: f32) -> Self {
        Self {
            x,
            height,
            original_height: height,
            collapsed: false,
        }
    }

    /// True once collapsed and at or under the floor
    pub fn is_flattened(&self, min_height: f32) -> bool {
        self.collapsed && self.height <= min_height
    }
}

/// One aircraft paired with the building it hits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub aircraft: Aircraft,
    pub building: Building,
}

impl Lane {
    pub fn from_layout(layout: &LaneLayout, building_height: f32) -> Self {
        Self {
            aircraft: Aircraft::new(layout.start_x, layout.altitude),
            building: Building::new(layout.building_x, building_height),
        }
    }
}

/// Decorative clouds and trees, scattered once per cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    pub clouds: Vec<Vec2>,
    pub trees: Vec<Vec2>,
}

impl Scenery {
    pub fn scatter(config: &SceneryConfig, rng: &mut RandomSource) -> Self {
        let clouds = (0..config.clouds)
            .map(|_| {
                let x = rng.uniform(config.cloud_x.min, config.cloud_x.max);
                let y = rng.uniform(config.cloud_y.min, config.cloud_y.max);
                Vec2::new(x, y)
            })
            .collect();
        let trees = (0..config.trees)
            .map(|_| Vec2::new(rng.uniform(config.tree_x.min, config.tree_x.max), config.tree_y))
            .collect();
        Self { clouds, trees }
    }
}

/// Complete scene state
#[derive(Debug, Clone)]
pub struct Scene {
    pub(crate) config: SceneConfig,
    pub(crate) rng: RandomSource,
    /// Aircraft/building pairs in evaluation order
    pub lanes: Vec<Lane>,
    pub scenery: Scenery,
    pub particles: ParticleSystem,
    pub phase: ScenePhase,
    /// Completed resets since startup
    pub cycle: u64,
    /// Events raised by the most recent tick
    pub(crate) events: Vec<SceneEvent>,
}

impl Scene {
    /// Build a scene in its initial Active configuration
    pub fn new(config: SceneConfig, mut rng: RandomSource) -> Self {
        let lanes = initial_lanes(&config);
        let scenery = Scenery::scatter(&config.scenery, &mut rng);
        let particles = ParticleSystem::new(config.blast.clone());
        Self {
            config,
            rng,
            lanes,
            scenery,
            particles,
            phase: ScenePhase::Active,
            cycle: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Seed of the scene's random stream
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// True while waiting out the reset delay (the "game over" frame)
    pub fn show_game_over(&self) -> bool {
        matches!(self.phase, ScenePhase::ResettingDelay { .. })
    }

    /// Put every entity back to its starting state and re-scatter scenery
    pub fn reinitialize(&mut self) {
        self.lanes = initial_lanes(&self.config);
        self.scenery = Scenery::scatter(&self.config.scenery, &mut self.rng);
        self.particles.clear();
        self.phase = ScenePhase::Active;
    }
}

fn initial_lanes(config: &SceneConfig) -> Vec<Lane> {
    config
        .lanes
        .iter()
        .map(|layout| Lane::from_layout(layout, config.building_height))
        .collect()
}
