//! Scene tuning and loop settings
//!
//! Loaded from an optional JSON file; every field falls back to the defaults
//! in [`crate::consts`], so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Half-open `[min, max)` range for random draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if `value` lies inside `[min, max)`, or equals `min` for a degenerate band
    pub fn contains(&self, value: f32) -> bool {
        value == self.min || (value >= self.min && value < self.max)
    }

    fn check(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min <= self.max) {
            return Err(ConfigError::Invalid(format!(
                "{name}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Starting layout of one aircraft and its target building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneLayout {
    /// Aircraft x at the start of each cycle
    pub start_x: f32,
    /// Aircraft y (fixed for the whole flight)
    pub altitude: f32,
    /// Building x
    pub building_x: f32,
}

/// Blast particle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastConfig {
    /// Particles per impact
    pub particles: usize,
    /// Upper bound on particle lifetime (seconds)
    pub duration: f32,
    /// Emission speed range
    pub speed: Band,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            particles: BLAST_PARTICLES,
            duration: BLAST_DURATION,
            speed: Band::new(BLAST_SPEED_MIN, BLAST_SPEED_MAX),
        }
    }
}

/// Decorative scenery scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub clouds: usize,
    pub trees: usize,
    pub cloud_x: Band,
    pub cloud_y: Band,
    pub tree_x: Band,
    pub tree_y: f32,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            clouds: NUM_CLOUDS,
            trees: NUM_TREES,
            cloud_x: Band::new(-1.0, 1.0),
            cloud_y: Band::new(0.5, 0.9),
            tree_x: Band::new(-1.0, 1.0),
            tree_y: TREE_Y,
        }
    }
}

/// Everything the simulation needs to build and run a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub plane_speed: f32,
    pub nose_offset: f32,
    pub building_height: f32,
    pub min_height: f32,
    pub collapse_rate: f32,
    /// Seconds between completion and reset
    pub reset_delay: f32,
    pub blast: BlastConfig,
    /// Aircraft/building pairs, evaluated independently in this order
    pub lanes: Vec<LaneLayout>,
    pub scenery: SceneryConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            plane_speed: PLANE_SPEED,
            nose_offset: NOSE_OFFSET,
            building_height: BUILDING_HEIGHT,
            min_height: MIN_HEIGHT,
            collapse_rate: COLLAPSE_RATE,
            reset_delay: RESET_DELAY,
            blast: BlastConfig::default(),
            lanes: vec![
                LaneLayout {
                    start_x: -1.2,
                    altitude: 0.0,
                    building_x: 0.0,
                },
                LaneLayout {
                    start_x: -1.2,
                    altitude: -0.2,
                    building_x: 0.5,
                },
            ],
            scenery: SceneryConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.is_empty() {
            return Err(ConfigError::Invalid("at least one lane is required".into()));
        }
        if self.blast.particles == 0 {
            return Err(ConfigError::Invalid("blast.particles must be > 0".into()));
        }
        for (name, value) in [
            ("plane_speed", self.plane_speed),
            ("collapse_rate", self.collapse_rate),
            ("reset_delay", self.reset_delay),
            ("blast.duration", self.blast.duration),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }
        if !(self.min_height > 0.0 && self.min_height < self.building_height) {
            return Err(ConfigError::Invalid(format!(
                "min_height {} must lie in (0, building_height {})",
                self.min_height, self.building_height
            )));
        }
        if self.blast.speed.min < 0.0 {
            return Err(ConfigError::Invalid("blast.speed must be non-negative".into()));
        }
        self.blast.speed.check("blast.speed")?;
        self.scenery.cloud_x.check("scenery.cloud_x")?;
        self.scenery.cloud_y.check("scenery.cloud_y")?;
        self.scenery.tree_x.check("scenery.tree_x")?;
        Ok(())
    }
}

/// Settings for the frame loop driving the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Fixed RNG seed; `None` draws one from the OS at startup
    pub seed: Option<u64>,
    /// Upper clamp on measured frame time
    pub max_frame_dt: f32,
    /// Sleep after each frame
    pub frame_pacing_ms: u64,
    /// Stop after this many resets; `None` loops forever
    pub max_cycles: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_frame_dt: MAX_FRAME_DT,
            frame_pacing_ms: FRAME_PACING_MS,
            max_cycles: None,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scene: SceneConfig,
    #[serde(rename = "loop")]
    pub run: LoopConfig,
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()?;
        if !(self.run.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid("loop.max_frame_dt must be > 0".into()));
        }
        // One clamped step may undershoot the floor; it must not reach zero
        let largest_step = self.scene.collapse_rate * self.run.max_frame_dt;
        if largest_step >= self.scene.min_height {
            return Err(ConfigError::Invalid(format!(
                "collapse_rate * loop.max_frame_dt ({largest_step}) must be below min_height ({})",
                self.scene.min_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scene.lanes.len(), 2);
        assert_eq!(config.scene.blast.particles, BLAST_PARTICLES);
        assert_eq!(config.run.max_cycles, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(
            r#"{ "scene": { "plane_speed": 0.6, "blast": { "particles": 10 } }, "loop": { "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.scene.plane_speed, 0.6);
        assert_eq!(config.scene.blast.particles, 10);
        assert_eq!(config.scene.blast.duration, BLAST_DURATION);
        assert_eq!(config.scene.reset_delay, RESET_DELAY);
        assert_eq!(config.run.seed, Some(7));
        assert_eq!(config.run.frame_pacing_ms, FRAME_PACING_MS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Config::from_json(r#"{ "scene": { "lanes": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "scene": { "min_height": 2.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            Config::from_json(r#"{ "scene": { "blast": { "speed": { "min": 1.0, "max": 0.5 } } } }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "scene": { "blast": { "particles": 0 } } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "loop": { "max_frame_dt": 5.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            Config::from_json(r#"{ "scene": { "collapse_rate": 2.0 }, "loop": { "max_frame_dt": 0.05 } }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_accepted_frame_cap_keeps_buildings_standing() {
        use crate::sim::{RandomSource, Scene, tick};

        let config =
            Config::from_json(r#"{ "scene": { "collapse_rate": 1.9 }, "loop": { "max_frame_dt": 0.05 } }"#)
                .unwrap();
        let mut scene = Scene::new(config.scene.clone(), RandomSource::with_seed(17));
        for _ in 0..400 {
            tick(&mut scene, config.run.max_frame_dt);
            assert!(scene.lanes.iter().all(|lane| lane.building.height > 0.0));
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/skyline-loop.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_band_contains() {
        let band = Band::new(0.5, 0.9);
        assert!(band.contains(0.5));
        assert!(band.contains(0.7));
        assert!(!band.contains(0.9));
        assert!(Band::new(0.3, 0.3).contains(0.3));
    }
}
