//! Deterministic scene simulation
//!
//! All scene logic lives here. This module must stay pure:
//! - `dt` is always passed in, never sampled
//! - Seeded RNG only
//! - Lanes evaluated in a stable order
//! - No rendering or platform dependencies

pub mod collapse;
pub mod collision;
pub mod particles;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{has_reached, resolve_impact};
pub use particles::{BlastParticle, ParticleSystem};
pub use rng::RandomSource;
pub use snapshot::{AircraftView, BuildingView, LaneView, ParticleView, SceneSnapshot};
pub use state::{Aircraft, Building, Lane, Scene, SceneEvent, ScenePhase, Scenery};
pub use tick::{is_complete, tick};
