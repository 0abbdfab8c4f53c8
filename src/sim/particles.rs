//! Blast particle pool
//!
//! Holds at most one blast at a time: a new spawn discards whatever is left
//! of the previous one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::config::BlastConfig;
use crate::polar_to_cartesian;

/// One blast particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left; always > 0 for a particle in the pool
    pub lifetime: f32,
}

/// Owns the live blast particles
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: BlastConfig,
    particles: Vec<BlastParticle>,
}

impl ParticleSystem {
    pub fn new(config: BlastConfig) -> Self {
        let particles = Vec::with_capacity(config.particles);
        Self { config, particles }
    }

    /// Replace the pool with a fresh batch at `origin`. Returns the batch size.
    pub fn spawn(&mut self, origin: Vec2, rng: &mut RandomSource) -> usize {
        self.particles.clear();
        let band = self.config.speed;
        for _ in 0..self.config.particles {
            let angle = rng.uniform(0.0, std::f32::consts::TAU);
            let speed = rng.uniform(band.min, band.max);
            let lifetime = rng.upto(self.config.duration);
            self.particles.push(BlastParticle {
                pos: origin,
                vel: polar_to_cartesian(speed, angle),
                lifetime,
            });
        }
        self.particles.len()
    }

    /// Integrate every particle, then drop the expired ones
    pub fn advance(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.lifetime -= dt;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
        debug_assert!(self.particles.iter().all(|p| p.lifetime > 0.0));
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlastParticle> {
        self.particles.iter()
    }

    /// Remaining lifetime as a fraction of the blast duration, for fading
    pub fn alpha(&self, particle: &BlastParticle) -> f32 {
        (particle.lifetime / self.config.duration).clamp(0.0, 1.0)
    }

    pub fn config(&self) -> &BlastConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn system() -> ParticleSystem {
        ParticleSystem::new(BlastConfig::default())
    }

    #[test]
    fn test_spawn_batch() {
        let mut particles = system();
        let mut rng = RandomSource::with_seed(1);
        assert!(particles.is_empty());

        let origin = Vec2::new(0.5, -0.2);
        assert_eq!(particles.spawn(origin, &mut rng), BLAST_PARTICLES);
        assert_eq!(particles.len(), BLAST_PARTICLES);
        for p in particles.iter() {
            assert_eq!(p.pos, origin);
            let speed = p.vel.length();
            assert!(speed >= BLAST_SPEED_MIN - 1e-5 && speed < BLAST_SPEED_MAX + 1e-5);
            assert!(p.lifetime > 0.0 && p.lifetime <= BLAST_DURATION);
        }
    }

    #[test]
    fn test_second_spawn_replaces_first() {
        let mut particles = system();
        let mut rng = RandomSource::with_seed(2);
        particles.spawn(Vec2::ZERO, &mut rng);
        particles.advance(0.1);
        particles.spawn(Vec2::new(0.5, -0.2), &mut rng);
        assert_eq!(particles.len(), BLAST_PARTICLES);
        assert!(particles.iter().all(|p| p.pos == Vec2::new(0.5, -0.2)));
    }

    #[test]
    fn test_advance_integrates_before_pruning() {
        let mut particles = system();
        particles.particles.push(BlastParticle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            lifetime: 0.05,
        });
        particles.particles.push(BlastParticle {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.0, 1.0),
            lifetime: 0.5,
        });

        particles.advance(0.1);
        assert_eq!(particles.len(), 1);
        let survivor = particles.iter().next().unwrap();
        assert!((survivor.pos.y - 0.1).abs() < 1e-6);
        assert!((survivor.lifetime - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_everything_expires_after_duration() {
        let mut particles = system();
        let mut rng = RandomSource::with_seed(9);
        particles.spawn(Vec2::ZERO, &mut rng);
        let mut elapsed = 0.0;
        while elapsed < BLAST_DURATION {
            particles.advance(0.016);
            elapsed += 0.016;
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_alpha() {
        let particles = system();
        let p = BlastParticle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            lifetime: BLAST_DURATION / 2.0,
        };
        assert!((particles.alpha(&p) - 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn expired_particles_never_survive(seed in any::<u64>(), steps in prop::collection::vec(0.0f32..0.1, 1..40)) {
            let mut particles = system();
            let mut rng = RandomSource::with_seed(seed);
            particles.spawn(Vec2::ZERO, &mut rng);
            let initial: Vec<f32> = particles.iter().map(|p| p.lifetime).collect();
            let mut elapsed = 0.0f32;
            for dt in steps {
                particles.advance(dt);
                elapsed += dt;
                prop_assert!(particles.iter().all(|p| p.lifetime > 0.0));
                // Only particles whose initial lifetime outlasts the elapsed time remain
                let expected = initial.iter().filter(|&&l| l - elapsed > 1e-4).count();
                prop_assert!(particles.len() <= initial.iter().filter(|&&l| l - elapsed > -1e-4).count());
                prop_assert!(particles.len() >= expected);
                prop_assert!(particles.len() <= BLAST_PARTICLES);
            }
        }
    }
}
