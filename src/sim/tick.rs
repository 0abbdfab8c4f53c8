//! Per-frame scene update
//!
//! Two phases: Active runs the lanes, collapse and blast until everything has
//! settled, then ResettingDelay counts down and reinitializes the scene.
//! There is no terminal state.

use super::collapse;
use super::collision::resolve_impact;
use super::state::{Scene, SceneEvent, ScenePhase};

/// Advance the scene by `dt` seconds
pub fn tick(scene: &mut Scene, dt: f32) {
    debug_assert!(dt >= 0.0, "negative frame time");
    scene.events.clear();

    match scene.phase {
        ScenePhase::Active => tick_active(scene, dt),
        ScenePhase::ResettingDelay { elapsed } => tick_resetting(scene, elapsed + dt),
    }
}

/// True once every aircraft has crashed, every building is at the floor and
/// the blast has burned out
pub fn is_complete(scene: &Scene) -> bool {
    let min_height = scene.config.min_height;
    scene
        .lanes
        .iter()
        .all(|lane| lane.aircraft.crashed && lane.building.height <= min_height)
        && scene.particles.is_empty()
}

fn tick_active(scene: &mut Scene, dt: f32) {
    let Scene {
        config,
        rng,
        lanes,
        particles,
        events,
        ..
    } = scene;

    // Lanes are independent: one lane's impact never affects another's check
    for (index, lane) in lanes.iter_mut().enumerate() {
        if lane.aircraft.crashed {
            continue;
        }
        match resolve_impact(lane, config.nose_offset) {
            Some(origin) => {
                events.push(SceneEvent::Impact { lane: index });
                let count = particles.spawn(origin, rng);
                events.push(SceneEvent::BlastSpawned {
                    lane: index,
                    origin,
                    count,
                });
                log::debug!(
                    "Lane {index} impact at ({:.3}, {:.3}), {count} blast particles",
                    origin.x,
                    origin.y
                );
            }
            None => lane.aircraft.advance(config.plane_speed, dt),
        }
    }

    for (index, lane) in lanes.iter_mut().enumerate() {
        let was_flattened = lane.building.is_flattened(config.min_height);
        collapse::advance(
            &mut lane.building,
            dt,
            config.collapse_rate,
            config.min_height,
        );
        if !was_flattened && lane.building.is_flattened(config.min_height) {
            events.push(SceneEvent::CollapseFinished { lane: index });
            log::debug!("Lane {index} building down to {:.3}", lane.building.height);
        }
    }

    particles.advance(dt);

    if is_complete(scene) {
        scene.phase = ScenePhase::ResettingDelay { elapsed: 0.0 };
        scene.events.push(SceneEvent::SceneComplete);
        log::info!(
            "Cycle {} complete, resetting in {:.1}s",
            scene.cycle,
            scene.config.reset_delay
        );
    }
}

fn tick_resetting(scene: &mut Scene, elapsed: f32) {
    if elapsed < scene.config.reset_delay {
        scene.phase = ScenePhase::ResettingDelay { elapsed };
        return;
    }

    scene.reinitialize();
    scene.cycle += 1;
    scene.events.push(SceneEvent::Reset { cycle: scene.cycle });
    log::info!("Scene reset, starting cycle {}", scene.cycle);
}
