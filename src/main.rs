//! Skyline Loop entry point
//!
//! Runs the scene loop headless: sample the clock, tick, hand the snapshot to
//! the renderer, sleep. Pass a JSON config path as the only argument to
//! override defaults; `RUST_LOG` controls verbosity.

use std::time::Duration;

use env_logger::{Builder, Env};
use skyline_loop::renderer::{HeadlessRenderer, SceneRenderer};
use skyline_loop::sim::{RandomSource, Scene, tick};
use skyline_loop::{Clock, Config};

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("Skyline Loop starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default config");
            Config::default()
        }
    };

    let rng = match config.run.seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::from_entropy(),
    };
    log::info!("Scene initialized with seed: {}", rng.seed());

    let mut scene = Scene::new(config.scene.clone(), rng);
    let mut clock = Clock::new(config.run.max_frame_dt);
    let mut renderer = HeadlessRenderer::default();
    let pacing = Duration::from_millis(config.run.frame_pacing_ms);

    loop {
        let dt = clock.tick();
        tick(&mut scene, dt);
        renderer.present(&scene.snapshot());

        if let Some(max_cycles) = config.run.max_cycles
            && scene.cycle >= max_cycles
        {
            break;
        }

        std::thread::sleep(pacing);
    }

    log::info!(
        "Stopped after {} cycles, {} frames",
        scene.cycle,
        renderer.frames()
    );
}
