//! # DRIFT Headless Demo
//!
//! Drives the simulation and the buffer sync exactly the way a windowed
//! renderer would - seed, prime, tick, upload - minus the GPU. Reads
//! `drift.toml` from the working directory when present, otherwise runs the
//! standard 3000-entity scene, and prints the frame statistics on exit.

use drift::{DemoConfig, FrameLoop};

/// Config file picked up from the working directory when present.
const CONFIG_PATH: &str = "drift.toml";

fn main() {
    let config = DemoConfig::load_or_default(CONFIG_PATH).unwrap_or_else(|error| {
        eprintln!("drift: {error}");
        std::process::exit(1);
    });

    println!(
        "DRIFT headless demo: {} entities, seed {}, {} frames",
        config.entity_count, config.seed, config.frames
    );

    let mut frame_loop = FrameLoop::new(config);
    frame_loop.run();

    let model = frame_loop.model();
    println!(
        "final moving position: ({:.3}, {:.3}, {:.3}), sweep slot {}",
        model.moving_position().x,
        model.moving_position().y,
        model.moving_position().z,
        model.current_active_index()
    );

    frame_loop.stats().print_summary();
}
