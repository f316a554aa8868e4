//! # Soak Test
//!
//! Long-running check of the published invariants against the full stack
//! (model + sync + staging buffers), at production entity counts. The unit
//! tests pin single-tick behavior; this binary proves nothing drifts over
//! tens of thousands of ticks.
//!
//! Exits non-zero on the first violated invariant.

use std::time::Instant;

use drift::core::{Model, SimulationConfig, UniformRng};
use drift::rendering::{SimulationSync, StagingBuffer};
use drift::shared::{Vec3, Vec4, BOUNCE_STEP};

/// Entities in the soak scene.
const ENTITY_COUNT: u32 = 3000;

/// Ticks to run.
const TICKS: u64 = 50_000;

fn main() {
    let config = SimulationConfig {
        entity_count: ENTITY_COUNT,
        centre: Vec3::ZERO,
        unit_length: 1.0,
    };
    let mut model = Model::new(&config, UniformRng::from_seed(0x50AC));
    let mut positions = StagingBuffer::from_slice(model.positions());
    let mut colors = StagingBuffer::<Vec4>::zeroed(model.entity_count());
    let mut sync = SimulationSync::new();
    sync.prime_buffers(&mut positions, &mut colors);

    let scatter = model.positions().to_vec();
    let bound = model.volume_diameter() / 2.0 + BOUNCE_STEP + 1e-4;
    let moving = model.moving_index();

    println!(
        "DRIFT soak: {ENTITY_COUNT} entities, {TICKS} ticks, distance bound {bound:.3}"
    );

    let start = Instant::now();
    let mut bounces = 0u64;
    let mut previous_direction = model.travel_direction();

    for tick in 0..TICKS {
        sync.tick(&mut model, &mut positions, &mut colors);

        let distance = model.moving_position().distance(model.centre());
        if distance > bound {
            eprintln!("FAIL tick {tick}: moving entity escaped ({distance:.4} > {bound:.4})");
            std::process::exit(1);
        }

        let direction = model.travel_direction();
        if direction != previous_direction {
            bounces += 1;
            if (direction.length() - 1.0).abs() > 1e-4 {
                eprintln!(
                    "FAIL tick {tick}: direction not unit length after bounce ({:.6})",
                    direction.length()
                );
                std::process::exit(1);
            }
            previous_direction = direction;
        }

        if positions.get(moving) != model.moving_position() {
            eprintln!("FAIL tick {tick}: position buffer out of sync with model");
            std::process::exit(1);
        }
        positions.clear_dirty();
        colors.clear_dirty();
    }

    // The scatter must be untouched after the whole run.
    for (index, position) in model.positions().iter().enumerate() {
        if index != moving && *position != scatter[index] {
            eprintln!("FAIL: non-moving entity {index} moved");
            std::process::exit(1);
        }
    }

    let elapsed = start.elapsed();
    let stats = sync.stats();
    println!(
        "PASS: {} ticks in {:.2}s ({:.0} ticks/s), {} bounces, {} color writes",
        stats.ticks,
        elapsed.as_secs_f64(),
        stats.ticks as f64 / elapsed.as_secs_f64(),
        bounces,
        stats.color_writes
    );
}
