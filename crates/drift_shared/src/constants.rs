//! # Simulation Constants
//!
//! Tuning values shared by the simulation core and the harness.
//!
//! **CRITICAL:** the step lengths are observable behavior - the invariant
//! tests bound the moving entity's overshoot in terms of them. Changing one
//! changes every recorded trajectory.

/// Nominal tick rate (simulation steps per second).
///
/// The core itself is frequency-agnostic; this is the cadence the harness
/// drives it at and the budget frame timing is reported against.
pub const TICK_RATE: u32 = 60;

/// Distance the moving entity travels along its direction each tick.
pub const TRAVEL_STEP: f32 = 0.025;

/// Extra distance applied along the fresh direction after a boundary bounce,
/// pushing the entity back inside its travel volume.
pub const BOUNCE_STEP: f32 = 0.05;

/// Default number of instanced entities when no configuration is supplied.
pub const DEFAULT_ENTITY_COUNT: u32 = 3000;
