//! # DRIFT Core
//!
//! The simulation model behind the instanced-sphere demo:
//! - one distinguished entity travels inside a bounded volume and bounces
//!   back in when it crosses the boundary
//! - every other entity shares a single color that is redrawn once per sweep
//!   of the instance set, one color-buffer slot refreshed per tick
//!
//! ## Architecture Rules
//!
//! 1. **Leaf crate** - no rendering, no windowing, no I/O
//! 2. **One writer** - all mutation goes through [`Model::advance`]
//! 3. **Deterministic** - randomness is injected as a seeded [`UniformRng`],
//!    so a seed fixes the whole trajectory
//!
//! ## Example
//!
//! ```rust,ignore
//! use drift_core::{Model, SimulationConfig, UniformRng};
//!
//! let mut model = Model::new(&SimulationConfig::default(), UniformRng::from_seed(42));
//! model.advance(); // one tick: one color slot, one position
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod model;
pub mod rng;

pub use model::{Model, SimulationConfig};
pub use rng::UniformRng;
