//! # DRIFT
//!
//! Simulation-driven instanced rendering, strictly layered:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        DRIFT DEMO HARNESS                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌────────────────┐      ┌────────────────┐      ┌────────────┐  │
//! │  │  drift_core    │      │ drift_rendering│      │   drift    │  │
//! │  │                │<─────│                │<─────│            │  │
//! │  │ • Model        │ read │ • StagingBuffer│ tick │ • Config   │  │
//! │  │ • advance()    │      │ • SimulationSync│     │ • FrameLoop│  │
//! │  │ • UniformRng   │      │ • dirty marking│      │ • upload   │  │
//! │  └────────────────┘      └────────────────┘      └────────────┘  │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Control flow per frame: harness tick → sync adapter → `Model::advance()` →
//! accessor reads → buffer writes → dirty-marked buffers → upload stage.
//!
//! ## Modules
//!
//! - `config`: TOML demo configuration, loaded once at startup
//! - `frame_loop`: frame orchestration, timing statistics, simulated upload

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod frame_loop;

// Re-export the layers
pub use drift_core as core;
pub use drift_rendering as rendering;
pub use drift_shared as shared;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, DemoConfig};
pub use frame_loop::{FrameLoop, FrameStats, FrameStatsAccumulator, TARGET_FRAME_TIME};
