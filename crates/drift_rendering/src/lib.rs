//! # DRIFT Rendering Interop
//!
//! The render-side half of the demo, kept strictly downstream of the
//! simulation core:
//!
//! ```text
//! harness tick ──> SimulationSync ──> Model::advance()
//!                        │
//!                        ├── color slot write ──> StagingBuffer<Vec4> (dirty)
//!                        └── position write ────> StagingBuffer<Vec3> (dirty)
//!                                                        │
//!                                     upload stage reads as_bytes(), clears dirty
//! ```
//!
//! The external renderer owns devices, pipelines and draw calls; this crate
//! stops at self-consistent, dirty-marked staging buffers ready for upload.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod instancing;
pub mod sync;

pub use instancing::{BufferUsage, StagingBuffer};
pub use sync::{InstanceArray, SimulationSync, SyncStats};
