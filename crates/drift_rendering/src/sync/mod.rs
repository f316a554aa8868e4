//! # Simulation Sync
//!
//! Translates one simulation tick into buffer writes. The adapter owns no
//! simulation logic and no buffers; it is handed the model and the two
//! instance arrays each call and leaves behind a self-consistent, dirty-marked
//! snapshot for the upload stage.

mod adapter;

pub use adapter::{InstanceArray, SimulationSync, SyncStats};
