//! # Instance Attribute Staging
//!
//! CPU-side staging for per-instance vertex attributes (positions, colors).
//! One buffer per attribute, indexed by entity id, with dirty marking so the
//! upload stage only touches buffers that actually changed this frame.

mod buffer;

pub use buffer::{BufferUsage, StagingBuffer};
