//! # DRIFT Shared
//!
//! Common types used by the simulation core and the render-side sync.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - `raw-window-handle`
//! - Any GPU or window-related crate
//!
//! If you need graphics types, put them in `drift_rendering`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{BOUNCE_STEP, DEFAULT_ENTITY_COUNT, TICK_RATE, TRAVEL_STEP};
pub use math::{Vec3, Vec4};
