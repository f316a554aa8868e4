//! The per-tick bridge between the simulation model and the instance buffers.
//!
//! The external renderer resolves which underlying arrays hold positions and
//! colors and hands them in by reference; the adapter only needs the two
//! capabilities captured by [`InstanceArray`]: indexed mutable writes and
//! dirty/usage marking.

use drift_core::Model;
use drift_shared::{Vec3, Vec4};

/// The two things the adapter needs from an instance buffer: overwrite one
/// slot (dirty-marking included) and promote it to dynamic usage.
///
/// [`StagingBuffer`](crate::StagingBuffer) is the production implementation;
/// tests substitute recording mocks.
pub trait InstanceArray<T: Copy> {
    /// Number of instance slots.
    fn len(&self) -> usize;

    /// Returns true if the array has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites one slot and marks the array dirty for upload.
    fn write(&mut self, index: usize, value: T);

    /// Marks the array as requiring repeated updates (usage metadata only).
    fn mark_dynamic(&mut self);
}

impl<T: bytemuck::Pod> InstanceArray<T> for crate::StagingBuffer<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn write(&mut self, index: usize, value: T) {
        Self::write(self, index, value);
    }

    fn mark_dynamic(&mut self) {
        Self::mark_dynamic(self);
    }
}

/// Running totals from the sync adapter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncStats {
    /// Ticks executed.
    pub ticks: u64,
    /// Color slots written.
    pub color_writes: u64,
    /// Position slots written.
    pub position_writes: u64,
}

/// Pushes per-tick simulation state into the caller's instance buffers.
///
/// One writer, one tick at a time: a completed [`SimulationSync::tick`] has
/// updated exactly one position slot and at most one color slot, and the
/// buffers carry dirty flags for the upload stage. The adapter never reaches
/// into the model's state directly; everything flows through the read
/// accessors.
pub struct SimulationSync {
    /// One-shot guard for buffer priming.
    primed: bool,
    stats: SyncStats,
}

impl SimulationSync {
    /// Creates an adapter with unprimed buffers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primed: false,
            stats: SyncStats::default(),
        }
    }

    /// One-time promotion of both buffers to dynamic usage.
    ///
    /// Must run before steady-state ticking - the external renderer bakes the
    /// usage metadata into its GPU allocations when it compiles, so reordering
    /// this after compilation breaks re-upload. Idempotent: repeat calls are
    /// ignored, so each underlying buffer is promoted exactly once.
    pub fn prime_buffers<P, C>(&mut self, positions: &mut P, colors: &mut C)
    where
        P: InstanceArray<Vec3>,
        C: InstanceArray<Vec4>,
    {
        if self.primed {
            return;
        }
        positions.mark_dynamic();
        colors.mark_dynamic();
        self.primed = true;
        tracing::debug!("instance buffers primed for dynamic updates");
    }

    /// Advances the model one tick and mirrors the step into the buffers:
    /// the sweep's active color slot and the moving entity's position slot.
    ///
    /// On the one tick per cycle where the sweep cursor sits at the recolor
    /// boundary (`entity_count`) there is no color slot to refresh; only the
    /// position is written. Every slot still gets touched exactly once per
    /// cycle.
    ///
    /// # Panics
    ///
    /// Panics if the buffers were never primed or their lengths do not match
    /// the model's entity count - both are harness wiring bugs, not runtime
    /// conditions to recover from.
    pub fn tick<P, C>(&mut self, model: &mut Model, positions: &mut P, colors: &mut C)
    where
        P: InstanceArray<Vec3>,
        C: InstanceArray<Vec4>,
    {
        assert!(self.primed, "tick before prime_buffers");
        assert!(
            positions.len() == model.entity_count() && colors.len() == model.entity_count(),
            "instance buffers sized {}/{} for {} entities",
            positions.len(),
            colors.len(),
            model.entity_count()
        );

        model.advance();

        let active = model.current_active_index();
        if active < model.entity_count() {
            colors.write(active, model.color_for(active));
            self.stats.color_writes += 1;
        }

        positions.write(model.moving_index(), model.moving_position());
        self.stats.position_writes += 1;
        self.stats.ticks += 1;
    }

    /// True once [`SimulationSync::prime_buffers`] has run.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Running totals since construction.
    #[must_use]
    pub fn stats(&self) -> SyncStats {
        self.stats
    }
}

impl Default for SimulationSync {
    fn default() -> Self {
        Self::new()
    }
}
