//! # DRIFT Frame Loop
//!
//! Frame orchestration for the headless demo:
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ 1. TICK                                                         │
//! │    └─ SimulationSync: Model::advance(), then write the active   │
//! │       color slot + the moving entity's position slot            │
//! │                                                                 │
//! │ 2. UPLOAD                                                       │
//! │    └─ Consume dirty flags: read each dirty buffer's byte view,  │
//! │       count the bytes, clear the flag                           │
//! │                                                                 │
//! │ 3. END FRAME                                                    │
//! │    └─ Record timing statistics against the 60 FPS budget        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A windowed renderer would replace step 2 with real GPU uploads; the
//! contract it sees is identical - prime once before compiling, then one
//! self-consistent snapshot per tick.

use std::time::{Duration, Instant};

use drift_core::{Model, UniformRng};
use drift_rendering::{SimulationSync, StagingBuffer};
use drift_shared::{Vec3, Vec4, TICK_RATE};

use crate::config::DemoConfig;

/// Target frame time for the nominal tick rate.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

/// Timing record for a single frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Total frame time in microseconds.
    pub total_us: u64,
    /// Simulation tick + buffer sync time in microseconds.
    pub tick_us: u64,
    /// Simulated upload time in microseconds.
    pub upload_us: u64,
    /// Bytes the upload stage consumed this frame.
    pub bytes_uploaded: u64,
    /// Frame number.
    pub frame: u64,
}

/// Owns the model, the sync adapter and the two staging buffers, and drives
/// them one frame at a time.
pub struct FrameLoop {
    config: DemoConfig,
    model: Model,
    sync: SimulationSync,
    positions: StagingBuffer<Vec3>,
    colors: StagingBuffer<Vec4>,
    frame_count: u64,
    stats: FrameStatsAccumulator,
}

impl FrameLoop {
    /// Builds the whole stack from a (normalized) configuration: model,
    /// seeded buffers, primed adapter.
    ///
    /// Buffer priming happens here, before any frame runs - the stand-in for
    /// "before the renderer compiles its GPU resources".
    #[must_use]
    pub fn new(config: DemoConfig) -> Self {
        let model = Model::new(&config.simulation(), UniformRng::from_seed(config.seed));

        // Position buffer seeded from the model's one-time scatter. The color
        // buffer starts as a decorative random scatter; the sweep overwrites
        // one slot per tick until the shared color has covered everything.
        let mut positions = StagingBuffer::from_slice(model.positions());
        let mut color_rng = UniformRng::from_seed(config.seed.wrapping_add(1));
        let mut colors = StagingBuffer::from_fn(model.entity_count(), |_| {
            Vec4::opaque(color_rng.sample(), color_rng.sample(), color_rng.sample())
        });

        let mut sync = SimulationSync::new();
        sync.prime_buffers(&mut positions, &mut colors);

        tracing::info!(
            "frame loop ready: {} entities, volume diameter {:.3}, {} frames planned",
            model.entity_count(),
            model.volume_diameter(),
            config.frames
        );

        Self {
            config,
            model,
            sync,
            positions,
            colors,
            frame_count: 0,
            stats: FrameStatsAccumulator::new(),
        }
    }

    /// Runs one frame: tick, upload, record.
    pub fn run_frame(&mut self) -> FrameStats {
        let frame_start = Instant::now();

        let tick_start = Instant::now();
        self.sync
            .tick(&mut self.model, &mut self.positions, &mut self.colors);
        let tick_us = tick_start.elapsed().as_micros() as u64;

        let upload_start = Instant::now();
        let bytes_uploaded = self.upload();
        let upload_us = upload_start.elapsed().as_micros() as u64;

        let stats = FrameStats {
            total_us: frame_start.elapsed().as_micros() as u64,
            tick_us,
            upload_us,
            bytes_uploaded,
            frame: self.frame_count,
        };

        self.frame_count += 1;
        self.stats.record(stats);
        stats
    }

    /// Runs the configured number of frames.
    pub fn run(&mut self) {
        for _ in 0..self.config.frames {
            let stats = self.run_frame();
            if Duration::from_micros(stats.total_us) > TARGET_FRAME_TIME {
                tracing::warn!(
                    "frame {} over budget: {}us (target {}us)",
                    stats.frame,
                    stats.total_us,
                    TARGET_FRAME_TIME.as_micros()
                );
            }
        }
    }

    /// Stand-in for the GPU upload: reads each dirty buffer's byte view,
    /// counts it, clears the dirty flag. Returns the bytes "uploaded".
    fn upload(&mut self) -> u64 {
        let mut bytes = 0u64;

        if self.positions.is_dirty() {
            bytes += self.positions.as_bytes().len() as u64;
            self.positions.clear_dirty();
        }
        if self.colors.is_dirty() {
            bytes += self.colors.as_bytes().len() as u64;
            self.colors.clear_dirty();
        }

        bytes
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The accumulated timing statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }

    /// Read access to the model (for invariant checks in tests and the soak
    /// binary).
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Read access to the position staging buffer.
    #[must_use]
    pub fn positions(&self) -> &StagingBuffer<Vec3> {
        &self.positions
    }

    /// Read access to the color staging buffer.
    #[must_use]
    pub fn colors(&self) -> &StagingBuffer<Vec4> {
        &self.colors
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of total frame times.
    pub total_us_sum: u64,
    /// Sum of tick times.
    pub tick_us_sum: u64,
    /// Sum of upload times.
    pub upload_us_sum: u64,
    /// Sum of bytes uploaded.
    pub bytes_uploaded_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            tick_us_sum: 0,
            upload_us_sum: 0,
            bytes_uploaded_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records a frame's statistics.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.tick_us_sum += stats.tick_us;
        self.upload_us_sum += stats.upload_us;
        self.bytes_uploaded_sum += stats.bytes_uploaded;
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);

        if stats.total_us > TARGET_FRAME_TIME.as_micros() as u64 {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Returns average frame rate.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Returns the fraction of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Prints a summary of the statistics.
    pub fn print_summary(&self) {
        println!("┌─ FRAMES ───────────────────────────────────────────────┐");
        println!("│ Frames Recorded:    {}", self.frames_recorded);
        println!(
            "│ Average Frame:      {:.3} ms ({:.1} FPS)",
            self.avg_frame_ms(),
            self.avg_fps()
        );
        println!(
            "│ Min / Max Frame:    {:.3} ms / {:.3} ms",
            self.min_frame_us as f64 / 1000.0,
            self.max_frame_us as f64 / 1000.0
        );
        println!("└────────────────────────────────────────────────────────┘");
        println!("┌─ BUDGET ───────────────────────────────────────────────┐");
        println!(
            "│ Target:             {:.3} ms ({} FPS)",
            TARGET_FRAME_TIME.as_micros() as f64 / 1000.0,
            TICK_RATE
        );
        println!(
            "│ Over Budget:        {} frames ({:.1}%)",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0
        );
        println!("└────────────────────────────────────────────────────────┘");
        println!("┌─ UPLOAD ───────────────────────────────────────────────┐");
        println!(
            "│ Bytes Uploaded:     {:.2} MB total",
            self.bytes_uploaded_sum as f64 / 1_000_000.0
        );
        if self.frames_recorded > 0 {
            println!(
                "│ Per Frame:          {:.1} KB average",
                self.bytes_uploaded_sum as f64 / self.frames_recorded as f64 / 1000.0
            );
        }
        println!("└────────────────────────────────────────────────────────┘");
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DemoConfig {
        DemoConfig {
            entity_count: 16,
            frames: 32,
            seed: 5,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_frame_loop_creation() {
        let frame_loop = FrameLoop::new(small_config());
        assert_eq!(frame_loop.frame_count(), 0);
        assert_eq!(frame_loop.positions().len(), 16);
        assert_eq!(frame_loop.colors().len(), 16);
    }

    #[test]
    fn test_frame_cycle_uploads_dirty_buffers() {
        let mut frame_loop = FrameLoop::new(small_config());

        // Both buffers start dirty from seeding, so the first frame uploads
        // the full data set.
        let first = frame_loop.run_frame();
        assert_eq!(first.bytes_uploaded, 16 * 12 + 16 * 16);

        // Steady state: both buffers are rewritten each tick, both upload.
        let second = frame_loop.run_frame();
        assert_eq!(second.bytes_uploaded, first.bytes_uploaded);
        assert!(!frame_loop.positions().is_dirty());
        assert!(!frame_loop.colors().is_dirty());
    }

    #[test]
    fn test_run_executes_configured_frames() {
        let mut frame_loop = FrameLoop::new(small_config());
        frame_loop.run();
        assert_eq!(frame_loop.frame_count(), 32);
        assert_eq!(frame_loop.stats().frames_recorded, 32);
    }

    #[test]
    fn test_buffers_mirror_model_after_frame() {
        let mut frame_loop = FrameLoop::new(small_config());
        frame_loop.run_frame();

        let model = frame_loop.model();
        let moving = model.moving_index();
        assert_eq!(frame_loop.positions().get(moving), model.moving_position());
    }

    #[test]
    fn test_stats_accumulator() {
        let mut acc = FrameStatsAccumulator::new();

        for frame in 0..100 {
            acc.record(FrameStats {
                total_us: 10_000 + frame * 100,
                tick_us: 5000,
                upload_us: 2000,
                bytes_uploaded: 448,
                frame,
            });
        }

        assert_eq!(acc.frames_recorded, 100);
        assert!(acc.avg_fps() > 50.0);
        assert!(acc.avg_fps() < 100.0);
        assert_eq!(acc.bytes_uploaded_sum, 44_800);
    }
}
