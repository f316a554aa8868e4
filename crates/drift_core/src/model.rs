//! # The Simulation Model
//!
//! Owns every entity's position, the moving entity's trajectory and the
//! shared color of the non-moving set. The render-side sync only ever reads
//! through the accessors; [`Model::advance`] is the single mutation point.
//!
//! Per tick:
//! - the color-sweep cursor moves one slot forward; after it has visited the
//!   whole instance set a fresh shared color is drawn and the sweep restarts
//! - the moving entity steps along its travel direction; if it crosses the
//!   boundary of its travel volume it is deflected back inside

use drift_shared::{Vec3, Vec4, BOUNCE_STEP, DEFAULT_ENTITY_COUNT, TRAVEL_STEP};

use crate::rng::UniformRng;

/// Exponent of the entity-count term in the travel-volume heuristic; spatial
/// spread grows sub-linearly with the number of instances.
const VOLUME_SPREAD_EXPONENT: f32 = 0.33;

/// Construction parameters for the simulation model.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Number of instanced entities. Must be at least 1; callers normalize
    /// zero before construction.
    pub entity_count: u32,
    /// Centre of the moving entity's travel volume.
    pub centre: Vec3,
    /// Scale length the travel-volume diameter is derived from.
    pub unit_length: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            entity_count: DEFAULT_ENTITY_COUNT,
            centre: Vec3::ZERO,
            unit_length: 1.0,
        }
    }
}

/// The simulation state: all entity positions, the moving entity's
/// trajectory, and the color sweep over the non-moving set.
///
/// The model tracks every entity's position even though only one of them
/// moves; it does not track per-entity colors, only the one shared color and
/// which slot the sweep refreshes this tick.
pub struct Model {
    entity_count: usize,
    /// Color-sweep cursor; the slot refreshed this tick. Spends one tick per
    /// cycle at `entity_count`, the recolor boundary.
    active_index: usize,
    /// Color of every entity except the moving one.
    shared_color: Vec4,
    centre: Vec3,
    volume_diameter: f32,
    positions: Vec<Vec3>,
    moving_color: Vec4,
    /// Current travel direction. Unit length after any bounce; the initial
    /// draw is deliberately left un-normalized.
    travel_direction: Vec3,
    moving_index: usize,
    rng: UniformRng,
}

impl Model {
    /// Creates the model: scatters the entities inside a cube sized by the
    /// travel-volume heuristic, parks the moving entity at the centre and
    /// draws its initial travel direction.
    ///
    /// # Panics
    ///
    /// Panics if `config.entity_count` is zero. Construction with an empty
    /// entity set is a caller bug; the harness normalizes zero to 1 before
    /// getting here.
    #[must_use]
    pub fn new(config: &SimulationConfig, mut rng: UniformRng) -> Self {
        assert!(config.entity_count > 0, "entity_count must be at least 1");

        let entity_count = config.entity_count as usize;
        let moving_index = entity_count / 2;

        // Draw order matters for seeded replay: direction first, scatter second.
        let travel_direction = Vec3::new(rng.sample(), rng.sample(), rng.sample());

        let volume_diameter =
            (config.entity_count as f32).powf(VOLUME_SPREAD_EXPONENT) * 2.0 * config.unit_length;

        let mut positions = Vec::with_capacity(entity_count);
        for _ in 0..entity_count {
            positions.push(Vec3::new(
                volume_diameter * (rng.sample() - 0.5),
                volume_diameter * (rng.sample() - 0.5),
                volume_diameter * (rng.sample() - 0.5),
            ));
        }
        positions[moving_index] = config.centre;

        tracing::info!(
            "model created: {} entities, travel volume diameter {:.3}",
            entity_count,
            volume_diameter
        );

        Self {
            entity_count,
            active_index: 0,
            shared_color: Vec4::opaque(0.0, 0.0, 1.0),
            centre: config.centre,
            volume_diameter,
            positions,
            moving_color: Vec4::opaque(1.0, 1.0, 1.0),
            travel_direction,
            moving_index,
            rng,
        }
    }

    /// Runs one simulation tick.
    ///
    /// Must be called exactly once per logical frame, never re-entrantly.
    /// Total function: no I/O, no failure modes, O(1) in the entity count.
    pub fn advance(&mut self) {
        self.advance_color_sweep();
        self.advance_moving_entity();
    }

    /// Moves the sweep cursor forward; once it has run past the whole
    /// instance set, draws a fresh shared color and restarts the sweep.
    fn advance_color_sweep(&mut self) {
        self.active_index += 1;
        if self.active_index > self.entity_count {
            self.shared_color =
                Vec4::opaque(self.rng.sample(), self.rng.sample(), self.rng.sample());
            self.active_index = 0;
            tracing::debug!(
                "color sweep restarted: shared color ({:.3}, {:.3}, {:.3})",
                self.shared_color.x,
                self.shared_color.y,
                self.shared_color.z
            );
        }
    }

    /// Steps the moving entity; deflects it back inside when it leaves its
    /// travel volume.
    fn advance_moving_entity(&mut self) {
        let mut position = self.positions[self.moving_index];
        position += self.travel_direction * TRAVEL_STEP;

        if position.distance(self.centre) > self.volume_diameter / 2.0 {
            // Crude inward deflection, not a surface-normal reflection: damp
            // each axis by a fresh non-positive factor, renormalize, then push
            // the entity back inside along the new direction.
            let deflection = Vec3::new(-self.rng.sample(), -self.rng.sample(), -self.rng.sample());
            self.travel_direction = (self.travel_direction * deflection).normalized();
            position += self.travel_direction * BOUNCE_STEP;
        }

        self.positions[self.moving_index] = position;
    }

    /// Color for one entity: the reserved color for the moving entity, the
    /// shared color for everyone else.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Vec4 {
        if index == self.moving_index {
            self.moving_color
        } else {
            self.shared_color
        }
    }

    /// Current position of the moving entity.
    #[must_use]
    pub fn moving_position(&self) -> Vec3 {
        self.positions[self.moving_index]
    }

    /// Index of the entity whose position changes every tick.
    #[must_use]
    pub fn moving_index(&self) -> usize {
        self.moving_index
    }

    /// The color-buffer slot the sweep refreshes this tick.
    ///
    /// Ranges over `[0, entity_count]`: the top value is the one-tick recolor
    /// boundary between sweeps and names no buffer slot.
    #[must_use]
    pub fn current_active_index(&self) -> usize {
        self.active_index
    }

    /// All entity positions, for one-time seeding of the instance buffer.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Diameter of the moving entity's travel volume; also the spatial spread
    /// the entities were scattered over.
    #[must_use]
    pub fn volume_diameter(&self) -> f32 {
        self.volume_diameter
    }

    /// Centre of the travel volume.
    #[must_use]
    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    /// Current travel direction of the moving entity.
    #[must_use]
    pub fn travel_direction(&self) -> Vec3 {
        self.travel_direction
    }

    /// Number of entities, fixed at construction.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entity_count: u32) -> SimulationConfig {
        SimulationConfig {
            entity_count,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_moving_entity_starts_at_centre() {
        let model = Model::new(&config(10), UniformRng::from_seed(42));
        assert_eq!(model.moving_index(), 5);
        assert_eq!(model.moving_position(), Vec3::ZERO);
        assert_eq!(model.current_active_index(), 0);
    }

    #[test]
    #[should_panic(expected = "entity_count must be at least 1")]
    fn test_zero_entities_is_a_caller_bug() {
        let _ = Model::new(&config(0), UniformRng::from_seed(0));
    }

    #[test]
    fn test_first_step_follows_unnormalized_direction() {
        // The initial direction is deliberately NOT unit length; the first
        // step must be exactly direction * step, not its normalized version.
        let rng = UniformRng::from_seed(7);
        let mut probe = rng.clone();
        let initial_direction = Vec3::new(probe.sample(), probe.sample(), probe.sample());

        let mut model = Model::new(&config(10), rng);
        model.advance();

        let expected = Vec3::ZERO + initial_direction * TRAVEL_STEP;
        assert_eq!(model.moving_position(), expected);
        assert_eq!(model.travel_direction(), initial_direction);
    }

    #[test]
    fn test_single_entity_set() {
        // N = 1: the only entity is the moving entity; the shared color never
        // applies to any slot but nothing may panic.
        let mut model = Model::new(&config(1), UniformRng::from_seed(3));
        assert_eq!(model.moving_index(), 0);
        for _ in 0..10 {
            model.advance();
        }
        assert_eq!(model.color_for(0), Vec4::opaque(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_color_changes_on_the_eleventh_tick() {
        let mut model = Model::new(&config(10), UniformRng::from_seed(9));
        let initial = model.color_for(0);

        for tick in 1..=10usize {
            model.advance();
            assert_eq!(model.color_for(0), initial);
            assert_eq!(model.current_active_index(), tick);
        }

        model.advance();
        assert_ne!(model.color_for(0), initial);
        assert_eq!(model.current_active_index(), 0);
    }

    #[test]
    fn test_color_changes_once_per_cycle() {
        let entity_count = 16;
        let cycle = entity_count as usize + 1;
        let mut model = Model::new(&config(entity_count), UniformRng::from_seed(11));

        let mut previous = model.color_for(0);
        let mut changes = 0;
        for _ in 0..(4 * cycle) {
            model.advance();
            let current = model.color_for(0);
            if current != previous {
                changes += 1;
                previous = current;
            }
        }
        assert_eq!(changes, 4);
    }

    #[test]
    fn test_color_selection() {
        let mut model = Model::new(&config(10), UniformRng::from_seed(21));
        let white = Vec4::opaque(1.0, 1.0, 1.0);

        assert_eq!(model.color_for(5), white);
        assert_eq!(model.color_for(0), Vec4::opaque(0.0, 0.0, 1.0));

        // Run past a recolor; the moving entity keeps its reserved color and
        // every other slot reports the fresh shared color.
        for _ in 0..11 {
            model.advance();
        }
        let shared = model.color_for(0);
        assert_eq!(model.color_for(5), white);
        for index in [0, 1, 4, 6, 9] {
            assert_eq!(model.color_for(index), shared);
        }
    }

    #[test]
    fn test_forced_bounce_moves_back_toward_centre() {
        let mut model = Model::new(&config(8), UniformRng::from_seed(13));
        let half = model.volume_diameter / 2.0;

        // Park the moving entity just inside the boundary, aimed straight out.
        model.positions[model.moving_index] = Vec3::new(half - 0.01, 0.0, 0.0);
        model.travel_direction = Vec3::new(1.0, 0.0, 0.0);
        let before = model.moving_position().distance(model.centre());

        model.advance();

        let after = model.moving_position().distance(model.centre());
        assert!(after < before, "bounce must move the entity inward");
        assert!(after <= half + BOUNCE_STEP);
        assert!((model.travel_direction().length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_moving_positions_frozen() {
        let mut model = Model::new(&config(12), UniformRng::from_seed(17));
        let initial = model.positions().to_vec();

        for _ in 0..200 {
            model.advance();
        }

        for (index, position) in model.positions().iter().enumerate() {
            if index != model.moving_index() {
                assert_eq!(*position, initial[index]);
            }
        }
    }

    #[test]
    fn test_volume_diameter_heuristic() {
        let model = Model::new(&config(1000), UniformRng::from_seed(1));
        let expected = 1000f32.powf(0.33) * 2.0;
        assert!((model.volume_diameter() - expected).abs() < 1e-5);

        let scaled = Model::new(
            &SimulationConfig {
                entity_count: 1000,
                centre: Vec3::ZERO,
                unit_length: 2.5,
            },
            UniformRng::from_seed(1),
        );
        assert!((scaled.volume_diameter() - expected * 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_scatter_spread_matches_volume() {
        let model = Model::new(&config(64), UniformRng::from_seed(5));
        let half = model.volume_diameter() / 2.0;
        for position in model.positions() {
            assert!(position.x.abs() <= half);
            assert!(position.y.abs() <= half);
            assert!(position.z.abs() <= half);
        }
    }
}
