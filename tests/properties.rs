//! Property-based tests for the step and the rasterizer using proptest
//!
//! These tests verify invariants hold across random initial conditions:
//! - Particle centres stay inside the walls
//! - Slow velocity components snap to exactly zero
//! - Ring cells never leave the buffer
//! - Clear always yields an all-empty buffer

use glam::Vec2;
use proptest::prelude::*;
use ring_drop::sim::ring_cells;
use ring_drop::{PhysicsConfig, Simulation};

const THRESHOLD: f32 = ring_drop::consts::VELOCITY_THRESHOLD;

/// Grid size plus a radius that fits inside it
fn grid_and_radius() -> impl Strategy<Value = (i64, i64, i64)> {
    (3i64..60, 3i64..60).prop_flat_map(|(w, h)| {
        let max_radius = (w.min(h) - 1) / 2;
        (Just(w), Just(h), 0..=max_radius)
    })
}

fn vec2(range: std::ops::Range<f32>) -> impl Strategy<Value = Vec2> {
    (range.clone(), range).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: after any number of steps every centre lies within
    /// `radius <= p < extent - radius` on both axes
    #[test]
    fn test_particles_stay_inside_walls(
        (w, h, radius) in grid_and_radius(),
        start in vec2(-80.0..80.0),
        velocity in vec2(-12.0..12.0),
        gravity in vec2(-2.0..2.0),
        steps in 1usize..60,
    ) {
        let mut sim = Simulation::new(w, h, " ").unwrap();
        let handle = sim.add_particle("o", radius, start).unwrap();
        sim.set_velocity(handle, velocity).unwrap();

        for _ in 0..steps {
            sim.set_acceleration(handle, gravity).unwrap();
            sim.step_frame();
            let p = sim.particle(handle).unwrap();
            let r = radius as f32;
            prop_assert!(p.position.x >= r, "x={} r={}", p.position.x, r);
            prop_assert!(p.position.y >= r, "y={} r={}", p.position.y, r);
            prop_assert!(p.position.x < (w - radius) as f32, "x={} w={}", p.position.x, w);
            prop_assert!(p.position.y < (h - radius) as f32, "y={} h={}", p.position.y, h);
        }
    }

    /// Property: away from walls, each velocity component ends a step either
    /// exactly zero or at least the threshold in magnitude
    #[test]
    fn test_threshold_snap_in_open_space(
        velocity in vec2(-3.0..3.0),
        acceleration in vec2(-1.0..1.0),
    ) {
        let mut sim = Simulation::new(1000, 1000, " ").unwrap();
        let handle = sim.add_particle("o", 2, Vec2::new(500.0, 500.0)).unwrap();
        sim.set_velocity(handle, velocity).unwrap();
        sim.set_acceleration(handle, acceleration).unwrap();
        sim.step_frame();

        let v = sim.particle(handle).unwrap().velocity;
        for c in [v.x, v.y] {
            prop_assert!(c == 0.0 || c.abs() >= THRESHOLD, "component {}", c);
        }
    }

    /// Property: a slow particle with no acceleration stops moving once snapped
    #[test]
    fn test_slow_particle_stops(velocity in vec2(-0.29..0.29)) {
        let mut sim = Simulation::new(40, 40, " ").unwrap();
        let handle = sim.add_particle("o", 3, Vec2::new(20.0, 20.0)).unwrap();
        sim.set_velocity(handle, velocity).unwrap();

        sim.step_frame();
        let settled = sim.particle(handle).unwrap().position;
        prop_assert_eq!(sim.particle(handle).unwrap().velocity, Vec2::ZERO);

        sim.step_frame();
        prop_assert_eq!(sim.particle(handle).unwrap().position, settled);
    }

    /// Property: every ring cell lies inside the buffer
    #[test]
    fn test_ring_cells_in_bounds(
        position in vec2(-200.0..200.0),
        radius in 0u32..30,
        bounce_layer in -3i32..4,
        step in 1u32..90,
        rows in 1usize..50,
        cols in 1usize..50,
    ) {
        let physics = PhysicsConfig {
            bounce_layer,
            draw_step_angle: step,
            ..Default::default()
        };
        let cells = ring_cells(position, radius, &physics, rows, cols);
        prop_assert_eq!(cells.len(), 360usize.div_ceil(step as usize));
        for (row, col) in cells {
            prop_assert!(row < rows && col < cols);
        }
    }

    /// Property: clearing, once or twice, leaves only empty cells
    #[test]
    fn test_clear_idempotent(
        (w, h, radius) in grid_and_radius(),
        start in vec2(0.0..60.0),
        velocity in vec2(-5.0..5.0),
        steps in 0usize..10,
    ) {
        let mut sim = Simulation::new(w, h, ".").unwrap();
        let handle = sim.add_particle("#", radius, start).unwrap();
        sim.set_velocity(handle, velocity).unwrap();
        for _ in 0..steps {
            sim.step_frame();
        }

        sim.clear();
        let once = sim.snapshot().to_vec();
        sim.clear();
        prop_assert_eq!(sim.snapshot(), once.as_slice());
        prop_assert!(once.iter().flatten().all(|c| c == "."));
    }
}
