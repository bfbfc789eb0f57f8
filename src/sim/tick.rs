//! Fixed step simulation tick
//!
//! Advances every particle by one discrete step and redraws it.

use glam::Vec2;

use super::collision::{WallHit, resolve_axis};
use super::raster::ring_cells;
use super::state::{Particle, Simulation};
use crate::config::PhysicsConfig;

impl Simulation {
    /// Advance the simulation by one step.
    ///
    /// Particles are processed one at a time in list order: erase the old
    /// ring, integrate, snap slow components to zero, bounce off walls, draw
    /// the new ring. A particle drawn later in the same step overwrites the
    /// cells of earlier ones.
    pub fn step_frame(&mut self) {
        for index in 0..self.particles.len() {
            self.draw_particle(index, true);

            let (rows, cols) = (self.height, self.width);
            let particle = &mut self.particles[index];
            integrate(particle, &self.physics);

            let dampening = self.physics.velocity_dampening;
            let radius = particle.radius();
            let hit_y = resolve_axis(
                &mut particle.position.y,
                &mut particle.velocity.y,
                radius,
                rows,
                dampening,
            );
            let hit_x = resolve_axis(
                &mut particle.position.x,
                &mut particle.velocity.x,
                radius,
                cols,
                dampening,
            );
            if hit_x != WallHit::None || hit_y != WallHit::None {
                log::debug!(
                    "Particle {} hit walls x={:?} y={:?}, now at {} moving {}",
                    index,
                    hit_x,
                    hit_y,
                    particle.position,
                    particle.velocity
                );
            }

            self.draw_particle(index, false);
        }
        log::trace!("Stepped {} particles", self.particles.len());
    }

    /// Write a particle's ring into the buffer, with its glyph or with the
    /// empty token when `erase` is set
    fn draw_particle(&mut self, index: usize, erase: bool) {
        let particle = &self.particles[index];
        let token: &str = if erase {
            &self.empty_cell
        } else {
            particle.glyph()
        };
        for (row, col) in ring_cells(
            particle.position,
            particle.radius(),
            &self.physics,
            self.height,
            self.width,
        ) {
            let cell = &mut self.buffer[row][col];
            cell.clear();
            cell.push_str(token);
        }
    }
}

/// Semi-implicit Euler step followed by the threshold snap
fn integrate(particle: &mut Particle, physics: &PhysicsConfig) {
    // Acceleration is skipped only when this sum is exactly zero. `floor`
    // rather than truncation so negative fractions count as cell -1.
    let cell = particle.position.y.floor() as i64;
    if cell.saturating_add(i64::from(particle.radius())) != 0 {
        particle.velocity += particle.acceleration;
    }
    particle.position += particle.velocity;
    particle.acceleration = Vec2::ZERO;

    let threshold = physics.velocity_threshold;
    if particle.velocity.x.abs() < threshold {
        particle.velocity.x = 0.0;
    }
    if particle.velocity.y.abs() < threshold {
        particle.velocity.y = 0.0;
    }
}
