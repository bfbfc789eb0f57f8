//! Simulation state: particles and the character buffer they are drawn into

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::error::{Error, Result};

/// Index of a particle inside its simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleHandle(pub(crate) usize);

impl ParticleHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A ring-shaped particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    glyph: String,
    radius: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Consumed by the next step, then reset to zero
    pub acceleration: Vec2,
}

impl Particle {
    /// Create a particle at rest.
    ///
    /// Errors: `Error::InvalidRadius` if `radius` is negative.
    pub fn new(glyph: impl Into<String>, radius: i64, position: Vec2) -> Result<Self> {
        let radius = u32::try_from(radius).map_err(|_| Error::InvalidRadius(radius))?;
        Ok(Self {
            glyph: glyph.into(),
            radius,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        })
    }

    /// Token written into every cell of the particle's ring
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Half-extent used for wall collisions and ring drawing
    pub fn radius(&self) -> u32 {
        self.radius
    }
}

/// A fixed-size character grid and the particles animated inside it
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) empty_cell: String,
    /// Rows of cells, `buffer[row][col]`, `height` rows of `width` cells
    pub(crate) buffer: Vec<Vec<String>>,
    /// Stepped and drawn in this order
    pub(crate) particles: Vec<Particle>,
    pub(crate) physics: PhysicsConfig,
}

impl Simulation {
    /// Create an empty grid with the default physics constants.
    ///
    /// Errors: `Error::InvalidDimension` if `width` or `height` is not positive.
    pub fn new(width: i64, height: i64, empty_cell: impl Into<String>) -> Result<Self> {
        Self::with_physics(width, height, empty_cell, PhysicsConfig::default())
    }

    /// Create an empty grid with custom physics constants
    pub fn with_physics(
        width: i64,
        height: i64,
        empty_cell: impl Into<String>,
        physics: PhysicsConfig,
    ) -> Result<Self> {
        let invalid = || Error::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let cols = usize::try_from(width).map_err(|_| invalid())?;
        let rows = usize::try_from(height).map_err(|_| invalid())?;
        physics.validate()?;

        let empty_cell = empty_cell.into();
        log::debug!("Creating {cols}x{rows} simulation");
        Ok(Self {
            width: cols,
            height: rows,
            buffer: vec![vec![empty_cell.clone(); cols]; rows],
            empty_cell,
            particles: Vec::new(),
            physics,
        })
    }

    /// Append a particle at rest (zero velocity and acceleration).
    ///
    /// The particle is not drawn until the next step.
    pub fn add_particle(
        &mut self,
        glyph: impl Into<String>,
        radius: i64,
        position: Vec2,
    ) -> Result<ParticleHandle> {
        let particle = Particle::new(glyph, radius, position)?;
        let handle = ParticleHandle(self.particles.len());
        log::debug!(
            "Added particle {} '{}' radius {} at {}",
            handle.0,
            particle.glyph,
            particle.radius,
            position
        );
        self.particles.push(particle);
        Ok(handle)
    }

    pub fn particle(&self, handle: ParticleHandle) -> Result<&Particle> {
        self.particles
            .get(handle.0)
            .ok_or(Error::UnknownParticle(handle.0))
    }

    fn particle_mut(&mut self, handle: ParticleHandle) -> Result<&mut Particle> {
        self.particles
            .get_mut(handle.0)
            .ok_or(Error::UnknownParticle(handle.0))
    }

    pub fn set_velocity(&mut self, handle: ParticleHandle, velocity: Vec2) -> Result<()> {
        self.particle_mut(handle)?.velocity = velocity;
        Ok(())
    }

    /// Set the acceleration consumed by the next step
    pub fn set_acceleration(&mut self, handle: ParticleHandle, acceleration: Vec2) -> Result<()> {
        self.particle_mut(handle)?.acceleration = acceleration;
        Ok(())
    }

    /// Set the same acceleration on every particle
    pub fn set_acceleration_all(&mut self, acceleration: Vec2) {
        for particle in &mut self.particles {
            particle.acceleration = acceleration;
        }
    }

    /// Handles of all particles, in step order
    pub fn handles(&self) -> impl Iterator<Item = ParticleHandle> + use<> {
        (0..self.particles.len()).map(ParticleHandle)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Read-only view of the buffer: `height` rows of `width` cells
    pub fn snapshot(&self) -> &[Vec<String>] {
        &self.buffer
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.buffer
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Reset every cell to the empty token
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            for cell in row.iter_mut() {
                cell.clone_from(&self.empty_cell);
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn empty_cell(&self) -> &str {
        &self.empty_cell
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }
}
