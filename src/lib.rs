//! Ring Drop - ring-shaped particles falling through a character grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall collisions, rasterization)
//! - `config`: Scene and physics configuration (JSON via serde)
//! - `driver`: Fixed-tick loop that re-applies gravity and steps the simulation
//! - `frame`: Text rendering of grid snapshots

pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod sim;

pub use config::{ParticleSpec, PhysicsConfig, SceneConfig};
pub use driver::Driver;
pub use error::{Error, Result};
pub use sim::{Particle, ParticleHandle, Simulation};

/// 2D float vector used for positions, velocities and accelerations
pub type Vector2 = glam::Vec2;

/// Default simulation parameters
pub mod consts {
    use glam::Vec2;

    /// Gravity re-applied to every particle before each step
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.5);
    /// Reserved for a future drag model; not applied by the integrator
    pub const DRAG_COEFFICIENT: f32 = 0.0;
    /// Fraction of speed kept by a component reflected off a wall
    pub const VELOCITY_DAMPENING: f32 = 0.75;
    /// Components slower than this snap to zero
    pub const VELOCITY_THRESHOLD: f32 = 0.3;
    /// Degrees between consecutive ring samples
    pub const DRAW_STEP_ANGLE: u32 = 5;
    /// Extra radius added when drawing (not when colliding)
    pub const BOUNCE_LAYER: i32 = 0;

    /// Frame delay of the interactive loop (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 100;
}

/// Swap the components of a vector.
///
/// The rasterizer starts its ring from the transposed particle position, so
/// `x` of the result is the buffer row and `y` the buffer column.
#[inline]
pub fn transpose(v: Vector2) -> Vector2 {
    Vector2::new(v.y, v.x)
}
