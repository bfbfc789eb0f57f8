//! Deterministic simulation module
//!
//! Everything that moves or draws particles lives here. This module must be
//! pure and deterministic:
//! - One fixed step per call, no wall-clock time
//! - Stable iteration order (particle list order)
//! - No terminal or platform dependencies

pub mod collision;
pub mod raster;
pub mod state;
pub mod tick;

pub use collision::{WallHit, resolve_axis};
pub use raster::ring_cells;
pub use state::{Particle, ParticleHandle, Simulation};
