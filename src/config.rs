//! Scene and physics configuration
//!
//! Everything the simulation reads at construction time. Loaded from JSON;
//! every field falls back to the stock scene when omitted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Physics constants shared by all particles of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration the driver re-applies before every step, as `[x, y]`
    pub gravity: Vec2,
    /// Reserved for a future drag model; the integrator ignores it
    pub drag_coefficient: f32,
    /// Speed fraction kept by a component reflected off a wall
    pub velocity_dampening: f32,
    /// Components with a smaller magnitude snap to exactly zero
    pub velocity_threshold: f32,
    /// Degrees between consecutive ring samples (must be > 0)
    pub draw_step_angle: u32,
    /// Extra radius used when drawing rings
    pub bounce_layer: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag_coefficient: DRAG_COEFFICIENT,
            velocity_dampening: VELOCITY_DAMPENING,
            velocity_threshold: VELOCITY_THRESHOLD,
            draw_step_angle: DRAW_STEP_ANGLE,
            bounce_layer: BOUNCE_LAYER,
        }
    }
}

impl PhysicsConfig {
    /// Reject constants the step or the rasterizer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.draw_step_angle == 0 {
            return Err(Error::InvalidConfig(
                "draw_step_angle must be > 0".to_string(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(Error::InvalidConfig("gravity must be finite".to_string()));
        }
        let scalars = [
            ("drag_coefficient", self.drag_coefficient),
            ("velocity_dampening", self.velocity_dampening),
            ("velocity_threshold", self.velocity_threshold),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

/// A particle to place in the scene at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub glyph: String,
    pub radius: i64,
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            glyph: "■".to_string(),
            radius: 2,
            position: Vec2::new(15.0, 15.0),
            velocity: Vec2::new(3.0, 5.0),
        }
    }
}

/// Complete start-up description: grid, particles, pacing and physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: i64,
    pub height: i64,
    /// Token drawn in cells no particle occupies
    pub empty_cell: String,
    pub particles: Vec<ParticleSpec>,
    /// Delay between frames of the interactive loop
    pub frame_delay_ms: u64,
    /// Stop after this many frames (`None` runs until interrupted)
    pub frames: Option<u64>,
    pub physics: PhysicsConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 55,
            height: 55,
            empty_cell: " ".to_string(),
            particles: vec![ParticleSpec::default()],
            frame_delay_ms: FRAME_DELAY_MS,
            frames: None,
            physics: PhysicsConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a scene from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.physics.validate()?;
        Ok(scene)
    }

    /// Read and parse a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {} ({}x{}, {} particles)",
            path.display(),
            scene.width,
            scene.height,
            scene.particles.len()
        );
        Ok(scene)
    }
}
