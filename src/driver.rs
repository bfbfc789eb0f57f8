//! Fixed-tick driver
//!
//! Owns a simulation, re-applies gravity before every step and paces frames
//! with an injectable sleep so tests can run without waiting.

use std::ops::ControlFlow;
use std::time::Duration;

use glam::Vec2;

use crate::config::SceneConfig;
use crate::consts::FRAME_DELAY_MS;
use crate::error::Result;
use crate::sim::Simulation;

/// Runs a simulation one frame at a time
pub struct Driver {
    sim: Simulation,
    gravity: Vec2,
    frame: u64,
    frame_delay: Duration,
    sleep: Box<dyn FnMut(Duration)>,
}

impl Driver {
    /// Wrap a simulation, taking gravity from its physics constants
    pub fn new(sim: Simulation) -> Self {
        Self {
            gravity: sim.physics().gravity,
            sim,
            frame: 0,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Build the grid and launch every particle described by a scene
    pub fn from_scene(scene: &SceneConfig) -> Result<Self> {
        let mut sim = Simulation::with_physics(
            scene.width,
            scene.height,
            scene.empty_cell.clone(),
            scene.physics.clone(),
        )?;
        for spec in &scene.particles {
            let handle = sim.add_particle(spec.glyph.clone(), spec.radius, spec.position)?;
            sim.set_velocity(handle, spec.velocity)?;
        }
        log::info!(
            "Scene ready: {}x{} grid, {} particles",
            sim.width(),
            sim.height(),
            sim.particles().len()
        );
        Ok(Self::new(sim).with_frame_delay(Duration::from_millis(scene.frame_delay_ms)))
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Replace the function used to wait between frames
    pub fn with_sleep(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    /// Apply gravity to every particle and step once
    pub fn tick(&mut self) {
        self.sim.set_acceleration_all(self.gravity);
        self.sim.step_frame();
        self.frame += 1;
    }

    /// Tick until `limit` frames have run or `on_frame` breaks.
    ///
    /// `on_frame` sees the simulation after each tick together with the frame
    /// number (starting at 1). The frame delay is slept after every frame
    /// that does not end the run. Returns the number of frames run.
    pub fn run<F>(&mut self, limit: Option<u64>, mut on_frame: F) -> u64
    where
        F: FnMut(&Simulation, u64) -> ControlFlow<()>,
    {
        let mut ran = 0;
        while limit.is_none_or(|limit| ran < limit) {
            self.tick();
            ran += 1;
            if on_frame(&self.sim, self.frame).is_break() {
                log::info!("Stopped after frame {}", self.frame);
                break;
            }
            if limit.is_some_and(|limit| ran >= limit) {
                break;
            }
            (self.sleep)(self.frame_delay);
        }
        ran
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
