//! Ring rasterization
//!
//! A particle is drawn as a ring of sampled points, not a filled disk. Two
//! quirks of the sampler are load-bearing for the picture on screen:
//! - sample angles step in degrees but are fed to `cos`/`sin` unconverted,
//!   so the samples scatter around the ring instead of walking it in order
//! - sampling starts from the transposed position `(y, x)`, whose `x`
//!   then picks the buffer row and `y` the column

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::transpose;

/// Cells covered by a ring, as `(row, col)`, one entry per angle sample.
///
/// Samples that round to the same cell are repeated. Every cell is clamped
/// into a `rows` x `cols` buffer.
pub fn ring_cells(
    position: Vec2,
    radius: u32,
    physics: &PhysicsConfig,
    rows: usize,
    cols: usize,
) -> Vec<(usize, usize)> {
    let reach = radius as f32 + physics.bounce_layer as f32;
    let origin = transpose(position);
    let step = physics.draw_step_angle.max(1) as usize;

    (0..360u32)
        .step_by(step)
        .map(|angle| {
            let angle = angle as f32;
            let target = origin + Vec2::new(angle.cos(), angle.sin()) * reach;
            (clamp_index(target.x, rows), clamp_index(target.y, cols))
        })
        .collect()
}

/// Round half away from zero, then clamp into `0..len`
#[inline]
fn clamp_index(coord: f32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (coord.round() as i64).clamp(0, max) as usize
}
