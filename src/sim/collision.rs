//! Wall collision detection and response
//!
//! Each axis is handled on its own against the two walls that bound it. The
//! test works on the cell a particle's centre falls into (`floor(position)`),
//! so a particle may sit a fraction of a cell past `extent - 1 - radius`
//! without being pushed back.

/// Which wall of an axis was hit during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    None,
    /// The zero-coordinate wall (top or left)
    Low,
    /// The `extent - 1` wall (bottom or right)
    High,
}

/// Resolve one axis of a particle against the walls `0` and `extent - 1`.
///
/// On a hit the position is clamped back so the ring touches the wall and
/// the velocity component is reflected and scaled by `dampening`. The high
/// wall is checked first; at most one wall is hit per call.
pub fn resolve_axis(
    position: &mut f32,
    velocity: &mut f32,
    radius: u32,
    extent: usize,
    dampening: f32,
) -> WallHit {
    let cell = position.floor() as i64;
    let radius = i64::from(radius);
    let last = extent as i64 - 1;

    let hit = if cell.saturating_add(radius) > last {
        *position = (last - radius) as f32;
        WallHit::High
    } else if cell.saturating_sub(radius) < 0 {
        *position = radius as f32;
        WallHit::Low
    } else {
        return WallHit::None;
    };

    *velocity *= -dampening;
    hit
}
