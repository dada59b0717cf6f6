//! Boundary collision and deflection
//!
//! The viewport edges are the only obstacles. Each edge is tested on its own
//! every tick, so a ball pushed into a corner bounces off both walls at once.

use crate::consts::{DEFLECTION_DECIMALS, DEFLECTION_DIVISOR};
use crate::error::Result;
use crate::math::round;

use super::state::MotionState;

/// Which edges the ball hit during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeHits {
    pub right: bool,
    pub left: bool,
    pub bottom: bool,
    pub top: bool,
}

impl EdgeHits {
    pub fn any(&self) -> bool {
        self.right || self.left || self.bottom || self.top
    }
}

/// Rebound speed after hitting a wall.
///
/// The speed is inverted and divided by [`DEFLECTION_DIVISOR`]. A rebound no
/// stronger than `gravity` is swallowed entirely so a resting ball does not
/// micro-bounce forever.
pub fn deflect(speed: f64, gravity: f64) -> Result<f64> {
    let deflection = round(speed / DEFLECTION_DIVISOR * -1.0, DEFLECTION_DECIMALS)?;
    if deflection.abs() <= gravity {
        return Ok(0.0);
    }
    Ok(deflection)
}

/// Check one axis against both of its edges. Returns (far edge hit, near edge hit).
fn resolve_axis(
    position: &mut f64,
    speed: &mut f64,
    extent: f64,
    radius: f64,
    gravity: f64,
) -> Result<(bool, bool)> {
    let mut far = false;
    let mut near = false;

    if *position + radius > extent {
        *speed = deflect(*speed, gravity)?;
        *position = extent - radius;
        far = true;
    }

    if *position - radius < 0.0 {
        *speed = deflect(*speed, gravity)?;
        *position = radius;
        near = true;
    }

    Ok((far, near))
}

/// Push the ball back inside the viewport, deflecting its speed on every
/// edge it crossed
pub fn resolve_bounds(state: &mut MotionState) -> Result<EdgeHits> {
    let radius = state.radius;
    let gravity = state.gravity;
    let viewport = state.viewport;

    let (right, left) = resolve_axis(
        &mut state.position.x,
        &mut state.velocity.x,
        viewport.width,
        radius,
        gravity,
    )?;
    let (bottom, top) = resolve_axis(
        &mut state.position.y,
        &mut state.velocity.y,
        viewport.height,
        radius,
        gravity,
    )?;

    let hits = EdgeHits {
        right,
        left,
        bottom,
        top,
    };
    if hits.any() {
        log::trace!("Bounce {:?} -> velocity {:?}", hits, state.velocity);
    }
    Ok(hits)
}
