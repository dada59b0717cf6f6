//! Per-frame update and input reactions
//!
//! A frame runs [`tick`] (integrate, resolve edges, damp), renders, then
//! advances the frame counter. Keyboard and tilt events are applied between
//! frames through [`react`] and [`apply_tilt`].

use crate::consts::*;
use crate::error::Result;
use crate::input::InputState;
use crate::math::{clamp_value, round2};
use crate::tilt::TiltSample;

use super::collision::{EdgeHits, resolve_bounds};
use super::state::MotionState;

/// Advance the ball by one frame (everything except rendering and the
/// frame counter).
///
/// Damping is skipped while tilt steers the ball.
pub fn tick(state: &mut MotionState, tilt_active: bool) -> Result<EdgeHits> {
    state.position += state.velocity;

    let hits = resolve_bounds(state)?;

    if !tilt_active {
        damp(state)?;
    }

    Ok(hits)
}

/// Friction on the horizontal axis and gravity on the vertical one, every
/// [`DAMPING_INTERVAL`] frames
pub fn damp(state: &mut MotionState) -> Result<()> {
    if !state.is_damping_frame() {
        return Ok(());
    }

    let vel = &mut state.velocity;
    if vel.x.abs() < FRICTION {
        vel.x = 0.0;
    }
    if vel.x != 0.0 {
        let change = if vel.x > 0.0 { -FRICTION } else { FRICTION };
        vel.x = round2(vel.x + change)?;
    }

    vel.y = round2(vel.y + state.gravity)?;
    Ok(())
}

/// React to the held keyboard controls.
///
/// Gravity always follows the suspend flag. Velocity is left alone while
/// tilt is active, since tilt is then the only velocity authority.
pub fn react(state: &mut MotionState, input: &InputState, tilt_active: bool) -> Result<()> {
    state.gravity = if input.gravity_suspended() {
        0.0
    } else {
        GRAVITY_PULL
    };

    if tilt_active {
        return Ok(());
    }

    let vel = &mut state.velocity;
    if input.arrow_left && input.arrow_right {
        vel.x = 0.0;
    } else if input.arrow_left {
        vel.x = clamp_value(round2(vel.x - MOVE_STEP)?, None, Some(MAX_SPEED.x));
    } else if input.arrow_right {
        vel.x = clamp_value(round2(vel.x + MOVE_STEP)?, Some(-MAX_SPEED.x), None);
    }

    if input.gravity_suspended() {
        vel.y = 0.0;
    }

    if input.space {
        vel.y = clamp_value(round2(vel.y - THRUST)?, None, Some(MAX_SPEED.y));
    }

    Ok(())
}

/// Pull velocity toward a tilt sample
pub fn apply_tilt(state: &mut MotionState, sample: &TiltSample) -> Result<()> {
    state.velocity = sample.smooth(state.velocity)?;
    Ok(())
}
