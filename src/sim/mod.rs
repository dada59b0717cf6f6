//! Deterministic motion module
//!
//! All physics lives here. This module must stay pure:
//! - One step per display frame, no time deltas
//! - Every stored velocity rounded through `math::round`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{EdgeHits, deflect, resolve_bounds};
pub use state::{MotionState, Viewport};
pub use tick::{apply_tilt, damp, react, tick};
