//! Tilt Ball - a single ball bouncing inside the viewport
//!
//! Core modules:
//! - `sim`: Deterministic motion (integration, deflection, damping, input reaction)
//! - `input`: Held keyboard controls
//! - `tilt`: Device orientation sensor state and sample smoothing
//! - `renderer`: 2D drawing surface abstraction
//! - `platform`: Browser-only glue (orientation permission)
//! - `app`: Simulation owner and render loop contract

pub mod app;
pub mod debug;
pub mod error;
pub mod input;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tilt;

pub use app::{RenderLoop, Simulation};
pub use error::{BallError, Result};
pub use settings::Settings;

/// Physics configuration constants
pub mod consts {
    use glam::DVec2;

    /// Gravitational pull added to vertical speed on every damping tick
    pub const GRAVITY_PULL: f64 = 0.5;
    /// Speed caps applied by keyboard reactions
    pub const MAX_SPEED: DVec2 = DVec2::new(5.0, 5.0);

    /// Ball radius (pixels)
    pub const RADIUS: f64 = 25.0;

    /// Rebound speed = incoming speed / this divisor
    pub const DEFLECTION_DIVISOR: f64 = 1.5;
    /// Decimals kept after a deflection
    pub const DEFLECTION_DECIMALS: i32 = 4;

    /// Horizontal friction applied per damping tick
    pub const FRICTION: f64 = 0.05;
    /// Damping runs on every Nth frame
    pub const DAMPING_INTERVAL: u32 = 16;
    /// Frame counter wraps at this value
    pub const FRAME_WRAP: u32 = 64;

    /// Horizontal speed change per arrow key reaction
    pub const MOVE_STEP: f64 = 0.5;
    /// Upward impulse per thrust reaction
    pub const THRUST: f64 = GRAVITY_PULL * 1.5;

    /// Fraction of the gap closed toward each tilt sample
    pub const TILT_LERP: f64 = 0.25;
}
