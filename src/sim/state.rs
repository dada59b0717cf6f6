//! Motion state of the ball
//!
//! Everything the per-frame update reads or writes lives here.

use glam::DVec2;

use crate::consts::*;
use crate::error::{BallError, Result};

/// Pixel size of the drawing area, fixed at load time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport that can hold a ball of [`RADIUS`]
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(BallError::NotFinite(if width.is_finite() { height } else { width }));
        }
        if width < RADIUS * 2.0 || height < RADIUS * 2.0 {
            return Err(BallError::ViewportTooSmall {
                width,
                height,
                radius: RADIUS,
            });
        }
        Ok(Self { width, height })
    }

    /// Viewport matching a pixel buffer, so drawing and bounds agree
    pub fn from_pixels(width: u32, height: u32) -> Result<Self> {
        Self::new(f64::from(width), f64::from(height))
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Position, velocity and gravity of the ball
#[derive(Debug, Clone)]
pub struct MotionState {
    pub viewport: Viewport,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    /// Current gravitational pull (0 while gravity is suspended)
    pub gravity: f64,
    /// Frame counter, wraps at [`FRAME_WRAP`]
    pub frame_count: u32,
}

impl MotionState {
    /// Ball at rest in the center of `viewport`
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            position: viewport.center(),
            velocity: DVec2::ZERO,
            radius: RADIUS,
            gravity: GRAVITY_PULL,
            frame_count: 0,
        }
    }

    /// Damping runs on this frame
    #[inline]
    pub fn is_damping_frame(&self) -> bool {
        self.frame_count % DAMPING_INTERVAL == 0
    }

    /// Advance and wrap the frame counter
    pub fn advance_frame(&mut self) {
        self.frame_count = (self.frame_count + 1) % FRAME_WRAP;
    }

    /// Ball lies fully inside the viewport (same edge tests as collision)
    pub fn in_bounds(&self) -> bool {
        let near = self.position - self.radius;
        let far = self.position + self.radius;
        near.cmpge(DVec2::ZERO).all() && far.cmple(self.viewport.size()).all()
    }
}
