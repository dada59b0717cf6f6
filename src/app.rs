//! Simulation owner and render loop
//!
//! [`Simulation`] is the single owner of all mutable state. Keyboard events,
//! tilt samples and frames all go through its methods, on the same thread
//! as the animation callback, so no frame ever sees a half-applied event.

use crate::debug::DebugReadout;
use crate::error::{BallError, Result};
use crate::input::InputState;
use crate::renderer::{Surface, draw_ball};
use crate::settings::Settings;
use crate::sim::{self, EdgeHits, MotionState, Viewport};
use crate::tilt::TiltSensor;

/// Ball, controls and sensor
#[derive(Debug, Clone)]
pub struct Simulation {
    pub motion: MotionState,
    pub input: InputState,
    pub tilt: TiltSensor,
    pub settings: Settings,
}

impl Simulation {
    pub fn new(viewport: Viewport, settings: Settings) -> Self {
        let mut tilt = TiltSensor::new();
        if !settings.tilt {
            tilt.unsupported("turned off in settings");
        }

        Self {
            motion: MotionState::new(viewport),
            input: InputState::new(),
            tilt,
            settings,
        }
    }

    /// Tilt is the velocity authority
    #[inline]
    pub fn tilt_active(&self) -> bool {
        self.tilt.is_enabled()
    }

    /// Key pressed. Returns true if the key is one of ours.
    pub fn key_down(&mut self, key: &str) -> Result<bool> {
        if !self.input.press(key) {
            return Ok(false);
        }
        self.react()?;
        Ok(true)
    }

    /// Key released. Returns true if the key is one of ours.
    pub fn key_up(&mut self, key: &str) -> Result<bool> {
        if !self.input.release(key) {
            return Ok(false);
        }
        self.react()?;
        Ok(true)
    }

    fn react(&mut self) -> Result<()> {
        let tilt_active = self.tilt_active();
        sim::react(&mut self.motion, &self.input, tilt_active)
    }

    /// Orientation reading arrived. Returns true if it was applied.
    pub fn orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) -> Result<bool> {
        match self.tilt.receive(beta, gamma)? {
            Some(sample) => {
                sim::apply_tilt(&mut self.motion, &sample)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Run one display frame: physics, draw, then advance the frame counter.
    ///
    /// Fails without touching the state if there is no surface yet.
    pub fn frame(&mut self, surface: Option<&mut dyn Surface>) -> Result<EdgeHits> {
        let surface = surface.ok_or(BallError::UninitializedSurface)?;

        let tilt_active = self.tilt_active();
        let hits = sim::tick(&mut self.motion, tilt_active)?;
        draw_ball(surface, &self.motion, &self.settings.ball_color);
        self.motion.advance_frame();

        Ok(hits)
    }

    pub fn readout(&self) -> Result<DebugReadout> {
        DebugReadout::capture(&self.motion, &self.input, &self.tilt)
    }
}

/// Scheduling state of the per-frame loop.
///
/// The host owns the actual callback scheduling (`requestAnimationFrame` in
/// the browser); this type guards against a second loop, remembers the
/// pending callback handle and decides whether another frame may be queued.
#[derive(Debug, Default)]
pub struct RenderLoop {
    running: bool,
    pending: Option<i32>,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the loop. Returns false if it is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            log::warn!("Render loop already running, ignoring start");
            return false;
        }
        self.running = true;
        log::info!("Render loop started");
        true
    }

    /// Stop the loop, returning the pending callback handle to cancel
    pub fn stop(&mut self) -> Option<i32> {
        if self.running {
            log::info!("Render loop stopped after {} frames", self.frames);
        }
        self.running = false;
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run since start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Remember the handle of the next queued callback
    pub fn scheduled(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// Run one frame.
    ///
    /// Returns `Ok(true)` if the next frame should be scheduled, `Ok(false)`
    /// if the loop was stopped. A failed frame stops the loop.
    pub fn frame(&mut self, sim: &mut Simulation, surface: Option<&mut dyn Surface>) -> Result<bool> {
        self.pending = None;
        if !self.running {
            return Ok(false);
        }

        if let Err(e) = sim.frame(surface) {
            self.running = false;
            return Err(e);
        }
        self.frames += 1;
        Ok(true)
    }
}
