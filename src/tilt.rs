//! Device tilt sensor
//!
//! Tracks the permission lifecycle of the orientation sensor and turns raw
//! `{beta, gamma}` readings into samples that steer the ball. The browser
//! side (permission request, event listener) lives in `platform::orientation`;
//! this module is plain state so it can be driven from tests.

use glam::DVec2;

use crate::consts::TILT_LERP;
use crate::error::Result;
use crate::math::{lerp, round2};

/// Sensor lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltStatus {
    /// Permission not yet requested or still being answered
    Pending,
    /// Listener attached, no live event seen yet
    Listening,
    /// Live events are arriving
    Enabled,
    /// User or platform refused permission
    Denied,
    /// No orientation support on this platform
    Unsupported,
}

/// One orientation reading, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSample {
    /// Left/right tilt, sign-inverted gamma
    pub x: f64,
    /// Front/back tilt (beta)
    pub y: f64,
}

impl TiltSample {
    /// Build a sample from orientation angles; a missing angle reads as 0
    pub fn from_orientation(beta: Option<f64>, gamma: Option<f64>) -> Result<Self> {
        let degrees = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(0.0);
        Ok(Self {
            x: -round2(degrees(gamma))? + 0.0,
            y: round2(degrees(beta))?,
        })
    }

    /// Velocity this sample pulls toward (horizontal axis flipped back)
    #[inline]
    pub fn target(&self) -> DVec2 {
        DVec2::new(-self.x, self.y)
    }

    /// Move `velocity` a quarter of the way toward this sample's target
    pub fn smooth(&self, velocity: DVec2) -> Result<DVec2> {
        let target = self.target();
        Ok(DVec2::new(
            lerp(velocity.x, target.x, TILT_LERP)?,
            lerp(velocity.y, target.y, TILT_LERP)?,
        ))
    }
}

/// Orientation sensor state
#[derive(Debug, Clone)]
pub struct TiltSensor {
    status: TiltStatus,
    latest: Option<TiltSample>,
    message: String,
}

impl Default for TiltSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltSensor {
    pub fn new() -> Self {
        Self {
            status: TiltStatus::Pending,
            latest: None,
            message: "waiting for orientation permission".to_string(),
        }
    }

    pub fn status(&self) -> TiltStatus {
        self.status
    }

    /// True only once live events have arrived
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.status == TiltStatus::Enabled
    }

    /// Latest sample received, if any
    pub fn latest(&self) -> Option<TiltSample> {
        self.latest
    }

    /// Human-readable status for the debug readout
    pub fn debug_message(&self) -> &str {
        &self.message
    }

    /// Permission granted (or not required); the listener is attached
    pub fn listening(&mut self) {
        if self.status == TiltStatus::Pending {
            self.status = TiltStatus::Listening;
            self.message = "waiting for orientation events".to_string();
            log::info!("Tilt sensor listening");
        }
    }

    /// Permission refused. Permanent for this session.
    pub fn deny(&mut self, reason: &str) {
        self.status = TiltStatus::Denied;
        self.latest = None;
        self.message = format!("orientation permission denied: {reason}");
        log::warn!("Tilt sensor disabled: {}", self.message);
    }

    /// Platform has no orientation sensor. Permanent for this session.
    pub fn unsupported(&mut self, reason: &str) {
        self.status = TiltStatus::Unsupported;
        self.latest = None;
        self.message = format!("orientation unsupported: {reason}");
        log::warn!("Tilt sensor disabled: {}", self.message);
    }

    /// Record a live reading.
    ///
    /// Returns the sample to apply, or `None` when the sensor has been
    /// disabled for the session.
    pub fn receive(&mut self, beta: Option<f64>, gamma: Option<f64>) -> Result<Option<TiltSample>> {
        if matches!(self.status, TiltStatus::Denied | TiltStatus::Unsupported) {
            return Ok(None);
        }

        let sample = TiltSample::from_orientation(beta, gamma)?;
        if self.status != TiltStatus::Enabled {
            self.status = TiltStatus::Enabled;
            self.message = "orientation events live".to_string();
            log::info!("Tilt sensor enabled");
        }
        self.latest = Some(sample);
        Ok(Some(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_inverts_horizontal_only() {
        let sample = TiltSample::from_orientation(Some(10.0), Some(-20.0)).unwrap();
        assert_eq!(sample.x, 20.0);
        assert_eq!(sample.y, 10.0);
        assert_eq!(sample.target(), DVec2::new(-20.0, 10.0));
    }

    #[test]
    fn test_sample_missing_angles_read_zero() {
        let sample = TiltSample::from_orientation(None, Some(f64::NAN)).unwrap();
        assert_eq!(sample, TiltSample { x: 0.0, y: 0.0 });
        assert!(sample.x.is_sign_positive());
    }

    #[test]
    fn test_sample_no_wraparound() {
        let sample = TiltSample::from_orientation(Some(135.456), Some(0.0)).unwrap();
        assert_eq!(sample.y, 135.46);
    }

    #[test]
    fn test_smooth_quarter_step() {
        let sample = TiltSample::from_orientation(Some(8.0), Some(4.0)).unwrap();
        let v = sample.smooth(DVec2::ZERO).unwrap();
        assert_eq!(v, DVec2::new(1.0, 2.0));

        let v = sample.smooth(v).unwrap();
        assert_eq!(v, DVec2::new(1.75, 3.5));
    }

    #[test]
    fn test_not_enabled_until_live_event() {
        let mut sensor = TiltSensor::new();
        assert_eq!(sensor.status(), TiltStatus::Pending);
        assert!(!sensor.is_enabled());

        sensor.listening();
        assert_eq!(sensor.status(), TiltStatus::Listening);
        assert!(!sensor.is_enabled());

        let sample = sensor.receive(Some(1.0), Some(2.0)).unwrap();
        assert!(sample.is_some());
        assert!(sensor.is_enabled());
        assert_eq!(sensor.latest(), sample);
    }

    #[test]
    fn test_denied_stays_disabled() {
        let mut sensor = TiltSensor::new();
        sensor.deny("NotAllowedError");
        assert!(!sensor.is_enabled());
        assert!(sensor.debug_message().contains("denied"));

        assert_eq!(sensor.receive(Some(1.0), Some(1.0)).unwrap(), None);
        assert!(!sensor.is_enabled());

        sensor.listening();
        assert_eq!(sensor.status(), TiltStatus::Denied);
    }

    #[test]
    fn test_unsupported_stays_disabled() {
        let mut sensor = TiltSensor::new();
        sensor.unsupported("no DeviceOrientationEvent");
        assert_eq!(sensor.status(), TiltStatus::Unsupported);
        assert_eq!(sensor.receive(None, None).unwrap(), None);
        assert!(sensor.latest().is_none());
    }
}
