//! Human-readable debug readout shown over the canvas

use serde::Serialize;

use crate::error::Result;
use crate::input::InputState;
use crate::math::round2;
use crate::sim::MotionState;
use crate::tilt::TiltSensor;

/// Snapshot of the values worth watching while playing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReadout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_y: Option<f64>,
    pub speed_x: f64,
    pub speed_y: f64,
    pub held_keys: InputState,
    /// Why tilt is not active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt: Option<String>,
}

impl DebugReadout {
    pub fn capture(state: &MotionState, input: &InputState, sensor: &TiltSensor) -> Result<Self> {
        let sample = sensor.latest().filter(|_| sensor.is_enabled());
        Ok(Self {
            acc_x: sample.map(|s| s.x),
            acc_y: sample.map(|s| s.y),
            speed_x: round2(state.velocity.x)?.abs(),
            speed_y: round2(state.velocity.y)?.abs(),
            held_keys: *input,
            tilt: (!sensor.is_enabled()).then(|| sensor.debug_message().to_string()),
        })
    }

    /// Pretty-printed JSON
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("readout error: {e}"))
    }
}
