//! Held keyboard controls
//!
//! Maps DOM `KeyboardEvent.key` values to the four logical controls and
//! tracks which of them are currently active.

use serde::Serialize;

/// Logical control a recognized key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Thrust,
    GravitySuspend,
}

impl Control {
    /// Map a `KeyboardEvent.key` value to a control
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" => Some(Control::MoveLeft),
            "ArrowRight" | "d" => Some(Control::MoveRight),
            " " => Some(Control::Thrust),
            "Shift" => Some(Control::GravitySuspend),
            _ => None,
        }
    }
}

/// Currently held controls
///
/// Serialized names match the debug readout (`arrowLeft`, `arrowRight`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputState {
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub space: bool,
    /// Gravity suspended (toggled on Shift release, not held)
    pub shift: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event.
    ///
    /// Returns true if the key is recognized. Auto-repeated presses count too,
    /// so the input reaction runs once per delivered event.
    pub fn press(&mut self, key: &str) -> bool {
        match Control::from_key(key) {
            Some(Control::MoveLeft) => self.arrow_left = true,
            Some(Control::MoveRight) => self.arrow_right = true,
            Some(Control::Thrust) => {
                self.space = true;
                self.shift = false;
            }
            // Shift acts on release only
            Some(Control::GravitySuspend) | None => return false,
        }
        true
    }

    /// Handle a key-up event. Returns true if the key is recognized.
    pub fn release(&mut self, key: &str) -> bool {
        match Control::from_key(key) {
            Some(Control::MoveLeft) => self.arrow_left = false,
            Some(Control::MoveRight) => self.arrow_right = false,
            Some(Control::Thrust) => self.space = false,
            Some(Control::GravitySuspend) => {
                self.shift = !self.shift;
                log::info!(
                    "Gravity {}",
                    if self.shift { "suspended" } else { "restored" }
                );
            }
            None => return false,
        }
        true
    }

    /// Gravity-suspend mode active
    #[inline]
    pub fn gravity_suspended(&self) -> bool {
        self.shift
    }
}
