//! Page settings
//!
//! Read from the page query string (`?debug=0&color=teal&tilt=off`).
//! Never persisted; physics constants are not configurable.

/// Query keys we understand
pub const KEYS: [&str; 3] = ["debug", "tilt", "color"];

/// Display and input preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Show the debug readout
    pub show_debug: bool,
    /// Fill color of the ball (CSS color)
    pub ball_color: String,
    /// Try to use the orientation sensor at all
    pub tilt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_debug: true,
            ball_color: "red".to_string(),
            tilt: true,
        }
    }
}

/// A bare key (`?debug`) reads as on
fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<String> {
    let color = value.trim();
    let valid = !color.is_empty()
        && color.len() <= 32
        && color
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "#(),. %".contains(c));
    valid.then(|| color.to_string())
}

impl Settings {
    /// Apply one decoded `key`/`value` pair.
    ///
    /// Unknown keys and malformed values are ignored and return false.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        let applied = match key {
            "debug" => parse_flag(value).map(|v| self.show_debug = v),
            "tilt" => parse_flag(value).map(|v| self.tilt = v),
            "color" => parse_color(value).map(|v| self.ball_color = v),
            _ => None,
        };
        if applied.is_none() {
            log::warn!("Ignoring setting {}={:?}", key, value);
        }
        applied.is_some()
    }

    /// Build settings from decoded query pairs, later pairs winning
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.apply(key, value);
        }
        settings
    }

    /// Load settings from the page URL (WASM only)
    ///
    /// Decoding is left to the browser's `URLSearchParams`.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let values: Vec<(&str, String)> = match web_sys::UrlSearchParams::new_with_str(&search) {
            Ok(params) => KEYS
                .iter()
                .filter_map(|&key| params.get(key).map(|value| (key, value)))
                .collect(),
            Err(e) => {
                log::warn!("Unreadable query string {:?}: {:?}", search, e);
                Vec::new()
            }
        };

        let settings = Self::from_pairs(values.iter().map(|(k, v)| (*k, v.as_str())));
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
