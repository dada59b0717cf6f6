//! Device orientation support and permission
//!
//! Some platforms (iOS Safari) gate `deviceorientation` behind
//! `DeviceOrientationEvent.requestPermission()`, which only works from a user
//! gesture. Others deliver events as soon as a listener is attached.

use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = "
    export function orientation_support() {
        if (typeof window.DeviceOrientationEvent === 'undefined') {
            return 'none';
        }
        if (typeof window.DeviceOrientationEvent.requestPermission === 'function') {
            return 'prompt';
        }
        return 'open';
    }

    export function request_orientation_permission() {
        return window.DeviceOrientationEvent.requestPermission();
    }
")]
extern "C" {
    fn orientation_support() -> String;
    #[wasm_bindgen(catch)]
    fn request_orientation_permission() -> Result<js_sys::Promise, JsValue>;
}

/// How the platform exposes orientation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// No orientation events at all
    None,
    /// Events need an explicit permission grant
    Prompt,
    /// Events arrive without asking
    Open,
}

pub fn support() -> Support {
    match orientation_support().as_str() {
        "prompt" => Support::Prompt,
        "open" => Support::Open,
        _ => Support::None,
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Ask for orientation permission.
///
/// The request itself is issued synchronously so it still counts as part of
/// the calling user gesture; only the answer is awaited. Resolves to whether
/// permission was granted.
pub fn request_permission() -> impl Future<Output = Result<bool, String>> {
    let request = request_orientation_permission();
    async move {
        let promise = request.map_err(describe)?;
        let answer = JsFuture::from(promise).await.map_err(describe)?;
        Ok(answer.as_string().as_deref() == Some("granted"))
    }
}
