//! Platform abstraction layer
//!
//! Browser-only pieces that cannot run natively:
//! - Orientation sensor support detection and permission request

#[cfg(target_arch = "wasm32")]
pub mod orientation;
