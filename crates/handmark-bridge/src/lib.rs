//! In-process boundary between a scripting host and hand detection.
//!
//! A host calls [`HandBridge::init`] zero or more times, then
//! [`HandBridge::process`] once per frame and [`HandBridge::close`] once at
//! shutdown. Frames arrive as dynamic [`HostValue`]s with dimensions passed
//! separately; results go back as nested landmark records.

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod selftest;

pub use bridge::{start, HandBridge};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use host::HostValue;
pub use selftest::{gray_test_frame, self_test};

pub use handmark_image::PixelFormat;
pub use handmark_infer::{DetectionOutput, HandResult, Landmark, SessionConfig};
