use crate::host::frame_dimensions;
use crate::{BridgeConfig, BridgeError, HostValue};
use handmark_base::init_logging;
use handmark_image::{decode_with_format, PixelFormat};
use handmark_infer::{
    create_registry, BackendRegistry, DetectionOutput, DetectionSession, HandBackend, SessionConfig,
};
use log::info;
use std::sync::{Arc, Mutex, MutexGuard};

/// The host-facing handle: one detection session behind a mutex.
///
/// Engines are not reentrant, so concurrent host threads are served one at
/// a time.
pub struct HandBridge {
    session: Mutex<DetectionSession>,
}

impl HandBridge {
    pub fn new(backend: Arc<dyn HandBackend>, config: SessionConfig) -> Result<Self, BridgeError> {
        Ok(Self {
            session: Mutex::new(DetectionSession::new(backend, config)?),
        })
    }

    /// Build from a config, picking the backend by name from `registry`.
    pub fn from_config(config: &BridgeConfig, registry: &BackendRegistry) -> Result<Self, BridgeError> {
        let backend = registry
            .get(&config.backend)
            .ok_or_else(|| BridgeError::UnknownBackend {
                name: config.backend.clone(),
                available: registry.list().into_iter().map(String::from).collect(),
            })?;
        Self::new(backend, config.session.clone())
    }

    /// (Re)configure. Any running engine is closed before the new one
    /// starts.
    pub fn init(&self, config: SessionConfig) -> Result<(), BridgeError> {
        info!("bridge init: {:?}", config);
        self.lock().init(config)?;
        Ok(())
    }

    /// Detect hands in a packed RGB frame.
    pub fn process(
        &self,
        frame: &HostValue,
        width: i64,
        height: i64,
    ) -> Result<DetectionOutput, BridgeError> {
        self.process_with_format(frame, width, height, PixelFormat::Rgb8)
    }

    /// Detect hands in a packed RGBA frame; alpha is ignored.
    pub fn process_rgba(
        &self,
        frame: &HostValue,
        width: i64,
        height: i64,
    ) -> Result<DetectionOutput, BridgeError> {
        self.process_with_format(frame, width, height, PixelFormat::Rgba8)
    }

    pub fn process_with_format(
        &self,
        frame: &HostValue,
        width: i64,
        height: i64,
        format: PixelFormat,
    ) -> Result<DetectionOutput, BridgeError> {
        let bytes = frame.as_frame_bytes()?;
        let (width, height) = frame_dimensions(width, height)?;
        let image = decode_with_format(bytes, width, height, format)?;
        Ok(self.lock().process_matrix(&image)?)
    }

    /// Same as [`process`](Self::process), serialized as
    /// `[[{"x":..,"y":..,"z":..,"px":..,"py":..}, ..], ..]`.
    pub fn process_json(&self, frame: &HostValue, width: i64, height: i64) -> Result<String, BridgeError> {
        let output = self.process(frame, width, height)?;
        Ok(serde_json::to_string(&output)?)
    }

    pub fn close(&self) -> Result<(), BridgeError> {
        self.lock().close()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    pub fn config(&self) -> SessionConfig {
        self.lock().config().clone()
    }

    pub fn degraded(&self) -> bool {
        self.lock().degraded()
    }

    fn lock(&self) -> MutexGuard<'_, DetectionSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Install logging and build a bridge with the built-in backends.
pub fn start(config: &BridgeConfig) -> anyhow::Result<HandBridge> {
    init_logging(&config.log)?;
    let bridge = HandBridge::from_config(config, &create_registry())?;
    info!("bridge started with {} backend", config.backend);
    Ok(bridge)
}
