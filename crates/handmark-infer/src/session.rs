use crate::{
    normalize, DetectionOutput, HandBackend, HandEngine, InferError, SessionConfig,
};
use handmark_image::{decode, ImageMatrix};
use log::{debug, error, info, warn};
use std::sync::Arc;

/// Owned handle to a detection engine.
///
/// The engine is created lazily on the first frame (or eagerly by
/// [`init`](Self::init)), replaced on reconfiguration and released by
/// [`close`](Self::close). At most one engine is live at a time: the old
/// one is always closed before its replacement is created.
pub struct DetectionSession {
    backend: Arc<dyn HandBackend>,
    config: SessionConfig,
    engine: Option<Box<dyn HandEngine>>,
    degraded: bool,
}

impl DetectionSession {
    /// Create a session without starting an engine.
    pub fn new(backend: Arc<dyn HandBackend>, config: SessionConfig) -> Result<Self, InferError> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            engine: None,
            degraded: false,
        })
    }

    /// Replace the configuration and start a fresh engine with it.
    ///
    /// On an invalid config nothing changes. Otherwise the previous engine
    /// is closed first; if closing fails the error is returned and the old
    /// configuration stays.
    pub fn init(&mut self, config: SessionConfig) -> Result<(), InferError> {
        config.validate()?;
        self.close()?;
        self.config = config;
        let engine = self.create_engine()?;
        self.engine = Some(engine);
        Ok(())
    }

    /// Decode a packed RGB frame, run the engine on it and normalize the
    /// result.
    pub fn process(
        &mut self,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<DetectionOutput, InferError> {
        let image = decode(buffer, width, height)?;
        self.process_matrix(&image)
    }

    pub fn process_matrix(&mut self, image: &ImageMatrix<'_>) -> Result<DetectionOutput, InferError> {
        if self.engine.is_none() {
            debug!("no live {} engine, creating one", self.backend.name());
            let engine = self
                .create_engine()
                .map_err(|e| InferError::Uninitialized(e.to_string()))?;
            self.engine = Some(engine);
        }
        let Some(engine) = self.engine.as_mut() else {
            return Err(InferError::Uninitialized("no engine".to_string()));
        };

        let raw = engine.process(image)?;
        normalize(&raw, image.width(), image.height())
    }

    /// Release the live engine, if any. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<(), InferError> {
        self.degraded = false;
        if let Some(mut engine) = self.engine.take() {
            info!("closing {} engine", self.backend.name());
            engine.close()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// True when the live engine had to be created without the optional
    /// settings. Always false while no engine is live.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    fn create_engine(&mut self) -> Result<Box<dyn HandEngine>, InferError> {
        self.degraded = false;
        match self.backend.create(&self.config) {
            Ok(engine) => {
                info!("{} engine created: {:?}", self.backend.name(), self.config);
                Ok(engine)
            }
            Err(InferError::UnsupportedOption(option)) if self.config.model_complexity.is_some() => {
                warn!(
                    "{} engine does not support {}, retrying without model_complexity",
                    self.backend.name(),
                    option
                );
                let engine = self.backend.create(&self.config.without_model_complexity())?;
                self.degraded = true;
                Ok(engine)
            }
            Err(e) => Err(e),
        }
    }
}

impl Drop for DetectionSession {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!("failed to close {} engine: {}", self.backend.name(), e);
        }
    }
}
