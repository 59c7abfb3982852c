use crate::{InferError, RawDetection, SessionConfig};
use handmark_image::ImageMatrix;

/// Factory for detection engines, one per installed engine flavor.
pub trait HandBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Create a live engine.
    ///
    /// Must fail with `InferError::UnsupportedOption` (and nothing else) when
    /// the installed engine does not understand an optional setting, so the
    /// caller can retry without it.
    fn create(&self, config: &SessionConfig) -> Result<Box<dyn HandEngine>, InferError>;
}

/// A live, stateful detection engine. Not reentrant.
pub trait HandEngine: Send {
    fn process(&mut self, image: &ImageMatrix<'_>) -> Result<RawDetection, InferError>;

    /// Release the engine's resources. No `process` call follows.
    fn close(&mut self) -> Result<(), InferError>;
}
