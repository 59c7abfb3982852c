use crate::{HandBackend, HandEngine, InferError, RawDetection, SessionConfig};
use handmark_image::ImageMatrix;
use log::debug;
use std::path::Path;
use std::sync::Arc;

/// Plays back recorded engine output, one entry per processed frame.
///
/// Once the recording runs out every further frame reports no hands, so
/// `ReplayBackend::empty()` behaves like an engine looking at an empty
/// scene. Lets a host be integrated and tested without the real engine
/// installed.
#[derive(Debug, Clone)]
pub struct ReplayBackend {
    recording: Arc<Vec<RawDetection>>,
    accepts_model_complexity: bool,
}

impl ReplayBackend {
    pub const NAME: &'static str = "replay";

    pub fn new(recording: Vec<RawDetection>) -> Self {
        Self {
            recording: Arc::new(recording),
            accepts_model_complexity: true,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Load a recording: a JSON array of `{"hands": [[{"x":..,"y":..,"z":..}, ..], ..]}`.
    pub fn from_json(json: &str) -> Result<Self, InferError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Behave like an engine build that predates `model_complexity`.
    pub fn rejecting_model_complexity(mut self) -> Self {
        self.accepts_model_complexity = false;
        self
    }

    pub fn len(&self) -> usize {
        self.recording.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recording.is_empty()
    }
}

impl HandBackend for ReplayBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, config: &SessionConfig) -> Result<Box<dyn HandEngine>, InferError> {
        if config.model_complexity.is_some() && !self.accepts_model_complexity {
            return Err(InferError::UnsupportedOption("model_complexity".to_string()));
        }
        debug!(
            "replay engine created with {} recorded frames",
            self.recording.len()
        );
        Ok(Box::new(ReplayEngine {
            recording: Arc::clone(&self.recording),
            next: 0,
            max_num_hands: config.max_num_hands,
            closed: false,
        }))
    }
}

struct ReplayEngine {
    recording: Arc<Vec<RawDetection>>,
    next: usize,
    max_num_hands: usize,
    closed: bool,
}

impl HandEngine for ReplayEngine {
    fn process(&mut self, _image: &ImageMatrix<'_>) -> Result<RawDetection, InferError> {
        if self.closed {
            return Err(InferError::Engine("replay engine is closed".to_string()));
        }

        let mut frame = self.recording.get(self.next).cloned().unwrap_or_default();
        self.next += 1;

        // the real engine never reports more hands than asked for
        if let Some(hands) = frame.hands.as_mut() {
            hands.truncate(self.max_num_hands);
        }
        Ok(frame)
    }

    fn close(&mut self) -> Result<(), InferError> {
        self.closed = true;
        Ok(())
    }
}
