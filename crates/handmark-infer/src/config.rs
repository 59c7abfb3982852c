use crate::InferError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Landmark model tier. Serialized as the engine's integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ModelComplexity {
    Lite = 0,
    Full = 1,
}

impl From<ModelComplexity> for u8 {
    fn from(complexity: ModelComplexity) -> u8 {
        complexity as u8
    }
}

impl TryFrom<u8> for ModelComplexity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ModelComplexity::Lite),
            1 => Ok(ModelComplexity::Full),
            _ => Err(format!("model complexity must be 0 or 1, got {value}")),
        }
    }
}

/// Options a detection engine is created with.
///
/// Defaults match the desktop host demo: video mode, two hands, 0.7 for
/// both thresholds and the engine's own model tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Run detection on every frame instead of tracking between frames.
    pub static_image_mode: bool,
    pub max_num_hands: usize,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    /// Not understood by older engine builds; see `DetectionSession`.
    pub model_complexity: Option<ModelComplexity>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            static_image_mode: false,
            max_num_hands: 2,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
            model_complexity: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, InferError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_static_image_mode(mut self, enabled: bool) -> Self {
        self.static_image_mode = enabled;
        self
    }

    pub fn with_max_num_hands(mut self, count: usize) -> Self {
        self.max_num_hands = count;
        self
    }

    /// Set detection and tracking thresholds (builder pattern)
    pub fn with_confidence(mut self, detection: f32, tracking: f32) -> Self {
        self.min_detection_confidence = detection;
        self.min_tracking_confidence = tracking;
        self
    }

    pub fn with_model_complexity(mut self, complexity: ModelComplexity) -> Self {
        self.model_complexity = Some(complexity);
        self
    }

    /// The same options minus everything an older engine may reject.
    pub fn without_model_complexity(&self) -> Self {
        Self {
            model_complexity: None,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), InferError> {
        check_confidence("min_detection_confidence", self.min_detection_confidence)?;
        check_confidence("min_tracking_confidence", self.min_tracking_confidence)?;
        if self.max_num_hands == 0 {
            return Err(InferError::InvalidConfig(
                "max_num_hands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_confidence(name: &str, value: f32) -> Result<(), InferError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(InferError::InvalidConfig(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}
