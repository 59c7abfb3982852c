use serde::{Deserialize, Serialize};

/// A point as reported by the engine, normalized to the input image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RawLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawHand {
    pub landmarks: Vec<RawLandmark>,
}

/// Engine output for one frame.
///
/// Engines may report "nothing found" either as `None` or as an empty list;
/// both normalize to an empty output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    #[serde(default)]
    pub hands: Option<Vec<RawHand>>,
}

impl RawDetection {
    pub fn none() -> Self {
        Self { hands: None }
    }

    pub fn from_hands(hands: Vec<RawHand>) -> Self {
        Self { hands: Some(hands) }
    }

    pub fn hand_count(&self) -> usize {
        self.hands.as_ref().map_or(0, Vec::len)
    }
}
