use serde::{Deserialize, Serialize};

/// Number of landmarks the hand-pose model reports per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Stored in `px`/`py` when a landmark has no pixel position.
pub const PIXEL_SENTINEL: i32 = -1;

/// A single hand keypoint in normalized and pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized to image width, nominally in [0.0, 1.0]
    pub x: f32,
    /// Normalized to image height, nominally in [0.0, 1.0]
    pub y: f32,
    /// Depth relative to the wrist, smaller is closer to the camera.
    pub z: f32,
    pub px: i32,
    pub py: i32,
}

impl Landmark {
    /// Pixel position, or `None` if the point falls outside the image.
    pub fn pixel(&self) -> Option<(i32, i32)> {
        if self.px == PIXEL_SENTINEL || self.py == PIXEL_SENTINEL {
            None
        } else {
            Some((self.px, self.py))
        }
    }
}

/// Hand keypoint indices, in the order the hand-pose model emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmarkIndex {
    pub const ALL: [HandLandmarkIndex; HAND_LANDMARK_COUNT] = [
        HandLandmarkIndex::Wrist,
        HandLandmarkIndex::ThumbCmc,
        HandLandmarkIndex::ThumbMcp,
        HandLandmarkIndex::ThumbIp,
        HandLandmarkIndex::ThumbTip,
        HandLandmarkIndex::IndexFingerMcp,
        HandLandmarkIndex::IndexFingerPip,
        HandLandmarkIndex::IndexFingerDip,
        HandLandmarkIndex::IndexFingerTip,
        HandLandmarkIndex::MiddleFingerMcp,
        HandLandmarkIndex::MiddleFingerPip,
        HandLandmarkIndex::MiddleFingerDip,
        HandLandmarkIndex::MiddleFingerTip,
        HandLandmarkIndex::RingFingerMcp,
        HandLandmarkIndex::RingFingerPip,
        HandLandmarkIndex::RingFingerDip,
        HandLandmarkIndex::RingFingerTip,
        HandLandmarkIndex::PinkyMcp,
        HandLandmarkIndex::PinkyPip,
        HandLandmarkIndex::PinkyDip,
        HandLandmarkIndex::PinkyTip,
    ];

    pub fn is_fingertip(&self) -> bool {
        matches!(
            self,
            HandLandmarkIndex::ThumbTip
                | HandLandmarkIndex::IndexFingerTip
                | HandLandmarkIndex::MiddleFingerTip
                | HandLandmarkIndex::RingFingerTip
                | HandLandmarkIndex::PinkyTip
        )
    }
}

impl From<HandLandmarkIndex> for usize {
    fn from(index: HandLandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for HandLandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        HandLandmarkIndex::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid hand landmark index: {}. Must be in range 0-{}.",
                value,
                HAND_LANDMARK_COUNT - 1
            )
        })
    }
}

/// Landmarks of one detected hand, in engine order.
///
/// Serializes as a plain list of landmark records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandResult {
    pub landmarks: Vec<Landmark>,
}

impl HandResult {
    /// Get a landmark by its semantic index
    pub fn landmark(&self, index: HandLandmarkIndex) -> Option<&Landmark> {
        self.landmarks.get(usize::from(index))
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }
}

/// One entry per detected hand. Empty means nothing was detected.
pub type DetectionOutput = Vec<HandResult>;
