pub mod backend;
pub mod backendregistry;
pub mod backends;
pub mod config;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod session;
pub mod types;

pub use backend::{HandBackend, HandEngine};
pub use backendregistry::{create_registry, BackendRegistry};
pub use backends::ReplayBackend;
pub use config::{ModelComplexity, SessionConfig};
pub use error::InferError;
pub use normalize::{normalize, to_pixel};
pub use raw::{RawDetection, RawHand, RawLandmark};
pub use session::DetectionSession;
pub use types::{
    DetectionOutput, HandLandmarkIndex, HandResult, Landmark, HAND_LANDMARK_COUNT, PIXEL_SENTINEL,
};
