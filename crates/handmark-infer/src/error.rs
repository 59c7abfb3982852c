use handmark_image::FrameError;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Frame(FrameError),
    InvalidConfig(String),
    /// The installed engine does not know an optional setting.
    UnsupportedOption(String),
    Uninitialized(String),
    Engine(String),
    Io(String),
    Json(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Frame(err) => write!(f, "{err}"),
            InferError::InvalidConfig(msg) => write!(f, "invalid session config: {msg}"),
            InferError::UnsupportedOption(name) => write!(f, "unsupported engine option: {name}"),
            InferError::Uninitialized(msg) => write!(f, "detection session unavailable: {msg}"),
            InferError::Engine(msg) => write!(f, "engine error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InferError::Frame(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FrameError> for InferError {
    fn from(err: FrameError) -> Self {
        InferError::Frame(err)
    }
}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InferError {
    fn from(err: serde_json::Error) -> Self {
        InferError::Json(err.to_string())
    }
}
