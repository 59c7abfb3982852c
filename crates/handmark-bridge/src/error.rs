use handmark_image::FrameError;
use handmark_infer::InferError;
use std::fmt;

#[derive(Debug)]
pub enum BridgeError {
    Infer(InferError),
    UnknownBackend { name: String, available: Vec<String> },
    Config(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Infer(err) => write!(f, "{err}"),
            BridgeError::UnknownBackend { name, available } => write!(
                f,
                "unknown backend '{}', available: [{}]",
                name,
                available.join(", ")
            ),
            BridgeError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Infer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InferError> for BridgeError {
    fn from(err: InferError) -> Self {
        BridgeError::Infer(err)
    }
}

impl From<FrameError> for BridgeError {
    fn from(err: FrameError) -> Self {
        BridgeError::Infer(InferError::Frame(err))
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Infer(InferError::Json(err.to_string()))
    }
}
