use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    SizeMismatch { expected: usize, actual: usize },
    TypeMismatch { got: String },
    InvalidDimensions { width: i64, height: i64 },
    InvalidStride { stride: usize, min: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::SizeMismatch { expected, actual } => {
                write!(f, "frame size mismatch: expected {expected} bytes, got {actual}")
            }
            FrameError::TypeMismatch { got } => {
                write!(f, "frame type mismatch: expected bytes, got {got}")
            }
            FrameError::InvalidDimensions { width, height } => {
                write!(f, "invalid frame dimensions: {width}x{height}")
            }
            FrameError::InvalidStride { stride, min } => {
                write!(f, "invalid row stride: {stride} bytes, need at least {min}")
            }
        }
    }
}

impl std::error::Error for FrameError {}
