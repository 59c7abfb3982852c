use handmark_image::FrameError;

/// A value as handed over by the scripting host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<HostValue>),
}

impl HostValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::None => "none",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "str",
            HostValue::Bytes(_) => "bytes",
            HostValue::List(_) => "list",
        }
    }

    /// The pixel bytes of a frame argument.
    ///
    /// Only `Bytes` qualifies; text and lists of numbers are rejected
    /// instead of being reinterpreted.
    pub fn as_frame_bytes(&self) -> Result<&[u8], FrameError> {
        match self {
            HostValue::Bytes(bytes) => Ok(bytes),
            other => Err(FrameError::TypeMismatch {
                got: other.type_name().to_string(),
            }),
        }
    }
}

impl From<Vec<u8>> for HostValue {
    fn from(bytes: Vec<u8>) -> Self {
        HostValue::Bytes(bytes)
    }
}

/// Host integers to frame dimensions; both must be positive.
pub fn frame_dimensions(width: i64, height: i64) -> Result<(usize, usize), FrameError> {
    let invalid = FrameError::InvalidDimensions { width, height };
    if width <= 0 || height <= 0 {
        return Err(invalid);
    }
    let w = usize::try_from(width).map_err(|_| invalid.clone())?;
    let h = usize::try_from(height).map_err(|_| invalid)?;
    Ok((w, h))
}
