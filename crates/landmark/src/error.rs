use std::fmt;

#[derive(Debug)]
pub enum LandmarkError {
    Tensor(base::TensorError),
    Shape(String),
    NonFinite { channel: usize, index: usize },
    LandmarkCount { expected: usize, got: usize },
    Io(String),
    Json(String),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::Tensor(err) => write!(f, "tensor error: {err}"),
            LandmarkError::Shape(msg) => write!(f, "shape error: {msg}"),
            LandmarkError::NonFinite { channel, index } => {
                write!(f, "non-finite coordinate in channel {channel} at landmark {index}")
            }
            LandmarkError::LandmarkCount { expected, got } => {
                write!(f, "expected {expected} landmarks, got {got}")
            }
            LandmarkError::Io(msg) => write!(f, "io error: {msg}"),
            LandmarkError::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl std::error::Error for LandmarkError {}

impl From<base::TensorError> for LandmarkError {
    fn from(err: base::TensorError) -> Self {
        LandmarkError::Tensor(err)
    }
}

impl From<std::io::Error> for LandmarkError {
    fn from(err: std::io::Error) -> Self {
        LandmarkError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LandmarkError {
    fn from(err: serde_json::Error) -> Self {
        LandmarkError::Json(err.to_string())
    }
}
