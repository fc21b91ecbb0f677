use std::fmt;

#[derive(Debug)]
pub enum SubspaceError {
    EmptyCorpus,
    InconsistentFeatureLength {
        index: usize,
        expected: usize,
        got: usize,
    },
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    EmptyModel,
    InvalidRank(usize),
    LabelOverflow(usize),
    Decomposition(String),
    CorruptModel(String),
    Io(String),
    Json(String),
}

impl fmt::Display for SubspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubspaceError::EmptyCorpus => write!(f, "training corpus is empty"),
            SubspaceError::InconsistentFeatureLength {
                index,
                expected,
                got,
            } => write!(
                f,
                "sample {index} has {got} features, expected {expected}"
            ),
            SubspaceError::DimensionMismatch { expected, got } => write!(
                f,
                "query has {got} landmarks, model was trained on {expected}"
            ),
            SubspaceError::EmptyModel => write!(f, "no model has been built"),
            SubspaceError::InvalidRank(rank) => write!(f, "invalid rank: {rank}"),
            SubspaceError::LabelOverflow(count) => {
                write!(f, "{count} samples exceed the alphabetic labels A-Z")
            }
            SubspaceError::Decomposition(msg) => write!(f, "decomposition error: {msg}"),
            SubspaceError::CorruptModel(msg) => write!(f, "corrupt model: {msg}"),
            SubspaceError::Io(msg) => write!(f, "io error: {msg}"),
            SubspaceError::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl std::error::Error for SubspaceError {}

impl From<std::io::Error> for SubspaceError {
    fn from(err: std::io::Error) -> Self {
        SubspaceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SubspaceError {
    fn from(err: serde_json::Error) -> Self {
        SubspaceError::Json(err.to_string())
    }
}
