use std::fmt;

#[derive(Debug)]
pub enum CorpusError {
    Io(String),
    Archive(String),
    UnsafeEntry(String),
    MissingLabel(String),
    Landmark(landmark::LandmarkError),
    Subspace(subspace::SubspaceError),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io(msg) => write!(f, "io error: {msg}"),
            CorpusError::Archive(msg) => write!(f, "archive error: {msg}"),
            CorpusError::UnsafeEntry(name) => {
                write!(f, "archive entry escapes the extraction directory: {name}")
            }
            CorpusError::MissingLabel(name) => write!(f, "cannot derive a label for {name}"),
            CorpusError::Landmark(err) => write!(f, "landmark error: {err}"),
            CorpusError::Subspace(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err.to_string())
    }
}

impl From<zip::result::ZipError> for CorpusError {
    fn from(err: zip::result::ZipError) -> Self {
        CorpusError::Archive(err.to_string())
    }
}

impl From<landmark::LandmarkError> for CorpusError {
    fn from(err: landmark::LandmarkError) -> Self {
        CorpusError::Landmark(err)
    }
}

impl From<subspace::SubspaceError> for CorpusError {
    fn from(err: subspace::SubspaceError) -> Self {
        CorpusError::Subspace(err)
    }
}
