use std::path::{Path, PathBuf};

/// Where an image lives: on disk or already in memory.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    File(PathBuf),
    Memory { name: String, data: Vec<u8> },
}

impl ImageSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::File(path.into())
    }

    pub fn memory(name: impl Into<String>, data: Vec<u8>) -> Self {
        ImageSource::Memory {
            name: name.into(),
            data,
        }
    }

    /// Name used in log lines and for file-stem labels.
    pub fn name(&self) -> String {
        match self {
            ImageSource::File(path) => path.display().to_string(),
            ImageSource::Memory { name, .. } => name.clone(),
        }
    }

    /// File name without directories and extension.
    pub fn stem(&self) -> Option<String> {
        let path = match self {
            ImageSource::File(path) => path.as_path(),
            ImageSource::Memory { name, .. } => Path::new(name),
        };
        path.file_stem().map(|s| s.to_string_lossy().into_owned())
    }
}
