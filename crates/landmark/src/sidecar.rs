use {
    crate::{HAND_LANDMARK_COUNT, ImageSource, Landmark, LandmarkError, LandmarkExtractor, LandmarkMatrix},
    serde::Deserialize,
    std::path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
struct DetectionRecord {
    #[serde(default)]
    hand_landmarks: Vec<Vec<Landmark>>,
}

/// Reads hand landmarks that a detector recorded next to each image.
///
/// For `photo.jpg` the detector output is expected in `photo.json`:
///
/// ```json
/// { "hand_landmarks": [ [ { "x": 0.41, "y": 0.72, "z": -0.03 }, ... ] ] }
/// ```
///
/// The first hand is used. An empty `hand_landmarks` list means no hand was
/// detected. In-memory images resolve their sidecar relative to `root`.
#[derive(Clone, Debug)]
pub struct SidecarExtractor {
    extension: String,
    expected_landmarks: Option<usize>,
    root: Option<PathBuf>,
}

impl Default for SidecarExtractor {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            expected_landmarks: Some(HAND_LANDMARK_COUNT),
            root: None,
        }
    }
}

impl SidecarExtractor {
    /// Set the sidecar file extension (default "json").
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Require every detected hand to have this many landmarks (`None` accepts any count).
    pub fn with_expected_landmarks(mut self, expected: Option<usize>) -> Self {
        self.expected_landmarks = expected;
        self
    }

    /// Directory that in-memory image names are relative to.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn expected_landmarks(&self) -> Option<usize> {
        self.expected_landmarks
    }

    pub fn sidecar_path(&self, image: &ImageSource) -> Result<PathBuf, LandmarkError> {
        let image_path = match image {
            ImageSource::File(path) => path.clone(),
            ImageSource::Memory { name, .. } => match &self.root {
                Some(root) => root.join(name),
                None => {
                    return Err(LandmarkError::Io(format!(
                        "no sidecar root configured for in-memory image {name}"
                    )));
                }
            },
        };
        Ok(image_path.with_extension(&self.extension))
    }

    /// Parses recorded detector output.
    pub fn parse(&self, json: &[u8]) -> Result<Option<LandmarkMatrix>, LandmarkError> {
        let record: DetectionRecord = serde_json::from_slice(json)?;
        let Some(hand) = record.hand_landmarks.first() else {
            return Ok(None);
        };
        if let Some(expected) = self.expected_landmarks {
            if hand.len() != expected {
                return Err(LandmarkError::LandmarkCount {
                    expected,
                    got: hand.len(),
                });
            }
        }
        LandmarkMatrix::from_landmarks(hand).map(Some)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, LandmarkError> {
        std::fs::read(path)
            .map_err(|err| LandmarkError::Io(format!("{}: {err}", path.display())))
    }
}

impl LandmarkExtractor for SidecarExtractor {
    fn extract(&mut self, image: &ImageSource) -> Result<Option<LandmarkMatrix>, LandmarkError> {
        let path = self.sidecar_path(image)?;
        let json = self.read(&path)?;
        self.parse(&json)
    }
}
