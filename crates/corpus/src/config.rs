use std::path::PathBuf;

/// Extension of corpus images unless configured otherwise.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// How training samples are named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// `A`, `B`, `C`, ... in load order, counting only images with a hand.
    #[default]
    Alphabetic,
    /// The image file name without extension.
    FileStem,
}

/// Configuration for corpus loading.
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    image_extension: String,
    extract_dir: PathBuf,
    label_policy: LabelPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            extract_dir: std::env::temp_dir().join("gesture-corpus"),
            label_policy: LabelPolicy::Alphabetic,
        }
    }
}

impl LoaderConfig {
    /// Set the extension identifying images (default `DEFAULT_IMAGE_EXTENSION`).
    pub fn with_image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extension = extension.into();
        self
    }

    /// Set the directory zip archives are extracted into.
    pub fn with_extract_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extract_dir = dir.into();
        self
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn image_extension(&self) -> &str {
        &self.image_extension
    }

    pub fn extract_dir(&self) -> &PathBuf {
        &self.extract_dir
    }

    pub fn label_policy(&self) -> LabelPolicy {
        self.label_policy
    }
}
