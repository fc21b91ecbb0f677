use {
    crate::{CorpusError, LabelPolicy, LoaderConfig, archive},
    base::log,
    landmark::{ImageSource, LandmarkExtractor},
    std::{
        ffi::OsStr,
        fs,
        path::{Path, PathBuf},
    },
    subspace::{Label, NO_HAND_DETECTED, SubspaceError, TrainingCorpus},
};

/// Where training images come from.
#[derive(Clone, Debug, PartialEq)]
pub enum CorpusSource {
    /// Zip archive; images are taken in entry order.
    Archive(PathBuf),
    /// Plain directory; images are taken sorted by file name.
    Directory(PathBuf),
}

impl CorpusSource {
    /// Directories are read as directories, anything else as a zip archive.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            CorpusSource::Directory(path)
        } else {
            CorpusSource::Archive(path)
        }
    }
}

/// Turns a corpus of gesture images into a `TrainingCorpus`.
#[derive(Clone, Debug, Default)]
pub struct CorpusLoader {
    config: LoaderConfig,
}

impl CorpusLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Lists the images of `source` in their stable load order.
    ///
    /// Archives are extracted into the configured extraction directory first,
    /// so detector output stored next to the images comes along.
    pub fn images(&self, source: &CorpusSource) -> Result<Vec<ImageSource>, CorpusError> {
        let paths = match source {
            CorpusSource::Archive(path) => archive::extract_all(path, self.config.extract_dir())?,
            CorpusSource::Directory(dir) => {
                let mut paths = fs::read_dir(dir)
                    .map_err(|e| CorpusError::Io(format!("{}: {e}", dir.display())))?
                    .map(|entry| entry.map(|entry| entry.path()))
                    .collect::<Result<Vec<_>, _>>()?;
                paths.retain(|path| path.is_file());
                paths.sort();
                paths
            }
        };
        Ok(paths
            .into_iter()
            .filter(|path| self.is_image(path))
            .map(ImageSource::File)
            .collect())
    }

    /// Runs every corpus image through `extractor` and labels the hands found.
    ///
    /// Images without a hand are dropped with a warning and do not use up a
    /// label.
    pub fn load<E: LandmarkExtractor>(
        &self,
        source: &CorpusSource,
        extractor: &mut E,
    ) -> Result<TrainingCorpus, CorpusError> {
        let images = self.images(source)?;
        let mut corpus = TrainingCorpus::new();
        for image in &images {
            match extractor.extract(image)? {
                Some(landmarks) => {
                    let label = self.label_for(image, corpus.len())?;
                    corpus.push(label, landmarks);
                }
                None => log::warn!("{}: {}", image.name(), NO_HAND_DETECTED),
            }
        }
        log::info!(
            "loaded {} gestures from {} images",
            corpus.len(),
            images.len()
        );
        Ok(corpus)
    }

    fn is_image(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(self.config.image_extension()))
    }

    fn label_for(&self, image: &ImageSource, index: usize) -> Result<Label, CorpusError> {
        match self.config.label_policy() {
            LabelPolicy::Alphabetic => Label::alphabetic(index)
                .ok_or(CorpusError::Subspace(SubspaceError::LabelOverflow(index + 1))),
            LabelPolicy::FileStem => image
                .stem()
                .map(Label::new)
                .ok_or_else(|| CorpusError::MissingLabel(image.name())),
        }
    }
}
