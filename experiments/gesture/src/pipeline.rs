use {
    anyhow::Context,
    base::log,
    corpus::{CorpusLoader, CorpusSource},
    landmark::{ImageSource, LandmarkExtractor},
    std::path::{Path, PathBuf},
    subspace::{Classification, Classifier, ModelBuilder, SubspaceModel},
    tokio::task,
};

use crate::Settings;

/// Loads the corpus at `corpus` (zip archive or directory) and builds a model.
pub fn build_model(settings: &Settings, corpus: &Path) -> anyhow::Result<SubspaceModel> {
    let loader = CorpusLoader::new(settings.loader_config());
    let source = CorpusSource::from_path(corpus);
    let training = loader
        .load(&source, &mut settings.extractor())
        .with_context(|| format!("cannot load corpus {}", corpus.display()))?;
    let model = ModelBuilder::new(settings.model_config())
        .build(&training)
        .context("cannot build model")?;
    log::info!(
        "model ready: {} gestures, rank {}",
        model.sample_count(),
        model.rank()
    );
    Ok(model)
}

/// Classifies every photo on the blocking pool, one task per photo.
///
/// Results come back in the order of `photos`.
pub async fn classify_photos<E>(
    classifier: Classifier,
    extractor: E,
    photos: Vec<PathBuf>,
) -> anyhow::Result<Vec<(PathBuf, Classification)>>
where
    E: LandmarkExtractor + Clone + Send + 'static,
{
    let handles: Vec<_> = photos
        .into_iter()
        .map(|photo| {
            let classifier = classifier.clone();
            let mut extractor = extractor.clone();
            task::spawn_blocking(move || -> anyhow::Result<(PathBuf, Classification)> {
                let image = ImageSource::file(photo.clone());
                let landmarks = extractor
                    .extract(&image)
                    .with_context(|| format!("cannot read landmarks of {}", photo.display()))?;
                let classification = classifier
                    .classify(landmarks.as_ref())
                    .with_context(|| format!("cannot classify {}", photo.display()))?;
                Ok((photo, classification))
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await??);
    }
    Ok(results)
}

/// `The gesture is: <answer>`, prefixed with the photo path when `with_path`.
pub fn answer_line(photo: &Path, classification: &Classification, with_path: bool) -> String {
    if with_path {
        format!("{}: The gesture is: {classification}", photo.display())
    } else {
        format!("The gesture is: {classification}")
    }
}
