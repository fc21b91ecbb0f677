use corpus::{CorpusError, CorpusLoader, CorpusSource, LabelPolicy, LoaderConfig};
use landmark::{ImageSource, LandmarkExtractor, LandmarkMatrix, SidecarExtractor};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use subspace::{Classifier, Label, ModelBuilder, SubspaceError};
use zip::write::SimpleFileOptions;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gesture-corpus-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Sidecar JSON for a two-landmark hand built from `seed`, or no hand.
fn sidecar(seed: Option<f64>) -> String {
    match seed {
        Some(s) => format!(
            r#"{{"hand_landmarks": [[{{"x": {s}, "y": {}, "z": 0.0}}, {{"x": {}, "y": {s}, "z": 0.1}}]]}}"#,
            s * 2.0,
            s + 1.0
        ),
        None => r#"{"hand_landmarks": []}"#.to_string(),
    }
}

fn write_sample(dir: &Path, stem: &str, seed: Option<f64>) {
    fs::write(dir.join(format!("{stem}.jpg")), b"\xff\xd8\xff").unwrap();
    fs::write(dir.join(format!("{stem}.json")), sidecar(seed)).unwrap();
}

fn write_zip(path: &Path, samples: &[(&str, Option<f64>)]) {
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (stem, seed) in samples {
        writer
            .start_file(format!("gestures/{stem}.jpg"), options)
            .unwrap();
        writer.write_all(b"\xff\xd8\xff").unwrap();
        writer
            .start_file(format!("gestures/{stem}.json"), options)
            .unwrap();
        writer.write_all(sidecar(*seed).as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn extractor() -> SidecarExtractor {
    SidecarExtractor::default().with_expected_landmarks(Some(2))
}

fn labels(corpus: &subspace::TrainingCorpus) -> Vec<String> {
    corpus.labels().map(|l| l.to_string()).collect()
}

#[test]
fn test_directory_images_sorted_by_name() {
    let dir = test_dir("sorted");
    write_sample(&dir, "c", Some(0.3));
    write_sample(&dir, "a", Some(0.1));
    write_sample(&dir, "b", Some(0.2));

    let images = CorpusLoader::default()
        .images(&CorpusSource::Directory(dir.clone()))
        .unwrap();
    let names: Vec<_> = images.iter().filter_map(ImageSource::stem).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_only_configured_extension_is_an_image() {
    let dir = test_dir("extension");
    write_sample(&dir, "a", Some(0.1));
    fs::write(dir.join("notes.txt"), "not an image").unwrap();
    fs::write(dir.join("b.png"), b"png").unwrap();

    let loader = CorpusLoader::default();
    assert_eq!(
        loader.images(&CorpusSource::Directory(dir.clone())).unwrap().len(),
        1
    );

    let png_loader = CorpusLoader::new(LoaderConfig::default().with_image_extension("png"));
    let images = png_loader.images(&CorpusSource::Directory(dir.clone())).unwrap();
    assert_eq!(images, vec![ImageSource::File(dir.join("b.png"))]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_images_without_hand_are_discarded() {
    let dir = test_dir("discard");
    write_sample(&dir, "1", Some(0.1));
    write_sample(&dir, "2", None);
    write_sample(&dir, "3", Some(0.3));

    let corpus = CorpusLoader::default()
        .load(&CorpusSource::Directory(dir.clone()), &mut extractor())
        .unwrap();
    assert_eq!(corpus.len(), 2);
    // labels count only kept samples
    assert_eq!(labels(&corpus), vec!["A", "B"]);
    assert_eq!(corpus.samples()[1].landmarks().landmark(0).unwrap().x, 0.3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_stem_labels() {
    let dir = test_dir("stem");
    write_sample(&dir, "fist", Some(0.1));
    write_sample(&dir, "palm", Some(0.5));

    let loader =
        CorpusLoader::new(LoaderConfig::default().with_label_policy(LabelPolicy::FileStem));
    let corpus = loader
        .load(&CorpusSource::Directory(dir.clone()), &mut extractor())
        .unwrap();
    assert_eq!(labels(&corpus), vec!["fist", "palm"]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_archive_keeps_entry_order() {
    let dir = test_dir("archive-order");
    let archive = dir.join("match.zip");
    write_zip(&archive, &[("zeta", Some(0.1)), ("alpha", Some(0.2))]);

    let loader = CorpusLoader::new(LoaderConfig::default().with_extract_dir(dir.join("out")));
    let images = loader.images(&CorpusSource::Archive(archive)).unwrap();
    let names: Vec<_> = images.iter().filter_map(ImageSource::stem).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert!(dir.join("out/gestures/zeta.json").is_file());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_archive_is_error() {
    let dir = test_dir("missing-archive");
    let result = CorpusLoader::default().images(&CorpusSource::Archive(dir.join("absent.zip")));
    assert!(matches!(result, Err(CorpusError::Io(_))));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invalid_archive_is_error() {
    let dir = test_dir("invalid-archive");
    let archive = dir.join("broken.zip");
    fs::write(&archive, b"definitely not a zip").unwrap();
    let loader = CorpusLoader::new(LoaderConfig::default().with_extract_dir(dir.join("out")));
    let result = loader.images(&CorpusSource::Archive(archive));
    assert!(matches!(result, Err(CorpusError::Archive(_))));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_archive_entry_escaping_extract_dir_is_rejected() {
    let dir = test_dir("unsafe-entry");
    let archive = dir.join("evil.zip");
    let mut writer = zip::ZipWriter::new(File::create(&archive).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("../evil.jpg", options).unwrap();
    writer.write_all(b"\xff\xd8\xff").unwrap();
    writer.finish().unwrap();

    let extract_dir = dir.join("out");
    let loader = CorpusLoader::new(LoaderConfig::default().with_extract_dir(extract_dir.clone()));
    let result = loader.images(&CorpusSource::Archive(archive));
    assert!(matches!(result, Err(CorpusError::UnsafeEntry(name)) if name == "../evil.jpg"));
    assert!(!dir.join("evil.jpg").exists());
    assert!(!extract_dir.join("evil.jpg").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_extractor_failure_propagates() {
    let dir = test_dir("extractor-failure");
    fs::write(dir.join("orphan.jpg"), b"\xff\xd8\xff").unwrap();

    let result =
        CorpusLoader::default().load(&CorpusSource::Directory(dir.clone()), &mut extractor());
    assert!(matches!(result, Err(CorpusError::Landmark(_))));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_alphabetic_labels_overflow() {
    let dir = test_dir("overflow");
    for i in 0..27 {
        write_sample(&dir, &format!("{i:02}"), Some(i as f64));
    }
    let result = CorpusLoader::default().load(&CorpusSource::Directory(dir.clone()), &mut extractor());
    assert!(matches!(
        result,
        Err(CorpusError::Subspace(SubspaceError::LabelOverflow(27)))
    ));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_corpus_source_from_path() {
    let dir = test_dir("source");
    assert_eq!(
        CorpusSource::from_path(&dir),
        CorpusSource::Directory(dir.clone())
    );
    assert_eq!(
        CorpusSource::from_path(dir.join("match.zip")),
        CorpusSource::Archive(dir.join("match.zip"))
    );
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_archive_to_classification() {
    let dir = test_dir("end-to-end");
    let archive = dir.join("match.zip");
    write_zip(
        &archive,
        &[("one", Some(0.1)), ("none", None), ("two", Some(0.5)), ("three", Some(0.9))],
    );

    let loader = CorpusLoader::new(LoaderConfig::default().with_extract_dir(dir.join("out")));
    let corpus = loader
        .load(&CorpusSource::Archive(archive), &mut extractor())
        .unwrap();
    assert_eq!(labels(&corpus), vec!["A", "B", "C"]);

    let classifier = Classifier::new(ModelBuilder::default().build(&corpus).unwrap());
    let mut query_extractor = |_: &ImageSource| {
        LandmarkMatrix::from_rows(vec![0.52, 1.5], vec![1.0, 0.5], vec![0.0, 0.1]).map(Some)
    };
    let query = query_extractor
        .extract(&ImageSource::memory("photo.jpg", vec![]))
        .unwrap();
    let result = classifier.classify(query.as_ref()).unwrap();
    assert_eq!(result.label(), Some(&Label::new("B")));

    fs::remove_dir_all(&dir).ok();
}
