#![allow(dead_code)]

use landmark::{HAND_LANDMARK_COUNT, LandmarkMatrix};
use subspace::TrainingCorpus;

/// Single-landmark matrix whose feature vector is `[x, y, z]`.
pub fn point(x: f64, y: f64, z: f64) -> LandmarkMatrix {
    LandmarkMatrix::from_rows(vec![x], vec![y], vec![z]).unwrap()
}

/// Deterministic 21-point hand pose, distinct for every `gesture`.
pub fn hand(gesture: usize) -> LandmarkMatrix {
    let g = gesture as f64;
    let n = HAND_LANDMARK_COUNT;
    let x = (0..n)
        .map(|i| 0.5 + 0.3 * (g * 1.7 + i as f64 * 0.37).sin())
        .collect();
    let y = (0..n)
        .map(|i| 0.5 + 0.3 * (g * 2.3 + i as f64 * 0.51).cos())
        .collect();
    let z = (0..n)
        .map(|i| 0.05 * (g + i as f64 * 0.9).sin())
        .collect();
    LandmarkMatrix::from_rows(x, y, z).unwrap()
}

pub fn hand_corpus(count: usize) -> TrainingCorpus {
    TrainingCorpus::alphabetic((0..count).map(hand).collect()).unwrap()
}

/// The three toy vectors `[1,1,1]`, `[1,1,2]`, `[5,5,5]`.
pub fn toy_corpus() -> TrainingCorpus {
    TrainingCorpus::alphabetic(vec![
        point(1.0, 1.0, 1.0),
        point(1.0, 1.0, 2.0),
        point(5.0, 5.0, 5.0),
    ])
    .unwrap()
}
