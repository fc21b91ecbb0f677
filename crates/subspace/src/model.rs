use {
    crate::{Label, SubspaceError},
    landmark::{CHANNELS, LandmarkMatrix},
    nalgebra::{DMatrix, DVector},
    serde::{Deserialize, Serialize},
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::Path,
    },
};

/// Reduced SVD of a centered training corpus.
///
/// With 3N features, M samples and rank k:
///
/// - `mean`: per-feature training mean, length 3N. Queries are centered with
///   this vector, never with their own mean.
/// - `basis`: U, 3N x k.
/// - `singular_values`: k values, largest first.
/// - `right_vectors`: V^T, k x M.
/// - `coordinates`: reduced coordinate of every training sample as a column,
///   k x M, equal to U^T times the centered corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubspaceModel {
    landmark_count: usize,
    mean: DVector<f64>,
    basis: DMatrix<f64>,
    singular_values: DVector<f64>,
    right_vectors: DMatrix<f64>,
    coordinates: DMatrix<f64>,
    labels: Vec<Label>,
}

impl SubspaceModel {
    pub(crate) fn from_parts(
        landmark_count: usize,
        mean: DVector<f64>,
        basis: DMatrix<f64>,
        singular_values: DVector<f64>,
        right_vectors: DMatrix<f64>,
        coordinates: DMatrix<f64>,
        labels: Vec<Label>,
    ) -> Result<Self, SubspaceError> {
        let model = Self {
            landmark_count,
            mean,
            basis,
            singular_values,
            right_vectors,
            coordinates,
            labels,
        };
        model.validate()?;
        Ok(model)
    }

    /// Checks that every part agrees on 3N, k and M.
    pub fn validate(&self) -> Result<(), SubspaceError> {
        let feature_len = self.landmark_count * CHANNELS;
        let rank = self.singular_values.len();
        let samples = self.labels.len();

        let shapes = [
            ("mean", (self.mean.nrows(), 1), (feature_len, 1)),
            ("basis", self.basis.shape(), (feature_len, rank)),
            ("right vectors", self.right_vectors.shape(), (rank, samples)),
            ("coordinates", self.coordinates.shape(), (rank, samples)),
        ];
        for (name, got, expected) in shapes {
            if got != expected {
                return Err(SubspaceError::CorruptModel(format!(
                    "{name} is {}x{}, expected {}x{}",
                    got.0, got.1, expected.0, expected.1
                )));
            }
        }

        if samples > 0 && rank == 0 {
            return Err(SubspaceError::CorruptModel("rank is zero".to_string()));
        }
        let sorted = self
            .singular_values
            .as_slice()
            .windows(2)
            .all(|pair| pair[0] >= pair[1]);
        if !sorted || self.singular_values.iter().any(|&s| s < 0.0) {
            return Err(SubspaceError::CorruptModel(
                "singular values must be non-negative and non-increasing".to_string(),
            ));
        }
        let finite = [
            self.mean.as_slice(),
            self.basis.as_slice(),
            self.singular_values.as_slice(),
            self.right_vectors.as_slice(),
            self.coordinates.as_slice(),
        ]
        .iter()
        .all(|values| values.iter().all(|v| v.is_finite()));
        if !finite {
            return Err(SubspaceError::CorruptModel(
                "non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Landmarks per sample, N.
    pub fn landmark_count(&self) -> usize {
        self.landmark_count
    }

    /// Length of a feature vector, 3N.
    pub fn feature_len(&self) -> usize {
        self.mean.len()
    }

    /// Retained singular directions, k.
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }

    /// Training samples, M.
    pub fn sample_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    pub fn basis(&self) -> &DMatrix<f64> {
        &self.basis
    }

    pub fn singular_values(&self) -> &DVector<f64> {
        &self.singular_values
    }

    pub fn right_vectors(&self) -> &DMatrix<f64> {
        &self.right_vectors
    }

    pub fn coordinates(&self) -> &DMatrix<f64> {
        &self.coordinates
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    /// Centers the query features with the stored mean and projects them onto
    /// the basis.
    ///
    /// Fails with `DimensionMismatch` when the query landmark count differs
    /// from the training data.
    pub fn project(&self, query: &LandmarkMatrix) -> Result<DVector<f64>, SubspaceError> {
        if query.landmark_count() != self.landmark_count {
            return Err(SubspaceError::DimensionMismatch {
                expected: self.landmark_count,
                got: query.landmark_count(),
            });
        }
        let centered = DVector::from_column_slice(query.features()) - &self.mean;
        Ok(self.basis.tr_mul(&centered))
    }

    /// Index and Euclidean distance of the training sample closest to
    /// `reduced`. Ties go to the lowest index.
    pub fn nearest(&self, reduced: &DVector<f64>) -> Option<(usize, f64)> {
        self.coordinates
            .column_iter()
            .map(|column| (&column - reduced).norm())
            .enumerate()
            .fold(None, |best, (index, distance)| match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((index, distance)),
            })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SubspaceError> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| SubspaceError::Io(format!("{}: {e}", path.display())))?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads a model written by `save` and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SubspaceError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SubspaceError::Io(format!("{}: {e}", path.display())))?;
        let model: Self = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        Ok(model)
    }
}
