use {
    crate::{ModelConfig, SubspaceError, SubspaceModel, TrainingCorpus},
    base::log,
    landmark::CHANNELS,
    nalgebra::{DMatrix, DVector, SVD},
};

/// Builds a `SubspaceModel` from a `TrainingCorpus`.
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    config: ModelConfig,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Centers the corpus feature matrix and keeps its reduced SVD.
    ///
    /// # Errors
    ///
    /// `EmptyCorpus` without samples, `InconsistentFeatureLength` when the
    /// samples disagree on the landmark count, `InvalidRank` for a configured
    /// rank of zero and `Decomposition` when the SVD does not converge.
    pub fn build(&self, corpus: &TrainingCorpus) -> Result<SubspaceModel, SubspaceError> {
        let samples = corpus.samples();
        let first = samples.first().ok_or(SubspaceError::EmptyCorpus)?;
        let feature_len = first.features().len();
        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, sample)| sample.features().len() != feature_len)
        {
            return Err(SubspaceError::InconsistentFeatureLength {
                index,
                expected: feature_len,
                got: sample.features().len(),
            });
        }
        if self.config.rank() == Some(0) {
            return Err(SubspaceError::InvalidRank(0));
        }

        // one column per sample
        let sample_count = samples.len();
        let features =
            DMatrix::from_fn(feature_len, sample_count, |row, col| samples[col].features()[row]);
        let mean = features.column_mean();
        let centered = DMatrix::from_fn(feature_len, sample_count, |row, col| {
            features[(row, col)] - mean[row]
        });

        let svd = SVD::try_new(centered.clone(), true, true, f64::EPSILON, 0)
            .ok_or_else(|| SubspaceError::Decomposition("SVD did not converge".to_string()))?;
        let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
            return Err(SubspaceError::Decomposition(
                "SVD did not return U and V^T".to_string(),
            ));
        };

        // largest singular values first, then truncate
        let order = descending_order(svd.singular_values.as_slice());
        let rank = self
            .config
            .rank()
            .map_or(order.len(), |rank| rank.min(order.len()));
        let kept = &order[..rank];

        let basis = u.select_columns(kept);
        let right_vectors = v_t.select_rows(kept);
        let singular_values =
            DVector::from_iterator(rank, kept.iter().map(|&i| svd.singular_values[i]));
        let coordinates = basis.tr_mul(&centered);

        log::debug!(
            "subspace model: {} samples, {} features, rank {} of {}",
            sample_count,
            feature_len,
            rank,
            order.len()
        );

        SubspaceModel::from_parts(
            feature_len / CHANNELS,
            mean,
            basis,
            singular_values,
            right_vectors,
            coordinates,
            corpus.labels().cloned().collect(),
        )
        .map_err(|err| SubspaceError::Decomposition(err.to_string()))
    }
}

fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}
