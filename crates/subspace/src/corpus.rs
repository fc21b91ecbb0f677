use {
    crate::{Label, SubspaceError},
    landmark::LandmarkMatrix,
};

/// One labeled training gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    label: Label,
    landmarks: LandmarkMatrix,
}

impl TrainingSample {
    pub fn new(label: Label, landmarks: LandmarkMatrix) -> Self {
        Self { label, landmarks }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn landmarks(&self) -> &LandmarkMatrix {
        &self.landmarks
    }

    pub fn features(&self) -> &[f64] {
        self.landmarks.features()
    }
}

/// Ordered labeled gestures a model is built from.
///
/// Sample order is kept; with alphabetic labels it decides which letter a
/// gesture gets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingCorpus {
    samples: Vec<TrainingSample>,
}

impl TrainingCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels the matrices `A`, `B`, `C`, ... in order.
    pub fn alphabetic(matrices: Vec<LandmarkMatrix>) -> Result<Self, SubspaceError> {
        let count = matrices.len();
        let samples = matrices
            .into_iter()
            .enumerate()
            .map(|(index, landmarks)| {
                Label::alphabetic(index)
                    .map(|label| TrainingSample::new(label, landmarks))
                    .ok_or(SubspaceError::LabelOverflow(count))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { samples })
    }

    pub fn push(&mut self, label: Label, landmarks: LandmarkMatrix) {
        self.samples.push(TrainingSample::new(label, landmarks));
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.samples.iter().map(TrainingSample::label)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<TrainingSample> for TrainingCorpus {
    fn from_iter<I: IntoIterator<Item = TrainingSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
