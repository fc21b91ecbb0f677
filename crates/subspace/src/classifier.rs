use {
    crate::{Label, SubspaceError, SubspaceModel},
    base::log,
    landmark::LandmarkMatrix,
    std::{fmt, sync::Arc},
};

/// Text reported when the extractor found no hand.
pub const NO_HAND_DETECTED: &str = "No hand detected";

/// Outcome of classifying one query.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Closest training sample: its label, corpus index and distance in the
    /// reduced space.
    Gesture {
        label: Label,
        index: usize,
        distance: f64,
    },
    /// The extractor found no hand, so nothing was compared.
    NoDetection,
}

impl Classification {
    pub fn label(&self) -> Option<&Label> {
        match self {
            Classification::Gesture { label, .. } => Some(label),
            Classification::NoDetection => None,
        }
    }

    pub fn is_detection(&self) -> bool {
        matches!(self, Classification::Gesture { .. })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Gesture { label, .. } => write!(f, "{label}"),
            Classification::NoDetection => f.write_str(NO_HAND_DETECTED),
        }
    }
}

/// Nearest-neighbour classifier over a shared, read-only `SubspaceModel`.
///
/// Cloning is cheap and clones share the model, so queries can be classified
/// from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    model: Option<Arc<SubspaceModel>>,
}

impl Classifier {
    pub fn new(model: SubspaceModel) -> Self {
        Self::from_shared(Arc::new(model))
    }

    pub fn from_shared(model: Arc<SubspaceModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn model(&self) -> Option<&SubspaceModel> {
        self.model.as_deref()
    }

    /// Classifies the landmarks of one query hand.
    ///
    /// `None` (no hand found) yields `Classification::NoDetection` without
    /// touching the model.
    ///
    /// # Errors
    ///
    /// `EmptyModel` when no model with samples is loaded, `DimensionMismatch`
    /// when the query landmark count differs from the training data.
    pub fn classify(
        &self,
        query: Option<&LandmarkMatrix>,
    ) -> Result<Classification, SubspaceError> {
        let Some(query) = query else {
            return Ok(Classification::NoDetection);
        };
        let model = self
            .model
            .as_deref()
            .filter(|model| !model.is_empty())
            .ok_or(SubspaceError::EmptyModel)?;
        let reduced = model.project(query)?;
        let (index, distance) = model.nearest(&reduced).ok_or(SubspaceError::EmptyModel)?;
        let label = model
            .label(index)
            .cloned()
            .ok_or(SubspaceError::EmptyModel)?;
        log::debug!("nearest sample {} ({}) at distance {:.6}", index, label, distance);

        Ok(Classification::Gesture {
            label,
            index,
            distance,
        })
    }
}
