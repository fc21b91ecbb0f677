use {
    crate::LandmarkError,
    base::{Tensor, TensorError},
    serde::{Deserialize, Serialize},
};

/// Coordinate channels per landmark: x, y, z.
pub const CHANNELS: usize = 3;

/// Points tracked on a single hand by the usual hand landmark models.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// One tracked point on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Landmarks of one hand as a `[3, N]` tensor: row 0 holds every x, row 1
/// every y, row 2 every z.
///
/// Always has at least one landmark and only finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkMatrix {
    tensor: Tensor<f64>,
}

impl LandmarkMatrix {
    pub fn new(tensor: Tensor<f64>) -> Result<Self, LandmarkError> {
        if tensor.ndim() != 2 {
            return Err(TensorError::RankMismatch {
                expected: 2,
                got: tensor.ndim(),
            }
            .into());
        }
        if tensor.shape[0] != CHANNELS {
            return Err(LandmarkError::Shape(format!(
                "expected {CHANNELS} coordinate rows, got {}",
                tensor.shape[0]
            )));
        }
        let count = tensor.shape[1];
        if count == 0 {
            return Err(LandmarkError::Shape("no landmarks".to_string()));
        }
        if let Some(position) = tensor.data.iter().position(|v| !v.is_finite()) {
            return Err(LandmarkError::NonFinite {
                channel: position / count,
                index: position % count,
            });
        }
        Ok(Self { tensor })
    }

    /// Builds the matrix from its three coordinate rows.
    pub fn from_rows(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, LandmarkError> {
        Self::new(Tensor::from_rows(vec![x, y, z])?)
    }

    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, LandmarkError> {
        Self::from_rows(
            landmarks.iter().map(|l| l.x).collect(),
            landmarks.iter().map(|l| l.y).collect(),
            landmarks.iter().map(|l| l.z).collect(),
        )
    }

    /// Number of tracked points, N.
    pub fn landmark_count(&self) -> usize {
        self.tensor.shape[1]
    }

    /// Length of the flattened feature vector, 3N.
    pub fn feature_len(&self) -> usize {
        self.tensor.len()
    }

    /// Coordinate row for `channel` (0 = x, 1 = y, 2 = z).
    pub fn channel(&self, channel: usize) -> Option<&[f64]> {
        self.tensor.row(channel)
    }

    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        let count = self.landmark_count();
        (index < count).then(|| {
            let data = &self.tensor.data;
            Landmark::new(data[index], data[count + index], data[2 * count + index])
        })
    }

    /// Flattened features: every x, then every y, then every z.
    ///
    /// Training and query vectors must come from this same method so that
    /// feature dimension `i` means the same thing on both sides.
    pub fn features(&self) -> &[f64] {
        &self.tensor.data
    }

    pub fn as_tensor(&self) -> &Tensor<f64> {
        &self.tensor
    }
}
