use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
    RankMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
            TensorError::RankMismatch { expected, got } => {
                write!(f, "rank mismatch: expected {expected} dimensions, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense row-major tensor.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    shape.iter().try_fold(1usize, |product, &dim| {
        product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)
    })
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Builds a 2-D tensor from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, TensorError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let expected = element_count(&[height, width])?;
        let mut data = Vec::with_capacity(expected);
        for row in rows {
            if row.len() != width {
                return Err(TensorError::ShapeMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            shape: vec![height, width],
            data,
        })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `index` of a 2-D tensor, `None` when out of range or not 2-D.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        match self.shape.as_slice() {
            &[height, width] if index < height => {
                Some(&self.data[index * width..(index + 1) * width])
            }
            _ => None,
        }
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}
