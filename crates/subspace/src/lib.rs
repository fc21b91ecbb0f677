//! Subspace nearest-neighbour gesture classification.
//!
//! `ModelBuilder` stacks the flattened landmark matrices of a labeled
//! `TrainingCorpus` as columns, subtracts the per-feature mean and keeps a
//! reduced SVD of the result. `Classifier` centers a query with the stored
//! mean, projects it through the basis and returns the label of the closest
//! training sample in the reduced space.

pub mod builder;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod label;
pub mod model;

pub use builder::ModelBuilder;
pub use classifier::{Classification, Classifier, NO_HAND_DETECTED};
pub use config::ModelConfig;
pub use corpus::{TrainingCorpus, TrainingSample};
pub use error::SubspaceError;
pub use label::Label;
pub use model::SubspaceModel;
