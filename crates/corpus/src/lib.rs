//! Loading labeled training gestures from a zip archive or a directory.

pub mod archive;
pub mod config;
pub mod error;
pub mod loader;

pub use config::{DEFAULT_IMAGE_EXTENSION, LabelPolicy, LoaderConfig};
pub use error::CorpusError;
pub use loader::{CorpusLoader, CorpusSource};
