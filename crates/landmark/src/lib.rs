//! Hand landmark geometry and the extractor seam.
//!
//! A `LandmarkMatrix` holds one detected hand as 3 rows (x, y, z) by N
//! columns. Detection itself happens outside this workspace; the
//! `LandmarkExtractor` trait is where a detector plugs in, and
//! `SidecarExtractor` reads detector output recorded as JSON next to each
//! image.

pub mod error;
pub mod extractor;
pub mod matrix;
pub mod sidecar;
pub mod source;

pub use error::LandmarkError;
pub use extractor::LandmarkExtractor;
pub use matrix::{CHANNELS, HAND_LANDMARK_COUNT, Landmark, LandmarkMatrix};
pub use sidecar::SidecarExtractor;
pub use source::ImageSource;
