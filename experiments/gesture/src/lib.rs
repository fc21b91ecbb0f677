//! Command line front end for the gesture classifier.
//!
//! Builds a subspace model from a corpus of hand photos and names the gesture
//! shown in query photos.

pub mod command;
pub mod pipeline;
pub mod settings;

pub use command::{Command, USAGE};
pub use pipeline::{answer_line, build_model, classify_photos};
pub use settings::Settings;
