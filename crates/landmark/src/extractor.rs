use crate::{ImageSource, LandmarkError, LandmarkMatrix};

/// Turns an image into the landmarks of one hand.
///
/// `Ok(None)` means the detector ran and found no hand; that is an expected
/// outcome, not a failure. Errors are reserved for images or detector output
/// that cannot be read at all. A deployment must always return the same
/// landmark count.
pub trait LandmarkExtractor {
    fn extract(&mut self, image: &ImageSource) -> Result<Option<LandmarkMatrix>, LandmarkError>;
}

impl<F> LandmarkExtractor for F
where
    F: FnMut(&ImageSource) -> Result<Option<LandmarkMatrix>, LandmarkError>,
{
    fn extract(&mut self, image: &ImageSource) -> Result<Option<LandmarkMatrix>, LandmarkError> {
        self(image)
    }
}
