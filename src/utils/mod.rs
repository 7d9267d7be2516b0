//! Shared helpers for image decoding and input validation.

use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

pub mod validation;

/// Decode an image file, detecting the format from its content and falling
/// back to the file extension.
///
/// # Errors
///
/// Returns `ImageError::IoError` if the file cannot be read, or the decoder's
/// error if the content is not a supported image.
pub fn decode_image(path: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}
