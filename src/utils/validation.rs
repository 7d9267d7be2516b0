//! Validation of untrusted request input.

use image::ImageFormat;

/// Longest set name accepted from a request
pub const MAX_SET_NAME_LENGTH: usize = 100;

/// Image formats accepted for uploaded pack screenshots
pub const ACCEPTED_UPLOAD_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::WebP,
    ImageFormat::Bmp,
];

/// Request validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty set name provided")]
    EmptySetName,
    #[error("Set name too long: exceeds {MAX_SET_NAME_LENGTH} characters")]
    SetNameTooLong,
    #[error("Invalid set name: contains path separators or control characters")]
    InvalidSetName,
    #[error("Empty image upload")]
    EmptyUpload,
    #[error("Uploaded file is not a supported image (PNG, JPEG, WebP or BMP)")]
    UnsupportedImageFormat,
}

/// Validate a set name received over the network.
///
/// Set names that do not resolve to a known code are used verbatim as a
/// directory name, so anything that could escape the images root is rejected.
///
/// # Errors
///
/// Returns `ValidationError::EmptySetName` for blank input,
/// `ValidationError::SetNameTooLong` above the length limit, or
/// `ValidationError::InvalidSetName` for path separators, `..`, or control
/// characters.
pub fn validate_set_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySetName);
    }

    if trimmed.len() > MAX_SET_NAME_LENGTH {
        return Err(ValidationError::SetNameTooLong);
    }

    if trimmed.contains("..")
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.chars().any(char::is_control)
    {
        return Err(ValidationError::InvalidSetName);
    }

    Ok(trimmed)
}

/// Identify the image format of uploaded bytes from their magic number.
///
/// # Errors
///
/// Returns `ValidationError::EmptyUpload` for empty content, or
/// `ValidationError::UnsupportedImageFormat` if the content is not one of
/// [`ACCEPTED_UPLOAD_FORMATS`].
pub fn validate_image_upload(content: &[u8]) -> Result<ImageFormat, ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::EmptyUpload);
    }

    match image::guess_format(content) {
        Ok(format) if ACCEPTED_UPLOAD_FORMATS.contains(&format) => Ok(format),
        _ => Err(ValidationError::UnsupportedImageFormat),
    }
}
