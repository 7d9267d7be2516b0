use image::GrayImage;

/// Sum of absolute differences between two equally-sized grayscale images.
///
/// Returns `None` when the dimensions differ, since the images have no
/// pixel-to-pixel correspondence.
#[must_use]
pub fn sum_abs_diff(a: &GrayImage, b: &GrayImage) -> Option<u64> {
    if a.dimensions() != b.dimensions() {
        return None;
    }

    Some(
        a.as_raw()
            .iter()
            .zip(b.as_raw().iter())
            .map(|(&x, &y)| u64::from(x.abs_diff(y)))
            .sum(),
    )
}

/// Largest possible distance between two images of the given size
#[must_use]
pub fn max_distance(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * u64::from(u8::MAX)
}
