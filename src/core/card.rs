use image::GrayImage;

use crate::core::types::CardId;

/// A known card image from a reference library
#[derive(Debug, Clone)]
pub struct ReferenceCard {
    /// Identifier (file name, including extension)
    pub id: CardId,

    /// Grayscale pixels
    pub image: GrayImage,
}

impl ReferenceCard {
    pub fn new(id: impl Into<String>, image: GrayImage) -> Self {
        Self {
            id: CardId::new(id),
            image,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
