use image::{DynamicImage, GrayImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::SlotPosition;
use crate::utils::decode_image;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to decode pack image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Pack image is {width}x{height}, but the card layout requires at least {required_width}x{required_height}"
    )]
    Bounds {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
}

/// Width of every card slot, in pixels
pub const CARD_WIDTH: u32 = 367;

/// Height of every card slot, in pixels
pub const CARD_HEIGHT: u32 = 512;

/// Number of cards in a pack
pub const SLOT_COUNT: usize = 5;

/// A fixed card region within a pack image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Position within the pack, 1 through 5
    pub position: SlotPosition,
    pub x: u32,
    pub y: u32,
}

impl CardSlot {
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + CARD_WIDTH
    }

    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + CARD_HEIGHT
    }
}

/// Pack layout: three cards on the top row, two centered below.
pub const CARD_SLOTS: [CardSlot; SLOT_COUNT] = [
    CardSlot { position: 1, x: 6, y: 0 },
    CardSlot { position: 2, x: 385, y: 0 },
    CardSlot { position: 3, x: 764, y: 0 },
    CardSlot { position: 4, x: 195, y: 524 },
    CardSlot { position: 5, x: 574, y: 524 },
];

/// Smallest pack image that contains every slot, as (width, height)
#[must_use]
pub fn required_dimensions() -> (u32, u32) {
    CARD_SLOTS.iter().fold((0, 0), |(w, h), slot| {
        (w.max(slot.right()), h.max(slot.bottom()))
    })
}

/// Decode a pack image and cut it into its five card images.
///
/// # Errors
///
/// Returns `SplitError::ImageDecode` if the file cannot be read as an image,
/// or `SplitError::Bounds` if it is too small for the card layout.
pub fn split_pack(path: &Path) -> Result<[GrayImage; SLOT_COUNT], SplitError> {
    let image = decode_image(path).map_err(|source| SplitError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    split_pack_image(&image)
}

/// Cut an already-decoded pack image into its five card images, in slot order.
///
/// # Errors
///
/// Returns `SplitError::Bounds` if the image is too small for the card layout.
pub fn split_pack_image(image: &DynamicImage) -> Result<[GrayImage; SLOT_COUNT], SplitError> {
    split_gray(&image.to_luma8())
}

fn split_gray(gray: &GrayImage) -> Result<[GrayImage; SLOT_COUNT], SplitError> {
    let (width, height) = gray.dimensions();
    let (required_width, required_height) = required_dimensions();

    if width < required_width || height < required_height {
        return Err(SplitError::Bounds {
            width,
            height,
            required_width,
            required_height,
        });
    }

    Ok(CARD_SLOTS.map(|slot| {
        image::imageops::crop_imm(gray, slot.x, slot.y, CARD_WIDTH, CARD_HEIGHT).to_image()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Pack where every pixel encodes the slot it belongs to (0 outside any slot)
    fn labeled_pack(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            let label = CARD_SLOTS
                .iter()
                .find(|s| x >= s.x && x < s.right() && y >= s.y && y < s.bottom())
                .map_or(0, |s| s.position * 10);
            Luma([label])
        })
    }

    #[test]
    fn test_required_dimensions() {
        assert_eq!(required_dimensions(), (1131, 1036));
    }

    #[test]
    fn test_slots_do_not_overlap() {
        for (i, a) in CARD_SLOTS.iter().enumerate() {
            for b in &CARD_SLOTS[i + 1..] {
                let disjoint = a.right() <= b.x
                    || b.right() <= a.x
                    || a.bottom() <= b.y
                    || b.bottom() <= a.y;
                assert!(disjoint, "slots {} and {} overlap", a.position, b.position);
            }
        }
    }

    #[test]
    fn test_split_minimum_size() {
        let (w, h) = required_dimensions();
        let pack = DynamicImage::ImageLuma8(labeled_pack(w, h));

        let cards = split_pack_image(&pack).unwrap();

        assert_eq!(cards.len(), 5);
        for (card, slot) in cards.iter().zip(CARD_SLOTS.iter()) {
            assert_eq!(card.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
            assert!(
                card.pixels().all(|p| p.0[0] == slot.position * 10),
                "slot {} extracted from wrong region",
                slot.position
            );
        }
    }

    #[test]
    fn test_split_larger_image() {
        let pack = DynamicImage::ImageLuma8(labeled_pack(1200, 1100));
        let cards = split_pack_image(&pack).unwrap();
        assert!(cards
            .iter()
            .all(|c| c.dimensions() == (CARD_WIDTH, CARD_HEIGHT)));
    }

    #[test]
    fn test_split_too_narrow() {
        let pack = DynamicImage::ImageLuma8(GrayImage::new(941, 1036));
        let err = split_pack_image(&pack).unwrap_err();

        match err {
            SplitError::Bounds {
                width,
                height,
                required_width,
                required_height,
            } => {
                assert_eq!((width, height), (941, 1036));
                assert_eq!((required_width, required_height), (1131, 1036));
            }
            SplitError::ImageDecode { .. } => panic!("expected bounds error"),
        }
    }

    #[test]
    fn test_split_too_short() {
        let pack = DynamicImage::ImageLuma8(GrayImage::new(1131, 1035));
        assert!(matches!(
            split_pack_image(&pack),
            Err(SplitError::Bounds { .. })
        ));
    }

    #[test]
    fn test_split_missing_file() {
        let err = split_pack(Path::new("/nonexistent/pack.png")).unwrap_err();
        assert!(matches!(err, SplitError::ImageDecode { .. }));
        assert!(err.to_string().contains("pack.png"));
    }

    #[test]
    fn test_split_converts_color() {
        let (w, h) = required_dimensions();
        let pack = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            w,
            h,
            image::Rgb([255, 255, 255]),
        ));
        let cards = split_pack_image(&pack).unwrap();
        assert!(cards[0].pixels().all(|p| p.0[0] == 255));
    }
}
