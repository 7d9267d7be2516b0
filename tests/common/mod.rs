//! Synthetic reference libraries and pack screenshots for integration tests.

#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pack_solver::parsing::pack::{required_dimensions, CARD_HEIGHT, CARD_SLOTS, CARD_WIDTH};

/// A card-sized image with a pattern unique to `seed`
pub fn card_image(seed: u8) -> GrayImage {
    GrayImage::from_fn(CARD_WIDTH, CARD_HEIGHT, |x, y| {
        let v = (x / 7 + y / 5) as u8;
        Luma([v.wrapping_mul(seed).wrapping_add(seed)])
    })
}

pub fn card_name(seed: u8) -> String {
    format!("A1_{seed:03}_EN_SM.png")
}

/// Temporary working directory holding `images/<set>/` and pack files
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn images_root(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    /// Write reference cards for `set_code`, one per seed
    pub fn add_set(&self, set_code: &str, seeds: &[u8]) -> PathBuf {
        let set_dir = self.images_root().join(set_code);
        std::fs::create_dir_all(&set_dir).unwrap();
        for &seed in seeds {
            card_image(seed).save(set_dir.join(card_name(seed))).unwrap();
        }
        set_dir
    }

    /// Write a pack screenshot tiling the given cards at the slot offsets.
    ///
    /// The pack is saved in color on a mid-gray background, so the pipeline
    /// has to convert it to grayscale.
    pub fn write_pack(&self, name: &str, seeds: [u8; 5]) -> PathBuf {
        let (width, height) = required_dimensions();
        let mut pack = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
        for (slot, seed) in CARD_SLOTS.iter().zip(seeds) {
            let card = card_image(seed);
            for (x, y, pixel) in card.enumerate_pixels() {
                let v = pixel.0[0];
                pack.put_pixel(slot.x + x, slot.y + y, Rgb([v, v, v]));
            }
        }
        let path = self.dir.path().join(name);
        pack.save(&path).unwrap();
        path
    }
}

pub const BOUNDARY: &str = "pack-solver-test-boundary";

/// A multipart form field; `filename` marks it as a file part
pub struct FormField<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FormField<'a> {
    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            data: value.as_bytes(),
        }
    }

    pub fn file(name: &'a str, filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            filename: Some(filename),
            data,
        }
    }
}

/// Encode fields as a `multipart/form-data` body delimited by [`BOUNDARY`]
pub fn multipart_body(fields: &[FormField<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match field.filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n",
                        field.name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        field.name
                    )
                    .as_bytes(),
                );
            }
        }
        body.extend_from_slice(field.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
