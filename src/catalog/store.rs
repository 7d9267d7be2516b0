use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::card::ReferenceCard;
use crate::core::types::{CardId, SetCode};
use crate::utils::decode_image;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Set directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read set directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode reference image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Directories searched, in order, for per-set reference folders.
/// Relative paths resolve against the current working directory.
pub const DEFAULT_IMAGE_ROOTS: [&str; 2] = ["images", "../images"];

/// All reference card images for one set
#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    /// Set code the library was loaded for
    pub set_code: SetCode,

    /// Directory the cards were read from, if loaded from disk
    pub directory: Option<PathBuf>,

    /// Cards in load order
    pub cards: Vec<ReferenceCard>,

    ids: HashSet<CardId>,
}

impl ReferenceLibrary {
    /// Create an empty library
    pub fn new(set_code: SetCode) -> Self {
        Self {
            set_code,
            directory: None,
            cards: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Load the library for `set_code` from the first default root that has it.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no default root contains a directory
    /// for the set, or any error from [`ReferenceLibrary::load_from_root`].
    pub fn load(set_code: &SetCode) -> Result<Self, LibraryError> {
        let root = DEFAULT_IMAGE_ROOTS
            .iter()
            .map(Path::new)
            .find(|root| root.join(set_code.as_str()).is_dir())
            .ok_or_else(|| LibraryError::NotFound {
                path: Path::new(DEFAULT_IMAGE_ROOTS[0]).join(set_code.as_str()),
            })?;

        Self::load_from_root(root, set_code)
    }

    /// Load the library for `set_code` from `<root>/<set_code>/`.
    ///
    /// Every regular file in the directory is treated as a card image; entries
    /// are read in file-name order. Subdirectories are ignored.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the set directory does not exist,
    /// `LibraryError::Io` if it cannot be listed, or `LibraryError::ImageDecode`
    /// if any file in it is not a readable image.
    pub fn load_from_root(root: &Path, set_code: &SetCode) -> Result<Self, LibraryError> {
        let directory = root.join(set_code.as_str());
        if !directory.is_dir() {
            return Err(LibraryError::NotFound { path: directory });
        }

        let io_error = |source| LibraryError::Io {
            path: directory.clone(),
            source,
        };

        let mut paths = std::fs::read_dir(&directory)
            .map_err(io_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<PathBuf>, _>>()
            .map_err(io_error)?;
        paths.sort();

        let mut library = Self::new(set_code.clone());
        for path in paths {
            if !path.is_file() {
                debug!("Skipping non-file entry {}", path.display());
                continue;
            }

            let Some(file_name) = path.file_name() else {
                continue;
            };
            let id = file_name.to_string_lossy().into_owned();

            let image = decode_image(&path)
                .map_err(|source| LibraryError::ImageDecode {
                    path: path.clone(),
                    source,
                })?
                .to_luma8();

            library.add_card(ReferenceCard::new(id, image));
        }

        info!(
            "Loaded {} reference cards for set {} from {}",
            library.len(),
            set_code,
            directory.display()
        );

        library.directory = Some(directory);
        Ok(library)
    }

    /// Add a card to the library.
    ///
    /// Duplicate identifiers are kept; the earlier card wins ties when matching.
    pub fn add_card(&mut self, card: ReferenceCard) {
        if !self.ids.insert(card.id.clone()) {
            warn!(
                "Duplicate card identifier {} in set {}",
                card.id, self.set_code
            );
        }
        self.cards.push(card);
    }

    /// Get the first card with the given identifier
    pub fn get(&self, id: &CardId) -> Option<&ReferenceCard> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceCard> {
        self.cards.iter()
    }

    /// Number of cards in the library
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceLibrary {
    type Item = &'a ReferenceCard;
    type IntoIter = std::slice::Iter<'a, ReferenceCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_gray(dir: &Path, name: &str, value: u8) {
        GrayImage::from_pixel(4, 3, Luma([value]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn test_load_from_root() {
        let root = TempDir::new().unwrap();
        let set_dir = root.path().join("A1");
        std::fs::create_dir(&set_dir).unwrap();
        write_gray(&set_dir, "A1_002_EN.png", 20);
        write_gray(&set_dir, "A1_001_EN.png", 10);

        let library = ReferenceLibrary::load_from_root(root.path(), &SetCode::new("A1")).unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.set_code, SetCode::new("A1"));
        assert_eq!(library.directory.as_deref(), Some(set_dir.as_path()));
        // Sorted by file name
        assert_eq!(library.cards[0].id.as_str(), "A1_001_EN.png");
        assert_eq!(library.cards[1].id.as_str(), "A1_002_EN.png");
        assert_eq!(library.cards[0].dimensions(), (4, 3));
    }

    #[test]
    fn test_load_converts_to_grayscale() {
        let root = TempDir::new().unwrap();
        let set_dir = root.path().join("A2");
        std::fs::create_dir(&set_dir).unwrap();
        RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]))
            .save(set_dir.join("white.png"))
            .unwrap();

        let library = ReferenceLibrary::load_from_root(root.path(), &SetCode::new("A2")).unwrap();
        let card = library.get(&CardId::new("white.png")).unwrap();
        assert!(card.image.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_load_missing_directory() {
        let root = TempDir::new().unwrap();
        let err = ReferenceLibrary::load_from_root(root.path(), &SetCode::new("ZZ")).unwrap_err();

        assert!(matches!(err, LibraryError::NotFound { .. }));
        assert!(err.to_string().contains("ZZ"));
    }

    #[test]
    fn test_load_rejects_non_image_file() {
        let root = TempDir::new().unwrap();
        let set_dir = root.path().join("A1");
        std::fs::create_dir(&set_dir).unwrap();
        write_gray(&set_dir, "A1_001_EN.png", 10);
        std::fs::write(set_dir.join("notes.txt"), b"not an image").unwrap();

        let err = ReferenceLibrary::load_from_root(root.path(), &SetCode::new("A1")).unwrap_err();
        assert!(matches!(err, LibraryError::ImageDecode { .. }));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_load_skips_subdirectories() {
        let root = TempDir::new().unwrap();
        let set_dir = root.path().join("A1");
        std::fs::create_dir_all(set_dir.join("nested")).unwrap();
        write_gray(&set_dir, "A1_001_EN.png", 10);

        let library = ReferenceLibrary::load_from_root(root.path(), &SetCode::new("A1")).unwrap();
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_add_duplicate_card_keeps_both() {
        let mut library = ReferenceLibrary::new(SetCode::new("A1"));
        library.add_card(ReferenceCard::new("dup.png", GrayImage::new(1, 1)));
        library.add_card(ReferenceCard::new(
            "dup.png",
            GrayImage::from_pixel(1, 1, Luma([9])),
        ));

        assert_eq!(library.len(), 2);
        let first = library.get(&CardId::new("dup.png")).unwrap();
        assert_eq!(first.image.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn test_empty_library() {
        let library = ReferenceLibrary::new(SetCode::new("A1"));
        assert!(library.is_empty());
        assert_eq!(library.iter().count(), 0);
        assert!(library.directory.is_none());
    }
}
