use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::catalog::store::{LibraryError, ReferenceLibrary};
use crate::core::types::SetCode;

/// Process-wide cache of loaded reference libraries, keyed by set code.
///
/// Libraries are never mutated once inserted; callers share them through
/// `Arc`. Two threads missing the same set at once may both load it, and
/// whichever inserts first is kept.
#[derive(Debug, Default)]
pub struct LibraryCache {
    images_root: Option<PathBuf>,
    libraries: RwLock<HashMap<SetCode, Arc<ReferenceLibrary>>>,
}

impl LibraryCache {
    /// Create a cache that loads from the default image roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that loads from an explicit image root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            images_root: Some(root.into()),
            libraries: RwLock::default(),
        }
    }

    #[must_use]
    pub fn images_root(&self) -> Option<&Path> {
        self.images_root.as_deref()
    }

    /// Get the library for `set_code`, loading it on first use.
    ///
    /// Failed loads are not cached.
    ///
    /// # Errors
    ///
    /// Returns any error from loading the library.
    pub fn get_or_load(&self, set_code: &SetCode) -> Result<Arc<ReferenceLibrary>, LibraryError> {
        if let Some(library) = self.cached(set_code) {
            debug!("Reference library cache hit for set {set_code}");
            return Ok(library);
        }

        let loaded = Arc::new(match &self.images_root {
            Some(root) => ReferenceLibrary::load_from_root(root, set_code)?,
            None => ReferenceLibrary::load(set_code)?,
        });

        let mut libraries = self
            .libraries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(Arc::clone(
            libraries.entry(set_code.clone()).or_insert(loaded),
        ))
    }

    fn cached(&self, set_code: &SetCode) -> Option<Arc<ReferenceLibrary>> {
        self.libraries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(set_code)
            .cloned()
    }

    /// Number of cached libraries
    pub fn len(&self) -> usize {
        self.libraries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
