use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::cache::LibraryCache;
use crate::catalog::sets;
use crate::catalog::store::{LibraryError, ReferenceLibrary};
use crate::core::report::{IdentificationReport, MatchResult};
use crate::core::types::SetCode;
use crate::matching::engine::MatchingEngine;
use crate::parsing::pack::{split_pack, SplitError, CARD_SLOTS};

#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Split(#[from] SplitError),
}

/// Configuration for an [`Identifier`]
#[derive(Debug, Clone, Default)]
pub struct IdentifierConfig {
    /// Root holding one directory per set code.
    /// `None` searches `./images` then `../images`.
    pub images_root: Option<PathBuf>,
}

/// Identifies the five cards in a pack screenshot
#[derive(Debug, Default)]
pub struct Identifier {
    config: IdentifierConfig,
    cache: Option<Arc<LibraryCache>>,
}

impl Identifier {
    /// Create an identifier that reads reference images from disk on every call
    pub fn new(config: IdentifierConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Create an identifier backed by a shared library cache.
    ///
    /// The cache's own image root is used for loading.
    pub fn with_cache(cache: Arc<LibraryCache>) -> Self {
        Self {
            config: IdentifierConfig {
                images_root: cache.images_root().map(Path::to_path_buf),
            },
            cache: Some(cache),
        }
    }

    /// Identify the cards in a pack image.
    ///
    /// Never fails: any error is reported as [`IdentificationReport::Failure`].
    #[must_use]
    pub fn identify(&self, pack_image: &Path, set_name: &str) -> IdentificationReport {
        match self.try_identify(pack_image, set_name) {
            Ok(report) => report,
            Err(e) => {
                info!("Identification failed: {e}");
                IdentificationReport::failure(e.to_string())
            }
        }
    }

    /// Identify the cards in a pack image, returning pipeline errors directly.
    ///
    /// # Errors
    ///
    /// Returns `IdentifyError::Library` if the reference library cannot be
    /// loaded, or `IdentifyError::Split` if the pack image cannot be decoded
    /// or is too small.
    pub fn try_identify(
        &self,
        pack_image: &Path,
        set_name: &str,
    ) -> Result<IdentificationReport, IdentifyError> {
        let set_code = sets::resolve(set_name);
        debug!("Resolved set name {set_name:?} to {set_code}");

        let library = self.library(&set_code)?;
        let samples = split_pack(pack_image)?;

        let engine = MatchingEngine::new(&library);
        let cards = CARD_SLOTS
            .iter()
            .zip(samples.iter())
            .map(|(slot, sample)| match engine.find_best(sample) {
                Some(best) => {
                    debug!(
                        "Slot {}: {} (score {})",
                        slot.position, best.card.id, best.score
                    );
                    MatchResult::matched(slot.position, best.card.id.as_str(), best.score)
                }
                None => {
                    debug!("Slot {}: no candidate", slot.position);
                    MatchResult::unknown(slot.position)
                }
            })
            .collect();

        Ok(IdentificationReport::Success {
            set_code,
            set_name: set_name.to_string(),
            cards,
        })
    }

    fn library(&self, set_code: &SetCode) -> Result<Arc<ReferenceLibrary>, LibraryError> {
        if let Some(cache) = &self.cache {
            return cache.get_or_load(set_code);
        }

        let library = match &self.config.images_root {
            Some(root) => ReferenceLibrary::load_from_root(root, set_code)?,
            None => ReferenceLibrary::load(set_code)?,
        };
        Ok(Arc::new(library))
    }
}

/// Identify the cards in a pack image using the default image roots.
///
/// # Examples
///
/// ```rust,no_run
/// use pack_solver::identify;
/// use std::path::Path;
///
/// let report = identify(Path::new("pack.png"), "Genetic Apex");
/// println!("{}", serde_json::to_string(&report).unwrap());
/// ```
#[must_use]
pub fn identify(pack_image: &Path, set_name: &str) -> IdentificationReport {
    Identifier::default().identify(pack_image, set_name)
}
