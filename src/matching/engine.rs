use image::GrayImage;
use tracing::debug;

use crate::catalog::store::ReferenceLibrary;
use crate::core::card::ReferenceCard;
use crate::matching::scoring::sum_abs_diff;

/// Closest reference card to a sample image
#[derive(Debug, Clone, Copy)]
pub struct BestMatch<'a> {
    /// The matched card
    pub card: &'a ReferenceCard,

    /// Pixel distance to the sample; 0 means identical
    pub score: u64,
}

/// Brute-force nearest-match search over a reference library
pub struct MatchingEngine<'a> {
    library: &'a ReferenceLibrary,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(library: &'a ReferenceLibrary) -> Self {
        Self { library }
    }

    /// Find the card with the smallest pixel distance to `sample`.
    ///
    /// Every card is compared; ties go to the earliest card in the library.
    /// Cards whose dimensions differ from the sample are skipped. Returns
    /// `None` if no card could be compared.
    #[must_use]
    pub fn find_best(&self, sample: &GrayImage) -> Option<BestMatch<'a>> {
        let mut best: Option<BestMatch<'a>> = None;

        for card in self.library {
            let Some(score) = sum_abs_diff(sample, &card.image) else {
                debug!(
                    "Skipping {}: size {:?} does not match sample {:?}",
                    card.id,
                    card.dimensions(),
                    sample.dimensions()
                );
                continue;
            };

            if best.map_or(true, |b| score < b.score) {
                best = Some(BestMatch { card, score });
            }
        }

        best
    }

    /// Number of candidate cards
    pub fn candidates(&self) -> usize {
        self.library.len()
    }
}
