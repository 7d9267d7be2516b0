//! Card matching engine and the identification pipeline.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`](engine::MatchingEngine): nearest-match search for one card image
//! - [`sum_abs_diff`](scoring::sum_abs_diff): the pixel distance used for ranking
//! - [`Identifier`](identifier::Identifier): resolves the set, loads its library,
//!   splits the pack and matches each slot
//!
//! ## Matching Algorithm
//!
//! Each card image cut from the pack is compared against every reference card
//! of the same size. The distance is the sum of absolute per-pixel luma
//! differences; the smallest distance wins, and earlier cards win ties.
//! A distance of 0 means the images are pixel-identical.
//!
//! The search is exhaustive. Sets hold at most a few hundred cards of about
//! 188K pixels each, so a linear scan is fast enough; a downsampled pre-filter
//! would be the place to start for much larger libraries.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pack_solver::{Identifier, IdentifierConfig};
//! use std::path::Path;
//!
//! let identifier = Identifier::new(IdentifierConfig {
//!     images_root: Some("images".into()),
//! });
//! let report = identifier.identify(Path::new("pack.png"), "Genetic Apex");
//!
//! for card in report.cards() {
//!     println!("{}: {} ({:?})", card.position, card.card_name, card.confidence_score);
//! }
//! ```

pub mod engine;
pub mod identifier;
pub mod scoring;
