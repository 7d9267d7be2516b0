//! # pack-solver
//!
//! A library for identifying the cards in a trading-card pack screenshot.
//!
//! A pack screenshot shows five cards in a fixed layout. `pack-solver` cuts out
//! each card and compares it pixel by pixel against a library of reference card
//! images for the pack's set, reporting the closest reference for every slot.
//!
//! ## Features
//!
//! - **Set name resolution**: "Genetic Apex", "genetic-apex-premium" and similar
//!   spellings map to set codes such as `A1`
//! - **Fixed-layout extraction**: five 367x512 card regions per pack
//! - **Exhaustive matching**: sum of absolute grayscale differences, lowest wins
//! - **Structured reports**: one JSON document per pack, success or failure
//!
//! ## Example
//!
//! ```rust,no_run
//! use pack_solver::identify;
//! use std::path::Path;
//!
//! // Reference images are read from images/<SET_CODE>/
//! let report = identify(Path::new("pack.png"), "Genetic Apex");
//!
//! if let Some(error) = report.error() {
//!     eprintln!("failed: {error}");
//! }
//! for card in report.cards() {
//!     println!("#{} {}", card.position, card.card_name);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Set-name resolution and reference library loading
//! - [`core`]: Core data types for cards and reports
//! - [`matching`]: Matching engine and the identification pipeline
//! - [`parsing`]: Pack image splitting
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP server for identification requests

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::cache::LibraryCache;
pub use catalog::store::ReferenceLibrary;
pub use core::card::ReferenceCard;
pub use core::report::{IdentificationReport, MatchResult};
pub use core::types::*;
pub use matching::engine::{BestMatch, MatchingEngine};
pub use matching::identifier::{identify, Identifier, IdentifierConfig, IdentifyError};
