//! Core data types for pack identification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CardId`](types::CardId), [`SetCode`](types::SetCode): Identifiers for reference cards and card sets
//! - [`ReferenceCard`](card::ReferenceCard): A known card image paired with its identifier
//! - [`MatchResult`](report::MatchResult), [`IdentificationReport`](report::IdentificationReport): Per-slot results and the final report
//!
//! ## Images
//!
//! All pixel data is held as [`image::GrayImage`], a row-major grid of 8-bit
//! luma values. Color input is converted to grayscale on load; nothing in the
//! pipeline looks at color.

pub mod card;
pub mod report;
pub mod types;
