//! Input parsing: turning a pack screenshot into per-card query images.
//!
//! A pack screenshot holds five cards in a fixed layout:
//!
//! ```text
//!  x:  6        385      764
//!     +------+ +------+ +------+   y: 0
//!     |  1   | |  2   | |  3   |
//!     +------+ +------+ +------+
//!         +------+ +------+        y: 524
//!         |  4   | |  5   |
//!         +------+ +------+
//!  x:     195      574
//! ```
//!
//! Every slot is 367 x 512 pixels. See [`pack`] for the extraction.

pub mod pack;
