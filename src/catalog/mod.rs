//! Reference card libraries and set-name resolution.
//!
//! Reference images live on disk, one directory per set code:
//!
//! ```text
//! images/
//! ├── A1/
//! │   ├── A1_001_EN_SM.webp
//! │   └── ...
//! └── A2b/
//!     └── ...
//! ```
//!
//! The `images` root is looked up relative to the current working directory,
//! then its parent. A different root can be given explicitly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pack_solver::catalog::sets::resolve;
//! use pack_solver::ReferenceLibrary;
//!
//! // "Genetic Apex Premium" -> A1
//! let code = resolve("Genetic Apex Premium");
//!
//! // Load every card image in images/A1/
//! let library = ReferenceLibrary::load(&code).unwrap();
//! for card in &library {
//!     println!("{}", card.id);
//! }
//! ```

pub mod cache;
pub mod sets;
pub mod store;
