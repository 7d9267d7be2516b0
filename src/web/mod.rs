//! HTTP server for pack identification.
//!
//! Exposes the identification pipeline to browser front-ends and bots, with
//! reference libraries cached in memory across requests.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 3000
//! pack-solver serve
//!
//! # Custom port and reference image root
//! pack-solver serve --port 8080 --images-dir /data/cards
//!
//! # Bind to all interfaces
//! pack-solver serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /identify` - Identify a pack (multipart form: `image` file, `pack_name` text)
//! - `GET /api/sets` - List known set names and codes
//! - `GET /health` - Liveness check

pub mod server;
