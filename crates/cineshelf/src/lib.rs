//! Cineshelf - flat-file movie catalog manager.
//!
//! Cineshelf keeps a personal movie catalog in a single flat file (JSON or
//! delimited text), fills in records from the OMDb API, and renders the
//! catalog as a static web page.
//!
//! # Quick Start
//!
//! ```no_run
//! use cineshelf::{JsonStorage, MovieStorage};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = JsonStorage::new("storage.json");
//!     storage.add("Inception", 2010, 8.8, "")?;
//!
//!     for movie in storage.get_all()? {
//!         println!("{} ({}): {}", movie.title, movie.year, movie.rating);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Cineshelf is organized as a workspace with focused crates:
//!
//! - `cineshelf_core` - The movie record and numeric coercion rules
//! - `cineshelf_error` - Error types
//! - `cineshelf_storage` - JSON and delimited-text catalog backends
//! - `cineshelf_omdb` - OMDb lookup client
//! - `cineshelf_site` - Static site generation
//!
//! This crate (`cineshelf`) re-exports everything for convenience and ships
//! the interactive menu binary.

// Re-export workspace crates
pub use cineshelf_core::*;
pub use cineshelf_error::*;
pub use cineshelf_omdb::*;
pub use cineshelf_site::*;
pub use cineshelf_storage::*;
