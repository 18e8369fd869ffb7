//! Flat-file storage backends for the Cineshelf movie catalog.
//!
//! This crate provides pluggable persistence for movie records. Two backends
//! implement the same contract: a JSON array file and a delimited-text file
//! with a header row. Both rewrite the whole file on every mutation and
//! re-read it on every access, so the file is the only state between
//! operations.
//!
//! A mutation that fails mid-write can leave a truncated file behind. The
//! next read then reports an empty catalog rather than an error; whole-file
//! rewrite without journaling is the accepted trade-off for catalogs of this
//! size.
//!
//! # Example
//!
//! ```no_run
//! use cineshelf_storage::{JsonStorage, MovieStorage};
//!
//! # fn example() -> cineshelf_error::CineshelfResult<()> {
//! let storage = JsonStorage::new("storage.json");
//! storage.add("Inception", 2010, 8.8, "")?;
//!
//! for movie in storage.get_all()? {
//!     println!("{} ({}): {}", movie.title, movie.year, movie.rating);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use cineshelf_core::Movie;
use cineshelf_error::CineshelfResult;

mod csv;
mod json;

pub use cineshelf_error::{StorageError, StorageErrorKind};
pub use self::csv::CsvStorage;
pub use self::json::JsonStorage;

/// Trait for pluggable movie catalog backends.
///
/// Implementations persist the catalog to a single flat file. Reads
/// substitute an empty catalog for missing or malformed content; only real
/// I/O failures surface as errors.
pub trait MovieStorage: Send + Sync {
    /// Return every movie in persisted order.
    ///
    /// A backend that has never been written reports an empty catalog,
    /// initializing its file on the way through if it does so lazily.
    fn get_all(&self) -> CineshelfResult<Vec<Movie>>;

    /// Append a movie and persist the catalog.
    ///
    /// No duplicate check is performed; identical titles may coexist.
    fn add(&self, title: &str, year: i32, rating: f64, poster: &str) -> CineshelfResult<()>;

    /// Delete the first movie whose title matches case-insensitively.
    ///
    /// Returns `true` and persists when a record was removed, `false`
    /// without touching the file otherwise.
    fn delete(&self, title: &str) -> CineshelfResult<bool>;

    /// Set the rating of the first movie whose title matches
    /// case-insensitively.
    ///
    /// Returns `true` and persists when a record was changed, `false`
    /// without touching the file otherwise.
    fn update(&self, title: &str, rating: f64) -> CineshelfResult<bool>;
}
