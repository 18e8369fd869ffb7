//! Error types for the Cineshelf movie catalog.
//!
//! This crate provides the foundation error types used throughout the Cineshelf workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cineshelf_error::{CineshelfResult, StorageError, StorageErrorKind};
//!
//! fn persist_catalog() -> CineshelfResult<()> {
//!     Err(StorageError::new(StorageErrorKind::FileWrite(
//!         "storage.json: permission denied".to_string(),
//!     )))?
//! }
//!
//! match persist_catalog() {
//!     Ok(_) => println!("Saved"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod storage;
mod omdb;
mod site;
mod error;

pub use storage::{StorageError, StorageErrorKind};
pub use omdb::{OmdbError, OmdbErrorKind};
pub use site::{SiteError, SiteErrorKind};
pub use error::{CineshelfError, CineshelfErrorKind, CineshelfResult};
