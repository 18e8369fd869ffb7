//! OMDb lookup client for the Cineshelf movie catalog.
//!
//! Wraps the OMDb API (<http://www.omdbapi.com/>) behind a blocking client.
//! Lookups need an `OMDB_API_KEY`; response payloads map onto catalog
//! records with the same numeric coercion rules the storage backends use.
//!
//! OMDb reports "not found" in the payload rather than the HTTP status, so
//! a successful call still has to be checked with [`OmdbLookup::is_found`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod response;

pub use client::OmdbClient;
pub use response::{OmdbLookup, OmdbSearch, OmdbSearchHit};
