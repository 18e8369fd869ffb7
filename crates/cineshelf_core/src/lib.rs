//! Core data types for the Cineshelf movie catalog.
//!
//! This crate provides the record type and the field coercion rules shared
//! by the storage backends and the OMDb lookup client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod coerce;
mod movie;

pub use movie::Movie;
