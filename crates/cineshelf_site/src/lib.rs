//! Static site generation for the Cineshelf movie catalog.
//!
//! Renders the catalog into a single HTML page by substituting tokens in a
//! template document.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;

pub use generator::SiteGenerator;
