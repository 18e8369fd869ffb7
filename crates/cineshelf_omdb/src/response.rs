//! Typed OMDb response payloads.
//!
//! OMDb returns every field as text and flags success with a literal
//! `"True"`/`"False"` string instead of the HTTP status.

use cineshelf_core::{Movie, coerce};
use serde::Deserialize;

/// Response to a single-title lookup (`t=` query).
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbLookup {
    /// Literal "True" when a movie was found, "False" otherwise
    #[serde(rename = "Response", default)]
    pub response: String,
    /// Movie title as known to OMDb
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Release year as text, sometimes a range for series
    #[serde(rename = "Year")]
    pub year: Option<String>,
    /// IMDb rating as text, "N/A" when unrated
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    /// Poster image URL, "N/A" when missing
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    /// Error description, present when `response` is "False"
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbLookup {
    /// Whether the lookup found a movie.
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }

    /// Error description for failed lookups.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }

    /// Map the payload onto a catalog record.
    ///
    /// Falls back to the queried title when OMDb omits one; numeric fields
    /// coerce to zero like every other text source.
    ///
    /// # Examples
    ///
    /// ```
    /// use cineshelf_omdb::OmdbLookup;
    ///
    /// let lookup = OmdbLookup {
    ///     response: "True".to_string(),
    ///     title: Some("Inception".to_string()),
    ///     year: Some("2010".to_string()),
    ///     imdb_rating: Some("8.8".to_string()),
    ///     poster: None,
    ///     error: None,
    /// };
    ///
    /// let movie = lookup.to_movie("inception");
    /// assert_eq!(movie.title, "Inception");
    /// assert_eq!(movie.year, 2010);
    /// ```
    pub fn to_movie(&self, queried_title: &str) -> Movie {
        let title = self.title.as_deref().unwrap_or(queried_title);
        let year = coerce::year(self.year.as_deref().unwrap_or("0"));
        let rating = coerce::rating(self.imdb_rating.as_deref().unwrap_or("0"));
        let poster = self.poster.as_deref().unwrap_or("");
        Movie::new(title, year, rating, poster)
    }
}

/// One row of a title search (`s=` query).
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchHit {
    /// Movie title
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Release year as text
    #[serde(rename = "Year", default)]
    pub year: String,
    /// IMDb identifier, e.g. "tt1375666"
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    /// Result type: "movie", "series", or "episode"
    #[serde(rename = "Type", default)]
    pub kind: String,
    /// Poster image URL, "N/A" when missing
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Response to a title search (`s=` query).
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearch {
    /// Literal "True" when the search matched anything
    #[serde(rename = "Response", default)]
    pub response: String,
    /// Matching titles, at most one page
    #[serde(rename = "Search", default)]
    pub results: Vec<OmdbSearchHit>,
    /// Total match count across pages, as text
    #[serde(rename = "totalResults", default)]
    pub total_results: String,
    /// Error description, present when `response` is "False"
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbSearch {
    /// Whether the search matched anything.
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }

    /// Error description for failed searches.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}
