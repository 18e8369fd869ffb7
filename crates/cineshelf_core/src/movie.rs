//! The movie record persisted by every storage backend.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Titles are the natural key for lookups. Matching is case-insensitive
/// and duplicates are allowed, so operations touch the first match only.
///
/// # Examples
///
/// ```
/// use cineshelf_core::Movie;
///
/// let movie = Movie::new("Inception", 2010, 8.8, "");
/// assert!(movie.title_matches("INCEPTION"));
/// assert_eq!(movie.year, 2010);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title
    pub title: String,
    /// Release year, 0 when the source value was not numeric
    pub year: i32,
    /// Rating on a 0-10 scale, 0.0 when the source value was not numeric
    pub rating: f64,
    /// Poster image URL, empty when unknown
    #[serde(default)]
    pub poster: String,
}

impl Movie {
    /// Create a new movie record.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        rating: f64,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: poster.into(),
        }
    }

    /// Case-insensitive title comparison using Unicode lowercase folding.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_matches_ignores_case() {
        let movie = Movie::new("The Matrix", 1999, 8.7, "");
        assert!(movie.title_matches("the matrix"));
        assert!(movie.title_matches("THE MATRIX"));
        assert!(movie.title_matches("ThE mAtRiX"));
        assert!(!movie.title_matches("The Matrix Reloaded"));
    }

    #[test]
    fn test_title_matches_non_ascii() {
        let movie = Movie::new("Amélie", 2001, 8.3, "");
        assert!(movie.title_matches("AMÉLIE"));
        assert!(movie.title_matches("amélie"));
    }

    #[test]
    fn test_poster_defaults_to_empty_on_deserialize() {
        let json = r#"{"title":"Up","year":2009,"rating":8.3}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.poster, "");
    }

    #[test]
    fn test_serialize_field_names() {
        let movie = Movie::new("Up", 2009, 8.3, "https://example.com/up.jpg");
        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("\"title\":\"Up\""));
        assert!(json.contains("\"year\":2009"));
        assert!(json.contains("\"rating\":8.3"));
        assert!(json.contains("\"poster\":\"https://example.com/up.jpg\""));
    }
}
