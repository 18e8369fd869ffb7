//! Parse tests for OMDb payloads, using recorded response shapes.
//!
//! These run offline; live API coverage lives in `omdb_api_test.rs`.

use cineshelf_omdb::{OmdbLookup, OmdbSearch};

#[test]
fn test_parse_found_lookup() {
    let json = r#"{
        "Title": "Inception",
        "Year": "2010",
        "imdbRating": "8.8",
        "Poster": "https://example.com/inception.jpg",
        "Response": "True"
    }"#;

    let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
    assert!(lookup.is_found());

    let movie = lookup.to_movie("inception");
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.rating, 8.8);
    assert_eq!(movie.poster, "https://example.com/inception.jpg");
}

#[test]
fn test_parse_not_found_lookup() {
    let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

    let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
    assert!(!lookup.is_found());
    assert_eq!(lookup.error_message(), "Movie not found!");
}

#[test]
fn test_lookup_coerces_unparseable_numerics() {
    let json = r#"{
        "Title": "Sherlock",
        "Year": "2010–2017",
        "imdbRating": "N/A",
        "Poster": "N/A",
        "Response": "True"
    }"#;

    let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
    let movie = lookup.to_movie("Sherlock");
    assert_eq!(movie.year, 0);
    assert_eq!(movie.rating, 0.0);
    assert_eq!(movie.poster, "N/A");
}

#[test]
fn test_lookup_falls_back_to_queried_title() {
    let json = r#"{"Response":"True"}"#;

    let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
    let movie = lookup.to_movie("Solaris");
    assert_eq!(movie.title, "Solaris");
    assert_eq!(movie.year, 0);
    assert_eq!(movie.rating, 0.0);
    assert_eq!(movie.poster, "");
}

#[test]
fn test_error_message_defaults_when_absent() {
    let json = r#"{"Response":"False"}"#;

    let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
    assert_eq!(lookup.error_message(), "Unknown error");
}

#[test]
fn test_parse_search_results() {
    let json = r#"{
        "Search": [
            {
                "Title": "Blade Runner",
                "Year": "1982",
                "imdbID": "tt0083658",
                "Type": "movie",
                "Poster": "https://example.com/br.jpg"
            },
            {
                "Title": "Blade Runner 2049",
                "Year": "2017",
                "imdbID": "tt1856101",
                "Type": "movie",
                "Poster": "N/A"
            }
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    let search: OmdbSearch = serde_json::from_str(json).unwrap();
    assert!(search.is_found());
    assert_eq!(search.results.len(), 2);
    assert_eq!(search.results[0].imdb_id, "tt0083658");
    assert_eq!(search.results[0].kind, "movie");
    assert_eq!(search.results[1].title, "Blade Runner 2049");
    assert_eq!(search.total_results, "2");
}

#[test]
fn test_parse_empty_search() {
    let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

    let search: OmdbSearch = serde_json::from_str(json).unwrap();
    assert!(!search.is_found());
    assert!(search.results.is_empty());
    assert_eq!(search.error_message(), "Movie not found!");
}
