//! Live OMDb API tests.
//!
//! Run with `cargo test -p cineshelf_omdb --features api` and an
//! `OMDB_API_KEY` in the environment or a `.env` file.

use cineshelf_omdb::OmdbClient;

#[test]
#[cfg_attr(not(feature = "api"), ignore)]
fn test_omdb_title_lookup() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OmdbClient::from_env()?;
    let lookup = client.movie_by_title("Inception")?;

    assert!(lookup.is_found(), "Expected a hit for a well-known title");
    let movie = lookup.to_movie("Inception");
    assert_eq!(movie.year, 2010);
    assert!(movie.rating > 0.0);
    println!("Found: {} ({}): {}", movie.title, movie.year, movie.rating);

    Ok(())
}

#[test]
#[cfg_attr(not(feature = "api"), ignore)]
fn test_omdb_title_search() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OmdbClient::from_env()?;
    let search = client.search("Blade Runner")?;

    assert!(search.is_found());
    assert!(!search.results.is_empty(), "Should match at least one title");
    println!("Total results: {}", search.total_results);

    Ok(())
}
