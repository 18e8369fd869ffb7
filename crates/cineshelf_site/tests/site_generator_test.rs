//! Tests for template-driven site generation.

use cineshelf_core::Movie;
use cineshelf_error::CineshelfErrorKind;
use cineshelf_site::SiteGenerator;
use tempfile::TempDir;

const TEMPLATE: &str = "<html>\n<head><title>__TEMPLATE_TITLE__</title></head>\n<body>\n<h1>__TEMPLATE_TITLE__</h1>\n<div class=\"movie-grid\">__TEMPLATE_MOVIE_GRID__</div>\n</body>\n</html>\n";

#[test]
fn test_generate_substitutes_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("index_template.html");
    let output_path = temp_dir.path().join("index.html");
    std::fs::write(&template_path, TEMPLATE).unwrap();

    let movies = vec![
        Movie::new("Inception", 2010, 8.8, "https://example.com/i.jpg"),
        Movie::new("Up", 2009, 8.3, ""),
    ];

    let generator = SiteGenerator::new(&template_path, &output_path, "My Movie App");
    generator.generate(&movies).unwrap();

    let page = std::fs::read_to_string(&output_path).unwrap();
    assert!(page.contains("<title>My Movie App</title>"));
    assert!(!page.contains("__TEMPLATE_TITLE__"));
    assert!(!page.contains("__TEMPLATE_MOVIE_GRID__"));
    assert!(page.contains("<h2>Inception</h2>"));
    assert!(page.contains("<h2>Up</h2>"));

    // Catalog order carries into the page.
    assert!(page.find("<h2>Inception</h2>").unwrap() < page.find("<h2>Up</h2>").unwrap());
}

#[test]
fn test_generate_empty_catalog_keeps_page_shell() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("index_template.html");
    let output_path = temp_dir.path().join("index.html");
    std::fs::write(&template_path, TEMPLATE).unwrap();

    let generator = SiteGenerator::new(&template_path, &output_path, "My Movie App");
    generator.generate(&[]).unwrap();

    let page = std::fs::read_to_string(&output_path).unwrap();
    assert!(page.contains("<div class=\"movie-grid\"></div>"));
}

#[test]
fn test_missing_template_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let generator = SiteGenerator::new(
        temp_dir.path().join("missing_template.html"),
        temp_dir.path().join("index.html"),
        "My Movie App",
    );

    let err = generator.generate(&[]).unwrap_err();
    assert!(matches!(err.kind(), CineshelfErrorKind::Site(_)));
}

#[test]
fn test_unwritable_output_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("index_template.html");
    std::fs::write(&template_path, TEMPLATE).unwrap();

    // Output path points into a directory that does not exist.
    let generator = SiteGenerator::new(
        &template_path,
        temp_dir.path().join("missing_dir").join("index.html"),
        "My Movie App",
    );

    let err = generator.generate(&[]).unwrap_err();
    assert!(matches!(err.kind(), CineshelfErrorKind::Site(_)));
}
