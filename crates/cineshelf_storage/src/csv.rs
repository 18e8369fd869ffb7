//! Delimited-text catalog backend.

use crate::MovieStorage;
use cineshelf_core::{Movie, coerce};
use cineshelf_error::{CineshelfResult, StorageError, StorageErrorKind};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::PathBuf;

/// Column order shared by the header row and every record.
const HEADER: [&str; 4] = ["title", "year", "rating", "poster"];

/// Delimited-text storage backend.
///
/// The catalog lives in a comma-separated file whose first row is the
/// literal header `title,year,rating,poster`. Fields containing commas,
/// quotes, or newlines are quoted on write, so any printable title or
/// poster URL survives a write/read round trip. Numeric columns that fail
/// to parse coerce to zero on read.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    /// Create a backend for the given catalog path.
    ///
    /// Writes a header-only file when the path does not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> CineshelfResult<Self> {
        let path = path.into();

        if !path.exists() {
            std::fs::write(&path, HEADER.join(",") + "\n").map_err(|e| {
                StorageError::new(StorageErrorKind::FileCreate(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            tracing::info!(path = %path.display(), "Initialized empty catalog");
        }

        Ok(Self { path })
    }

    /// Read the whole catalog, substituting empty for malformed content.
    fn read_catalog(&self) -> CineshelfResult<Vec<Movie>> {
        if !self.path.exists() {
            // Removed after construction; reads as an empty catalog.
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;

        let mut movies = Vec::new();
        for result in reader.records() {
            let Ok(record) = result else {
                tracing::warn!(
                    path = %self.path.display(),
                    "Catalog file is malformed, treating as empty"
                );
                return Ok(Vec::new());
            };
            movies.push(record_to_movie(&record));
        }

        Ok(movies)
    }

    /// Overwrite the catalog file with a header row plus the given records.
    fn write_catalog(&self, movies: &[Movie]) -> CineshelfResult<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;

        // Written by hand so an empty catalog still carries the header.
        writer
            .write_record(HEADER)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        for movie in movies {
            writer
                .serialize(movie)
                .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        }

        writer.flush().map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

/// Map one positional record onto a movie, coercing numeric columns.
fn record_to_movie(record: &StringRecord) -> Movie {
    Movie {
        title: record.get(0).unwrap_or_default().to_string(),
        year: coerce::year(record.get(1).unwrap_or_default()),
        rating: coerce::rating(record.get(2).unwrap_or_default()),
        poster: record.get(3).unwrap_or_default().to_string(),
    }
}

impl MovieStorage for CsvStorage {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn get_all(&self) -> CineshelfResult<Vec<Movie>> {
        self.read_catalog()
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn add(&self, title: &str, year: i32, rating: f64, poster: &str) -> CineshelfResult<()> {
        let mut movies = self.read_catalog()?;
        movies.push(Movie::new(title, year, rating, poster));
        self.write_catalog(&movies)?;

        tracing::info!(title, year, rating, "Added movie to catalog");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn delete(&self, title: &str) -> CineshelfResult<bool> {
        let mut movies = self.read_catalog()?;
        let Some(index) = movies.iter().position(|m| m.title_matches(title)) else {
            tracing::debug!(title, "No matching movie to delete");
            return Ok(false);
        };

        movies.remove(index);
        self.write_catalog(&movies)?;

        tracing::info!(title, "Deleted movie from catalog");
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn update(&self, title: &str, rating: f64) -> CineshelfResult<bool> {
        let mut movies = self.read_catalog()?;
        let Some(movie) = movies.iter_mut().find(|m| m.title_matches(title)) else {
            tracing::debug!(title, "No matching movie to update");
            return Ok(false);
        };

        movie.rating = rating;
        self.write_catalog(&movies)?;

        tracing::info!(title, rating, "Updated movie rating");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_movie_coerces_numeric_columns() {
        let record = StringRecord::from(vec!["Heat", "1995", "8.3", "https://example.com/h.jpg"]);
        let movie = record_to_movie(&record);
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 1995);
        assert_eq!(movie.rating, 8.3);
        assert_eq!(movie.poster, "https://example.com/h.jpg");

        let record = StringRecord::from(vec!["Heat", "not a year", "N/A", ""]);
        let movie = record_to_movie(&record);
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
    }

    #[test]
    fn test_record_to_movie_defaults_missing_columns() {
        let record = StringRecord::from(vec!["Heat"]);
        let movie = record_to_movie(&record);
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
        assert_eq!(movie.poster, "");
    }
}
