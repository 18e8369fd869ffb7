//! JSON array catalog backend.

use crate::MovieStorage;
use cineshelf_core::Movie;
use cineshelf_error::{CineshelfResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// JSON file storage backend.
///
/// The catalog lives in a single JSON array of objects. The file is created
/// lazily on first access and rewritten in full on every mutation.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a backend for the given catalog path.
    ///
    /// The file itself is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole catalog, initializing the file when absent.
    fn read_catalog(&self) -> CineshelfResult<Vec<Movie>> {
        if !self.path.exists() {
            std::fs::write(&self.path, "[]").map_err(|e| {
                StorageError::new(StorageErrorKind::FileCreate(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;
            tracing::info!(path = %self.path.display(), "Initialized empty catalog");
            return Ok(Vec::new());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Removed between the existence check and the read, or not
            // valid UTF-8: both read as an empty catalog.
            Err(e)
                if e.kind() == std::io::ErrorKind::NotFound
                    || e.kind() == std::io::ErrorKind::InvalidData =>
            {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        match serde_json::from_str(&content) {
            Ok(movies) => Ok(movies),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Catalog file is not valid JSON, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the catalog file with the given records.
    fn write_catalog(&self, movies: &[Movie]) -> CineshelfResult<()> {
        let json = serde_json::to_string(movies)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

        std::fs::write(&self.path, json).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

impl MovieStorage for JsonStorage {
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
