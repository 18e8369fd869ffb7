//! Top-level error wrapper types.

use crate::{OmdbError, SiteError, StorageError};

/// The foundation error enum. Each workspace crate contributes a variant
/// for the failures it can produce.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{CineshelfError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::FileWrite("storage.json".to_string()));
/// let err: CineshelfError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CineshelfErrorKind {
    /// Catalog file storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// OMDb lookup error
    #[from(OmdbError)]
    Omdb(OmdbError),
    /// Site generation error
    #[from(SiteError)]
    Site(SiteError),
}

/// Cineshelf error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{CineshelfResult, OmdbError, OmdbErrorKind};
///
/// fn might_fail() -> CineshelfResult<()> {
///     Err(OmdbError::new(OmdbErrorKind::MissingApiKey))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cineshelf Error: {}", _0)]
pub struct CineshelfError(Box<CineshelfErrorKind>);

impl CineshelfError {
    /// Create a new error from a kind.
    pub fn new(kind: CineshelfErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CineshelfErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CineshelfErrorKind
impl<T> From<T> for CineshelfError
where
    T: Into<CineshelfErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cineshelf operations.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{CineshelfResult, SiteError, SiteErrorKind};
///
/// fn render_page() -> CineshelfResult<String> {
///     Err(SiteError::new(SiteErrorKind::TemplateRead("missing".to_string())))?
/// }
/// ```
pub type CineshelfResult<T> = std::result::Result<T, CineshelfError>;
