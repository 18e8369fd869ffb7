//! OMDb lookup error types.

/// Kinds of OMDb lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OmdbErrorKind {
    /// API key not found in environment
    #[display("OMDB_API_KEY environment variable not set")]
    MissingApiKey,
    /// Request could not be sent or no response arrived
    #[display("OMDb request failed: {}", _0)]
    Request(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse OMDb response: {}", _0)]
    Parse(String),
}

/// OMDb error with source location tracking.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{OmdbError, OmdbErrorKind};
///
/// let err = OmdbError::new(OmdbErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OMDB_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("OMDb Error: {} at line {} in {}", kind, line, file)]
pub struct OmdbError {
    /// The kind of error that occurred
    pub kind: OmdbErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OmdbError {
    /// Create a new OmdbError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OmdbErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
