//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to initialize the catalog file
    #[display("Failed to create catalog file: {}", _0)]
    FileCreate(String),
    /// Failed to read the catalog file
    #[display("Failed to read catalog file: {}", _0)]
    FileRead(String),
    /// Failed to write the catalog file
    #[display("Failed to write catalog file: {}", _0)]
    FileWrite(String),
    /// Failed to encode catalog records for persistence
    #[display("Failed to serialize catalog: {}", _0)]
    Serialize(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("storage.json".to_string()));
/// assert!(format!("{}", err).contains("read"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
