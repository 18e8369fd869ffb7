//! Site generation error types.

/// Kinds of site generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SiteErrorKind {
    /// Failed to read the page template
    #[display("Failed to read template: {}", _0)]
    TemplateRead(String),
    /// Failed to write the rendered page
    #[display("Failed to write site output: {}", _0)]
    OutputWrite(String),
}

/// Site generation error with location tracking.
///
/// # Examples
///
/// ```
/// use cineshelf_error::{SiteError, SiteErrorKind};
///
/// let err = SiteError::new(SiteErrorKind::TemplateRead("index_template.html".to_string()));
/// assert!(format!("{}", err).contains("template"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Site Error: {} at line {} in {}", kind, line, file)]
pub struct SiteError {
    /// The kind of error that occurred
    pub kind: SiteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SiteError {
    /// Create a new SiteError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SiteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
