//! Fallback parsers for numeric fields that arrive as text.
//!
//! Delimited catalog rows and OMDb payloads carry years and ratings as
//! strings. Values that fail to parse coerce to zero instead of failing
//! the whole read.

/// Parse a year field, coercing non-numeric text to 0.
///
/// # Examples
///
/// ```
/// use cineshelf_core::coerce;
///
/// assert_eq!(coerce::year("2010"), 2010);
/// assert_eq!(coerce::year(" 1999 "), 1999);
/// assert_eq!(coerce::year("2010–2014"), 0);
/// ```
pub fn year(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Parse a rating field, coercing non-numeric text to 0.0.
///
/// # Examples
///
/// ```
/// use cineshelf_core::coerce;
///
/// assert_eq!(coerce::rating("8.8"), 8.8);
/// assert_eq!(coerce::rating("N/A"), 0.0);
/// ```
pub fn rating(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
