//! Error types for element construction and style parsing
//!
//! Matching itself never fails: a match that cannot be applied is left untouched. The only hard
//! failures happen when an element is built from a pattern.

use thiserror::Error;

/// Errors raised while building an element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// The pattern string is not a valid regular expression
    #[error("invalid pattern for element '{element}': {message}")]
    InvalidPattern { element: String, message: String },
    /// The pattern lacks a named capture group the element relies on
    #[error("pattern for element '{element}' has no `{group}` capture group")]
    MissingCapture {
        element: String,
        group: &'static str,
    },
}

/// Errors raised while parsing a `#RRGGBB[AA]` color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}
