//! Error types for content-bridge.

use crate::core::ContentType;
use thiserror::Error;

/// Result type for content-bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by content sources and their helpers.
///
/// A URL that a matcher does not own is not an error; it is reported as
/// `None` by [`crate::UrlMatcher::resolve`].
#[derive(Error, Debug)]
pub enum Error {
    /// Content type key is not one of `section`, `post` or `comment`.
    #[error("Unrecognized content type: {0}")]
    UnrecognizedContentType(String),

    /// No usable entity type is configured for the content type.
    #[error("Entity type not configured for content type: {0}")]
    EntityTypeNotConfigured(ContentType),

    /// A content id could not be coerced to a positive integer.
    #[error("Invalid content id: {0}")]
    InvalidContentId(String),

    /// A URL rule pattern failed to compile.
    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A content source id was registered twice.
    #[error("Content source already registered: {0}")]
    DuplicateSource(String),

    /// No content source is registered under the id.
    #[error("Unknown content source: {0}")]
    UnknownSource(String),

    /// Configuration is well-formed JSON but semantically wrong.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
