//! Error types for the bucket list.
//!
//! This module defines the centralized error type [`BucketsError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for bucket list operations.
///
/// Consolidates every failure the list layer can observe: collaborator failures
/// during create, malformed filter paths, configuration and theme problems, and
/// the in-flight guard that rejects a second create while one is pending.
///
/// # Examples
///
/// ```
/// use bucket_list::BucketsError;
///
/// fn validate_name(name: &str) -> Result<(), BucketsError> {
///     if name.trim().is_empty() {
///         return Err(BucketsError::InvalidBucket("name must not be blank".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_name("  ").is_err());
/// ```
#[derive(Debug, Error)]
pub enum BucketsError {
    /// The bucket collaborator failed to apply a change.
    ///
    /// The string describes the failed operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace files, theme
    /// files, snapshot files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A searchable field path could not be parsed.
    ///
    /// Paths look like `name` or `labels[].name`; the string is the offending path.
    #[error("Invalid field path: {0:?}")]
    InvalidFieldPath(String),

    /// A bucket draft or record was rejected by the collaborator.
    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),

    /// A create was submitted while a previous create is still pending.
    #[error("A bucket create is already in flight")]
    CreateInFlight,

    /// A create was submitted while the create-bucket form is not open.
    #[error("The create-bucket form is not open")]
    ModalClosed,

    /// The referenced bucket does not exist.
    #[error("Bucket not found: {0}")]
    NotFound(String),

    /// An unexpected failure caught at the error boundary.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A specialized `Result` type for bucket list operations.
pub type Result<T> = std::result::Result<T, BucketsError>;
