//! Error types for the SkyGraph location core.
//!
//! This module defines the centralized error type [`SkygraphError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors only surface at the storage-backend and collaborator boundaries.
//! Lifecycle operations themselves absorb failures and degrade to no-ops; see
//! the store layer for where the absorption happens.

use thiserror::Error;

/// The main error type for SkyGraph core operations.
///
/// This enum consolidates all error conditions that can occur at the crate's
/// outer boundaries: persistence, configuration loading, and the calendar
/// collaborator. Most variants wrap underlying errors from external crates
/// using `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum SkygraphError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be read or parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The calendar collaborator reported a failure.
    ///
    /// Covers both denied write access and event-store save failures. The core
    /// never retries; the error is informational for the embedding runtime.
    #[error("Calendar error: {0}")]
    Calendar(String),
}

/// A specialized `Result` type for SkyGraph core operations.
///
/// This is a type alias for `std::result::Result<T, SkygraphError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SkygraphError>;
