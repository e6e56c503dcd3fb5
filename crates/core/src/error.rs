//! Error types for Flatstore
//!
//! This module defines all error types used below the executor layer.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::resource::Resource;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Flatstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the file-backed store
#[derive(Debug, Error)]
pub enum Error {
    /// Resource file missing, unreadable or unwritable
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Resource file is not a JSON array of objects
    #[error("Parse error in '{}': {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No record matched the requested key
    #[error("{} not found: {key}", resource.label())]
    NotFound {
        /// Collection that was searched
        resource: Resource,
        /// The id, username or email that was looked up
        key: String,
    },

    /// Request rejected before touching any file
    #[error("Validation error: {reason}")]
    Validation {
        /// Human-readable reason
        reason: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {reason}")]
    Config {
        /// Human-readable reason
        reason: String,
    },

    /// Data directory lock could not be acquired
    #[error("Lock error: {reason}")]
    Lock {
        /// Human-readable reason
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`Error::Parse`] for `path`
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.into(),
            source,
        }
    }

    /// Build an [`Error::NotFound`]
    pub fn not_found(resource: Resource, key: impl Into<String>) -> Self {
        Error::NotFound {
            resource,
            key: key.into(),
        }
    }

    /// Build an [`Error::Validation`]
    pub fn validation(reason: impl Into<String>) -> Self {
        Error::Validation {
            reason: reason.into(),
        }
    }
}
