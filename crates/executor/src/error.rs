//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from internal errors

use flatstore_core::Resource;
use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Not Found | `NotFound` | No record with that id / username / email |
/// | Validation | `InvalidInput` | Bad request parameters or body |
/// | System | `Io`, `Serialization`, `Internal` | Backing file or server failure |
///
/// # Example
///
/// ```ignore
/// use flatstore_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::NotFound { resource, key }) => {
///         println!("{} '{}' not found", resource.label(), key);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Record not found in a collection
    #[error("{} not found: {key}", resource.label())]
    NotFound {
        /// Collection that was searched
        resource: Resource,
        /// Requested id, username or email
        key: String,
    },

    // ==================== Validation Errors ====================
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable reason, safe to show to clients
        reason: String,
    },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error, for logs only
        reason: String,
    },

    /// Resource file contents are not valid
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying error, for logs only
        reason: String,
    },

    /// Internal error (configuration, locking, invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Underlying error, for logs only
        reason: String,
    },
}

impl Error {
    /// True for failures of the server rather than of the request
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::Serialization { .. } | Error::Internal { .. }
        )
    }
}
