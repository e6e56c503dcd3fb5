//! Error conversion from internal error types.
//!
//! This module provides conversions from internal Flatstore errors to
//! the executor's [`Error`] type.

use crate::Error;
use flatstore_core::Error as CoreError;

/// Convert a core error to an executor Error.
///
/// Storage failures keep their full message (path included) so it can be
/// logged; front ends decide what reaches the client.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { resource, key } => Error::NotFound { resource, key },
            CoreError::Validation { reason } => Error::InvalidInput { reason },
            e @ CoreError::Io { .. } => Error::Io {
                reason: e.to_string(),
            },
            e @ CoreError::Parse { .. } => Error::Serialization {
                reason: e.to_string(),
            },
            CoreError::Config { reason } | CoreError::Lock { reason } => Error::Internal { reason },
        }
    }
}
