//! Core types for Flatstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Resource: The five record collections and their fixed properties
//! - Record: A loosely-typed JSON object, plus id stringification helpers
//! - IdPolicy: How a collection picks the id of a newly created record
//! - PublicUser: Allowlist projection of a stored user
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id_policy;
pub mod record;
pub mod resource;
pub mod view;

pub use error::{Error, Result};
pub use id_policy::IdPolicy;
pub use record::{key_of, merge, record_key, record_matches_key, Record};
pub use resource::Resource;
pub use view::PublicUser;

// Re-export so downstream crates agree on one JSON value type
pub use serde_json::Value;
