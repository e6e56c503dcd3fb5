//! # Flatstore Executor
//!
//! The command API for Flatstore - a REST resource store over flat JSON files.
//!
//! This is the only crate a front end needs to import. It provides:
//! - [`Executor`] - Stateless dispatcher over a [`FileStore`]
//! - [`Command`]/[`Output`] - One variant per resource operation
//! - [`Error`] - Structured, serializable failures
//!
//! ## Quick Start
//!
//! ```text
//! use flatstore_executor::{Command, Executor, FileStore, StoreConfig};
//!
//! let store = FileStore::open(&StoreConfig::with_data_dir("data"))?;
//! let executor = Executor::new(Arc::new(store));
//!
//! let output = executor.execute(Command::ProductGet { id: "1".into() })?;
//! ```
//!
//! ## Resources
//!
//! | Resource | Read | Write |
//! |----------|------|-------|
//! | **Products** | list, search, by category, get | create, update, delete |
//! | **Categories** | list, get | - |
//! | **Users** | list, get, by username, by email | create, update, delete |
//! | **Orders** | list, get | - |
//! | **Sales** | list | - |

#![warn(missing_docs)]

pub(crate) mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything front ends need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export query and storage types so front ends don't need the lower crates
pub use flatstore_core::{PublicUser, Resource, Value};
pub use flatstore_engine::{OrderFilter, ProductFilter, ProductSearch, UserFilter};
pub use flatstore_storage::{FileStore, ResourceFiles, ResourcePaths, StoreConfig};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
