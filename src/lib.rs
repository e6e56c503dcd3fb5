//! Flatstore - a REST resource store over flat JSON files
//!
//! Flatstore serves five resources (products, categories, users, orders and
//! sales), each backed by one JSON array file in a data directory.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatstore::{Command, Executor, FileStore, StoreConfig};
//! use std::sync::Arc;
//!
//! let store = FileStore::open(&StoreConfig::with_data_dir("data"))?;
//! let executor = Executor::new(Arc::new(store));
//!
//! let output = executor.execute(Command::ProductGet { id: "1".into() })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which provides a command-based
//! API. The HTTP surface is a thin translation layer over it, available as
//! [`server`].

// Re-export the public API from flatstore-executor
pub use flatstore_executor::*;

/// The HTTP front end
pub use flatstore_server as server;
