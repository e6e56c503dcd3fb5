//! Storage layer for Flatstore
//!
//! This crate implements the file-backed collection store with:
//! - StoreConfig: data directory and resource → file mapping (`flatstore.toml`)
//! - ResourcePaths: resolved file path per resource
//! - FileStore: whole-file load, whole-file save, locked load-mutate-save
//!
//! # Concurrency
//!
//! Reads take no lock. Writes go through [`FileStore::modify`], which holds
//! a per-resource mutex for the whole load → mutate → save span, and every
//! save lands via rename so a concurrent reader sees either the old or the
//! new file, never a torn one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod file_store;

pub use config::{ResourceFiles, ResourcePaths, StoreConfig};
pub use file_store::FileStore;
