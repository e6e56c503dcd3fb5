//! Executor Layer Tests
//!
//! Tests for the flatstore-executor crate which provides:
//! - Command enum - one variant per resource operation
//! - Output enum - typed results
//! - Executor - stateless command dispatch over a FileStore


mod concurrency;
mod error_handling;
mod users;
