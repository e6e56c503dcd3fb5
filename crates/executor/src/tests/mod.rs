//! Test modules for the executor crate.


use std::sync::Arc;

use flatstore_storage::{FileStore, ResourcePaths};
use serde_json::Value;
use tempfile::TempDir;

use crate::Executor;

/// Executor over a scratch directory seeded with `files`.
///
/// Resources missing from `files` have no backing file at all.
pub(crate) fn seeded_executor(files: &[(crate::Resource, Value)]) -> (TempDir, Executor) {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths::in_dir(dir.path());
    for (resource, contents) in files {
        std::fs::write(paths.get(*resource), contents.to_string()).unwrap();
    }
    let executor = Executor::new(Arc::new(FileStore::new(paths)));
    (dir, executor)
}
