//! FileStore: whole-file JSON collection storage
//!
//! ## Design: NO CACHE
//!
//! Every call re-reads the file. The file is the only source of truth, so
//! edits made to it by hand while the server runs are picked up by the next
//! request.
//!
//! ## Writes
//!
//! `save` serializes the whole collection pretty-printed into `<file>.tmp`
//! next to the target and renames it over the target. `modify` wraps load,
//! mutation and save in the resource's writer lock, so two writers on the
//! same resource can no longer overwrite each other's snapshot.

use flatstore_core::{Error, Record, Resource, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::config::{ResourcePaths, StoreConfig};

/// File-backed store for the five resource collections.
///
/// `FileStore` is `Send + Sync`; share it behind an `Arc`.
pub struct FileStore {
    paths: ResourcePaths,
    /// One writer lock per resource, held across load-mutate-save
    writers: HashMap<Resource, Mutex<()>>,
    /// Held for the lifetime of the store when `lock_data_dir` is set
    _dir_lock: Option<File>,
}

impl FileStore {
    /// Store over explicit paths, without a data directory lock.
    pub fn new(paths: ResourcePaths) -> Self {
        let writers = Resource::ALL
            .into_iter()
            .map(|r| (r, Mutex::new(())))
            .collect();
        Self {
            paths,
            writers,
            _dir_lock: None,
        }
    }

    /// Open the store described by `config`.
    ///
    /// Creates the data directory if needed and, when `lock_data_dir` is set,
    /// takes an exclusive advisory lock on `<data_dir>/.lock` so a second
    /// process cannot write the same files.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory cannot be created and
    /// `Error::Lock` if another process holds the lock.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let mut store = Self::new(config.paths());

        if config.lock_data_dir {
            fs::create_dir_all(&config.data_dir).map_err(|e| Error::io(&config.data_dir, e))?;
            let lock_path = config.lock_path();
            let lock_file = OpenOptions::new()
                .create(true)
                .truncate(false)
                .read(true)
                .write(true)
                .open(&lock_path)
                .map_err(|e| Error::Lock {
                    reason: format!("failed to open lock file '{}': {}", lock_path.display(), e),
                })?;
            fs2::FileExt::try_lock_exclusive(&lock_file).map_err(|_| Error::Lock {
                reason: format!(
                    "data directory '{}' is already in use by another process",
                    config.data_dir.display()
                ),
            })?;
            store._dir_lock = Some(lock_file);
        }

        info!(
            target: "flatstore::store",
            data_dir = ?config.data_dir,
            locked = config.lock_data_dir,
            "Opened file store"
        );
        Ok(store)
    }

    /// Path backing `resource`
    pub fn path(&self, resource: Resource) -> &Path {
        self.paths.get(resource)
    }

    /// Load the full collection for `resource`.
    ///
    /// # Errors
    ///
    /// `Error::Io` if the file is missing or unreadable, `Error::Parse` if it
    /// is not a JSON array of objects.
    pub fn load(&self, resource: Resource) -> Result<Vec<Record>> {
        let path = self.path(resource);
        let content = fs::read_to_string(path).map_err(|e| {
            error!(target: "flatstore::store", path = ?path, error = %e, "Error reading file");
            Error::io(path, e)
        })?;
        let records: Vec<Record> = serde_json::from_str(&content).map_err(|e| {
            error!(target: "flatstore::store", path = ?path, error = %e, "Error parsing file");
            Error::parse(path, e)
        })?;
        debug!(
            target: "flatstore::store",
            resource = %resource,
            records = records.len(),
            "Loaded collection"
        );
        Ok(records)
    }

    /// Overwrite the file for `resource` with `records`.
    ///
    /// Callers that loaded the collection first should use [`modify`](Self::modify)
    /// instead, otherwise a concurrent writer's changes can be lost.
    pub fn save(&self, resource: Resource, records: &[Record]) -> Result<()> {
        let path = self.path(resource);
        write_pretty(path, records).map_err(|e| {
            error!(target: "flatstore::store", path = ?path, error = %e, "Error writing file");
            e
        })?;
        info!(
            target: "flatstore::store",
            resource = %resource,
            records = records.len(),
            "Saved collection"
        );
        Ok(())
    }

    /// Load, mutate and save `resource` under its writer lock.
    ///
    /// If `f` fails the file is left untouched and the error is returned.
    pub fn modify<T, F>(&self, resource: Resource, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Record>) -> Result<T>,
    {
        let _guard = self.writers[&resource].lock();
        let mut records = self.load(resource)?;
        let out = f(&mut records)?;
        self.save(resource, &records)?;
        Ok(out)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_pretty(path: &Path, records: &[Record]) -> Result<()> {
    let text = serde_json::to_string_pretty(records).map_err(|e| Error::parse(path, e))?;
    let tmp = tmp_path(path);

    let mut file = File::create(&tmp).map_err(|e| Error::io(&tmp, e))?;
    let written = file
        .write_all(text.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| Error::io(&tmp, e));
    drop(file);

    let result = written.and_then(|_| fs::rename(&tmp, path).map_err(|e| Error::io(path, e)));
    if result.is_err() {
        // Best effort, the original error is returned
        let _ = fs::remove_file(&tmp);
    }
    result
}
