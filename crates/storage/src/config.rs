//! Store configuration
//!
//! Maps every resource to the file that holds it. Relative file names are
//! resolved against `data_dir`; absolute ones are used as-is.
//!
//! ```toml
//! data_dir = "data"
//! lock_data_dir = true
//!
//! [files]
//! products = "products.json"
//! sales = "salesFile.json"
//! ```

use flatstore_core::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lock file placed in the data directory while a store is open.
pub const LOCK_FILE_NAME: &str = ".lock";

/// File name per resource, as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceFiles {
    /// Products file
    #[serde(default = "default_products")]
    pub products: PathBuf,
    /// Categories file
    #[serde(default = "default_categories")]
    pub categories: PathBuf,
    /// Users file
    #[serde(default = "default_users")]
    pub users: PathBuf,
    /// Orders file
    #[serde(default = "default_orders")]
    pub orders: PathBuf,
    /// Sales file
    #[serde(default = "default_sales")]
    pub sales: PathBuf,
}

fn default_products() -> PathBuf {
    Resource::Products.default_file_name().into()
}

fn default_categories() -> PathBuf {
    Resource::Categories.default_file_name().into()
}

fn default_users() -> PathBuf {
    Resource::Users.default_file_name().into()
}

fn default_orders() -> PathBuf {
    Resource::Orders.default_file_name().into()
}

fn default_sales() -> PathBuf {
    Resource::Sales.default_file_name().into()
}

impl Default for ResourceFiles {
    fn default() -> Self {
        Self {
            products: default_products(),
            categories: default_categories(),
            users: default_users(),
            orders: default_orders(),
            sales: default_sales(),
        }
    }
}

impl ResourceFiles {
    /// Configured file for `resource`
    pub fn get(&self, resource: Resource) -> &Path {
        match resource {
            Resource::Products => &self.products,
            Resource::Categories => &self.categories,
            Resource::Users => &self.users,
            Resource::Orders => &self.orders,
            Resource::Sales => &self.sales,
        }
    }
}

/// Store configuration, usually the `[store]` table of the server config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory holding the resource files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Take an exclusive advisory lock on the data directory while open.
    #[serde(default = "default_lock_data_dir")]
    pub lock_data_dir: bool,
    /// Per-resource file names.
    #[serde(default)]
    pub files: ResourceFiles,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_lock_data_dir() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            lock_data_dir: default_lock_data_dir(),
            files: ResourceFiles::default(),
        }
    }
}

impl StoreConfig {
    /// Default configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Resolve every resource to a concrete path.
    pub fn paths(&self) -> ResourcePaths {
        let resolve = |resource: Resource| {
            let file = self.files.get(resource);
            if file.is_absolute() {
                file.to_path_buf()
            } else {
                self.data_dir.join(file)
            }
        };
        ResourcePaths {
            products: resolve(Resource::Products),
            categories: resolve(Resource::Categories),
            users: resolve(Resource::Users),
            orders: resolve(Resource::Orders),
            sales: resolve(Resource::Sales),
        }
    }

    /// Path of the data directory lock file
    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join(LOCK_FILE_NAME)
    }
}

/// Resolved file path for every resource.
///
/// Built once from [`StoreConfig::paths`] and handed to the store, so no
/// handler ever computes a path on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    products: PathBuf,
    categories: PathBuf,
    users: PathBuf,
    orders: PathBuf,
    sales: PathBuf,
}

impl ResourcePaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        StoreConfig::with_data_dir(dir.as_ref()).paths()
    }

    /// Path backing `resource`
    pub fn get(&self, resource: Resource) -> &Path {
        match resource {
            Resource::Products => &self.products,
            Resource::Categories => &self.categories,
            Resource::Users => &self.users,
            Resource::Orders => &self.orders,
            Resource::Sales => &self.sales,
        }
    }
}
