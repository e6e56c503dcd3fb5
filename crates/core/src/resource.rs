//! Resource enumeration
//!
//! ## The Five Collections
//!
//! | Resource | Default file | Writable | Id policy |
//! |----------|--------------|----------|-----------|
//! | Products | `products.json` | yes | `MaxNumericIdPlusOne` |
//! | Categories | `categories.json` | no | - |
//! | Users | `users.json` | yes | `CountPlusOne` |
//! | Orders | `orders.json` | no | - |
//! | Sales | `salesFile.json` | no | - |

use crate::id_policy::IdPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The record collections served by Flatstore
///
/// Each collection is one JSON array in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Catalog products
    Products,
    /// Product categories
    Categories,
    /// User accounts
    Users,
    /// Orders placed by users
    Orders,
    /// Sales figures, schema-free
    Sales,
}

impl Resource {
    /// All resources (for iteration)
    pub const ALL: [Resource; 5] = [
        Resource::Products,
        Resource::Categories,
        Resource::Users,
        Resource::Orders,
        Resource::Sales,
    ];

    /// Short identifier, also the URL segment
    pub const fn id(&self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Categories => "categories",
            Resource::Users => "users",
            Resource::Orders => "orders",
            Resource::Sales => "sales",
        }
    }

    /// Singular display label used in messages
    pub const fn label(&self) -> &'static str {
        match self {
            Resource::Products => "Product",
            Resource::Categories => "Category",
            Resource::Users => "User",
            Resource::Orders => "Order",
            Resource::Sales => "Sale",
        }
    }

    /// File name used when the configuration does not override it
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Resource::Products => "products.json",
            Resource::Categories => "categories.json",
            Resource::Users => "users.json",
            Resource::Orders => "orders.json",
            Resource::Sales => "salesFile.json",
        }
    }

    /// Id policy for records created in this collection.
    ///
    /// `None` for read-only collections.
    pub const fn id_policy(&self) -> Option<IdPolicy> {
        match self {
            Resource::Products => Some(IdPolicy::MaxNumericIdPlusOne),
            Resource::Users => Some(IdPolicy::CountPlusOne),
            Resource::Categories | Resource::Orders | Resource::Sales => None,
        }
    }

    /// Whether create stamps a `createdAt` field
    pub const fn stamps_created_at(&self) -> bool {
        matches!(self, Resource::Products)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
