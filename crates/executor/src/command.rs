//! Command enum defining all Flatstore operations.
//!
//! Commands are the "instruction set" of Flatstore. Every operation the
//! HTTP surface exposes is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use flatstore_core::{Resource, Value};
use flatstore_engine::{OrderFilter, ProductFilter, ProductSearch, UserFilter};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Product | 7 | List, search, by category, get, create, update, delete |
/// | Category | 2 | List, get |
/// | User | 7 | List, get, by username, by email, create, update, delete |
/// | Order | 2 | List, get |
/// | Sale | 1 | List |
///
/// # Bodies
///
/// `body` fields carry the raw JSON the client sent. Handlers reject anything
/// that is not an object with `Error::InvalidInput`.
///
/// # Example
///
/// ```ignore
/// use flatstore_executor::{Command, ProductFilter};
///
/// let cmd = Command::ProductList {
///     filter: ProductFilter::new().min_price("5").max_price("15"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Product (7) ====================
    /// List products, optionally filtered.
    /// Returns: `Output::Records`
    ProductList {
        #[serde(default)]
        filter: ProductFilter,
    },

    /// Search products by term over a list of fields.
    /// Returns: `Output::Records`
    ProductSearch { search: ProductSearch },

    /// Products in one category.
    /// Returns: `Output::Records`
    ProductsByCategory { category_id: String },

    /// Get a product by id.
    /// Returns: `Output::Record`
    ProductGet { id: String },

    /// Create a product.
    /// Returns: `Output::Created`
    ProductCreate { body: Value },

    /// Merge fields into a product.
    /// Returns: `Output::Record`
    ProductUpdate { id: String, body: Value },

    /// Delete a product.
    /// Returns: `Output::Message`
    ProductDelete { id: String },

    // ==================== Category (2) ====================
    /// List categories.
    /// Returns: `Output::Records`
    CategoryList,

    /// Get a category by id.
    /// Returns: `Output::Record`
    CategoryGet { id: String },

    // ==================== User (7) ====================
    /// List users, or look one up by credentials.
    /// Returns: `Output::Records` (public view)
    UserList {
        #[serde(default)]
        filter: UserFilter,
    },

    /// Get a user by id.
    /// Returns: `Output::Record` (public view)
    UserGet { id: String },

    /// Get a user by username.
    /// Returns: `Output::Record` (public view)
    UserGetByUsername { username: String },

    /// Get a user by email.
    /// Returns: `Output::Record` (public view)
    UserGetByEmail { email: String },

    /// Create a user.
    /// Returns: `Output::Created` (public view)
    UserCreate { body: Value },

    /// Merge fields into a user.
    /// Returns: `Output::Record` (public view)
    UserUpdate { id: String, body: Value },

    /// Delete a user.
    /// Returns: `Output::Deleted`
    UserDelete { id: String },

    // ==================== Order (2) ====================
    /// List orders, optionally for one user.
    /// Returns: `Output::Records`
    OrderList {
        #[serde(default)]
        filter: OrderFilter,
    },

    /// Get an order by id.
    /// Returns: `Output::Record`
    OrderGet { id: String },

    // ==================== Sale (1) ====================
    /// List sales.
    /// Returns: `Output::Records`
    SaleList,
}

impl Command {
    /// Collection the command reads or writes
    pub fn resource(&self) -> Resource {
        match self {
            Command::ProductList { .. }
            | Command::ProductSearch { .. }
            | Command::ProductsByCategory { .. }
            | Command::ProductGet { .. }
            | Command::ProductCreate { .. }
            | Command::ProductUpdate { .. }
            | Command::ProductDelete { .. } => Resource::Products,
            Command::CategoryList | Command::CategoryGet { .. } => Resource::Categories,
            Command::UserList { .. }
            | Command::UserGet { .. }
            | Command::UserGetByUsername { .. }
            | Command::UserGetByEmail { .. }
            | Command::UserCreate { .. }
            | Command::UserUpdate { .. }
            | Command::UserDelete { .. } => Resource::Users,
            Command::OrderList { .. } | Command::OrderGet { .. } => Resource::Orders,
            Command::SaleList => Resource::Sales,
        }
    }

    /// Whether the command rewrites its resource file
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::ProductCreate { .. }
                | Command::ProductUpdate { .. }
                | Command::ProductDelete { .. }
                | Command::UserCreate { .. }
                | Command::UserUpdate { .. }
                | Command::UserDelete { .. }
        )
    }

    /// Variant name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ProductList { .. } => "ProductList",
            Command::ProductSearch { .. } => "ProductSearch",
            Command::ProductsByCategory { .. } => "ProductsByCategory",
            Command::ProductGet { .. } => "ProductGet",
            Command::ProductCreate { .. } => "ProductCreate",
            Command::ProductUpdate { .. } => "ProductUpdate",
            Command::ProductDelete { .. } => "ProductDelete",
            Command::CategoryList => "CategoryList",
            Command::CategoryGet { .. } => "CategoryGet",
            Command::UserList { .. } => "UserList",
            Command::UserGet { .. } => "UserGet",
            Command::UserGetByUsername { .. } => "UserGetByUsername",
            Command::UserGetByEmail { .. } => "UserGetByEmail",
            Command::UserCreate { .. } => "UserCreate",
            Command::UserUpdate { .. } => "UserUpdate",
            Command::UserDelete { .. } => "UserDelete",
            Command::OrderList { .. } => "OrderList",
            Command::OrderGet { .. } => "OrderGet",
            Command::SaleList => "SaleList",
        }
    }

    /// Client-facing message when the command fails for a server-side reason
    pub fn failure_message(&self) -> &'static str {
        match self {
            Command::ProductList { .. } => "Failed to fetch products",
            Command::ProductSearch { .. } => "Failed to search products",
            Command::ProductsByCategory { .. } => "Failed to fetch products by category",
            Command::ProductGet { .. } => "Failed to fetch product",
            Command::ProductCreate { .. } => "Failed to create product",
            Command::ProductUpdate { .. } => "Failed to update product",
            Command::ProductDelete { .. } => "Failed to delete product",
            Command::CategoryList => "Failed to fetch categories",
            Command::CategoryGet { .. } => "Failed to fetch category",
            Command::UserList { .. } => "Failed to fetch users",
            Command::UserGet { .. }
            | Command::UserGetByUsername { .. }
            | Command::UserGetByEmail { .. } => "Failed to fetch user",
            Command::UserCreate { .. } => "Failed to create user",
            Command::UserUpdate { .. } => "Failed to update user",
            Command::UserDelete { .. } => "Failed to delete user",
            Command::OrderList { .. } => "Failed to fetch orders",
            Command::OrderGet { .. } => "Failed to fetch order by id",
            Command::SaleList => "Failed to fetch sales data",
        }
    }
}
