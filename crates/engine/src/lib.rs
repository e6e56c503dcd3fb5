//! Collection logic for Flatstore
//!
//! Everything here works on a collection already loaded into memory and
//! never touches the filesystem:
//! - collection: find / insert / update / remove by id
//! - products: list filter, field search, category lookup
//! - users: credential filter and secondary lookups, public view
//! - orders: user filter
//!
//! All lookups are linear scans in collection order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod orders;
pub mod products;
pub mod users;

pub use collection::{
    created_at_now, find_by_field, find_by_id, insert_new, remove_by_id, update_by_id,
};
pub use orders::OrderFilter;
pub use products::{by_category, parse_price_bound, ProductFilter, ProductSearch, DEFAULT_SEARCH_FIELDS};
pub use users::{find_by_email, find_by_username, find_public_by_id, public_users, UserFilter};
