//! Command handlers organized by resource.
//!
//! Each submodule handles commands for one collection:
//!
//! | Module | Commands | Resource file |
//! |--------|----------|---------------|
//! | `products` | 7 | `products.json` |
//! | `categories` | 2 | `categories.json` |
//! | `users` | 7 | `users.json` |
//! | `orders` | 2 | `orders.json` |
//! | `sales` | 1 | `salesFile.json` |
//!
//! Reads call `FileStore::load`; writes go through `FileStore::modify` so the
//! load-mutate-save span holds the resource's writer lock.

pub mod categories;
pub mod orders;
pub mod products;
pub mod sales;
pub mod users;
