//! HTTP front end for Flatstore.
//!
//! Maps the REST surface onto executor [`Command`]s:
//!
//! | Route | Command |
//! |-------|---------|
//! | `GET /products` | `ProductList` |
//! | `GET /products/search` | `ProductSearch` |
//! | `GET /products/category/:categoryId` | `ProductsByCategory` |
//! | `GET /products/:id` | `ProductGet` |
//! | `POST /products` | `ProductCreate` |
//! | `PUT /products/:id` | `ProductUpdate` |
//! | `DELETE /products/:id` | `ProductDelete` |
//! | `GET /categories`, `GET /categories/:id` | `CategoryList`, `CategoryGet` |
//! | `GET /users` | `UserList` |
//! | `GET /users/:id` | `UserGet` |
//! | `GET /users/username/:username` | `UserGetByUsername` |
//! | `GET /users/email/:email` | `UserGetByEmail` |
//! | `POST /users`, `PUT /users/:id`, `DELETE /users/:id` | `UserCreate`, `UserUpdate`, `UserDelete` |
//! | `GET /orders`, `GET /orders/:id` | `OrderList`, `OrderGet` |
//! | `GET /sales` | `SaleList` |
//!
//! All routes live under a configurable prefix (`/api` by default).
//!
//! [`Command`]: flatstore_executor::Command

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod response;
pub mod routes;

pub use config::{Overrides, ServerConfig};
pub use response::ApiError;
pub use routes::{router, AppState};
