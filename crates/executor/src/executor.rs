//! The Executor - single entry point to the resource store.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate resource handlers and converts results to outputs.

use std::sync::Arc;

use flatstore_storage::FileStore;
use tracing::{debug, error};

use crate::handlers::{categories, orders, products, sales, users};
use crate::{Command, Output, Result};

/// The command executor - single entry point to the resource store.
///
/// The Executor is **stateless**: it holds a reference to the file store
/// but caches nothing. Every command re-reads its resource file.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Handlers do
/// blocking file I/O; async callers should run them on a blocking pool.
///
/// # Example
///
/// ```ignore
/// use flatstore_executor::{Command, Executor};
///
/// let executor = Executor::new(store);
///
/// // Single command execution
/// let result = executor.execute(Command::CategoryGet { id: "1".into() })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::CategoryList,
///     Command::SaleList,
/// ]);
/// ```
#[derive(Clone)]
pub struct Executor {
    store: Arc<FileStore>,
}

impl Executor {
    /// Create a new executor over a file store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. Server-side failures are
    /// logged here with the underlying cause.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        debug!(
            target: "flatstore::executor",
            command = name,
            resource = %cmd.resource(),
            write = cmd.is_write(),
            "Executing"
        );

        let result = self.dispatch(cmd);
        if let Err(e) = &result {
            if e.is_system() {
                error!(target: "flatstore::executor", command = name, error = %e, "Command failed");
            } else {
                debug!(target: "flatstore::executor", command = name, error = %e, "Command rejected");
            }
        }
        result
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let s = &self.store;
        match cmd {
            // Product commands
            Command::ProductList { filter } => products::product_list(s, filter),
            Command::ProductSearch { search } => products::product_search(s, search),
            Command::ProductsByCategory { category_id } => {
                products::products_by_category(s, category_id)
            }
            Command::ProductGet { id } => products::product_get(s, id),
            Command::ProductCreate { body } => products::product_create(s, body),
            Command::ProductUpdate { id, body } => products::product_update(s, id, body),
            Command::ProductDelete { id } => products::product_delete(s, id),

            // Category commands
            Command::CategoryList => categories::category_list(s),
            Command::CategoryGet { id } => categories::category_get(s, id),

            // User commands
            Command::UserList { filter } => users::user_list(s, filter),
            Command::UserGet { id } => users::user_get(s, id),
            Command::UserGetByUsername { username } => users::user_get_by_username(s, username),
            Command::UserGetByEmail { email } => users::user_get_by_email(s, email),
            Command::UserCreate { body } => users::user_create(s, body),
            Command::UserUpdate { id, body } => users::user_update(s, id, body),
            Command::UserDelete { id } => users::user_delete(s, id),

            // Order commands
            Command::OrderList { filter } => orders::order_list(s, filter),
            Command::OrderGet { id } => orders::order_get(s, id),

            // Sale commands
            Command::SaleList => sales::sale_list(s),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
