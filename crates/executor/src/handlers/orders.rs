//! Order command handlers.

use std::sync::Arc;

use flatstore_core::{Resource, Value};
use flatstore_engine::{find_by_id, OrderFilter};
use flatstore_storage::FileStore;

use crate::bridge::records_to_values;
use crate::{Error, Output, Result};

const RESOURCE: Resource = Resource::Orders;

/// Handle OrderList command.
pub fn order_list(store: &Arc<FileStore>, filter: OrderFilter) -> Result<Output> {
    let orders = store.load(RESOURCE)?;
    Ok(Output::Records(records_to_values(filter.apply(&orders))))
}

/// Handle OrderGet command.
pub fn order_get(store: &Arc<FileStore>, id: String) -> Result<Output> {
    let orders = store.load(RESOURCE)?;
    match find_by_id(&orders, &id) {
        Some(order) => Ok(Output::Record(Value::Object(order.clone()))),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            key: id,
        }),
    }
}
