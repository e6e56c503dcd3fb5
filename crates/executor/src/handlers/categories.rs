//! Category command handlers.

use std::sync::Arc;

use flatstore_core::{Resource, Value};
use flatstore_engine::find_by_id;
use flatstore_storage::FileStore;

use crate::bridge::records_to_values;
use crate::{Error, Output, Result};

const RESOURCE: Resource = Resource::Categories;

/// Handle CategoryList command.
pub fn category_list(store: &Arc<FileStore>) -> Result<Output> {
    let categories = store.load(RESOURCE)?;
    Ok(Output::Records(records_to_values(categories)))
}

/// Handle CategoryGet command.
pub fn category_get(store: &Arc<FileStore>, id: String) -> Result<Output> {
    let categories = store.load(RESOURCE)?;
    match find_by_id(&categories, &id) {
        Some(category) => Ok(Output::Record(Value::Object(category.clone()))),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            key: id,
        }),
    }
}
