//! Product command handlers.

use std::sync::Arc;

use flatstore_core::{Resource, Value};
use flatstore_engine::{
    by_category, created_at_now, find_by_id, insert_new, remove_by_id, update_by_id,
    ProductFilter, ProductSearch,
};
use flatstore_storage::FileStore;
use tracing::info;

use crate::bridge::{body_to_record, records_to_values};
use crate::{Error, Output, Result};

const RESOURCE: Resource = Resource::Products;

/// Handle ProductList command.
pub fn product_list(store: &Arc<FileStore>, filter: ProductFilter) -> Result<Output> {
    let products = store.load(RESOURCE)?;
    Ok(Output::Records(records_to_values(filter.apply(&products))))
}

/// Handle ProductSearch command.
///
/// The query is checked before the file is read, so a missing query is a
/// 400 even when the products file is broken.
pub fn product_search(store: &Arc<FileStore>, search: ProductSearch) -> Result<Output> {
    search.validate()?;
    let products = store.load(RESOURCE)?;
    Ok(Output::Records(records_to_values(search.apply(&products)?)))
}

/// Handle ProductsByCategory command.
pub fn products_by_category(store: &Arc<FileStore>, category_id: String) -> Result<Output> {
    let products = store.load(RESOURCE)?;
    Ok(Output::Records(records_to_values(by_category(
        &products,
        &category_id,
    ))))
}

/// Handle ProductGet command.
pub fn product_get(store: &Arc<FileStore>, id: String) -> Result<Output> {
    let products = store.load(RESOURCE)?;
    let product = find_by_id(&products, &id).ok_or(Error::NotFound {
        resource: RESOURCE,
        key: id.clone(),
    })?;
    Ok(Output::Record(Value::Object(product.clone())))
}

/// Handle ProductCreate command.
///
/// Id: one above the largest numeric product id. Stamps `createdAt`.
pub fn product_create(store: &Arc<FileStore>, body: Value) -> Result<Output> {
    let body = body_to_record(body)?;
    let now = created_at_now();
    let created = store.modify(RESOURCE, |products| {
        insert_new(RESOURCE, products, body, &now)
    })?;
    info!(target: "flatstore::executor", id = ?created.get("id"), "Created product");
    Ok(Output::Created(Value::Object(created)))
}

/// Handle ProductUpdate command.
pub fn product_update(store: &Arc<FileStore>, id: String, body: Value) -> Result<Output> {
    let body = body_to_record(body)?;
    let updated = store.modify(RESOURCE, |products| {
        update_by_id(RESOURCE, products, &id, body)
    })?;
    info!(target: "flatstore::executor", id = %id, "Updated product");
    Ok(Output::Record(Value::Object(updated)))
}

/// Handle ProductDelete command.
pub fn product_delete(store: &Arc<FileStore>, id: String) -> Result<Output> {
    store.modify(RESOURCE, |products| remove_by_id(RESOURCE, products, &id))?;
    info!(target: "flatstore::executor", id = %id, "Deleted product");
    Ok(Output::Message("Product deleted successfully".into()))
}
