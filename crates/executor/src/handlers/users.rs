//! User command handlers.
//!
//! Every user in an output is a [`PublicUser`] projection, including the
//! record returned by create and update.

use std::sync::Arc;

use flatstore_core::{PublicUser, Resource};
use flatstore_engine::users::{find_by_email, find_by_username, find_public_by_id};
use flatstore_engine::{created_at_now, insert_new, remove_by_id, update_by_id, UserFilter};
use flatstore_storage::FileStore;
use tracing::info;

use crate::bridge::{body_to_record, users_to_values};
use crate::{Error, Output, Result};

const RESOURCE: Resource = Resource::Users;

fn found(user: Option<PublicUser>, key: String) -> Result<Output> {
    match user {
        Some(user) => Ok(Output::Record(user.into_value())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            key,
        }),
    }
}

/// Handle UserList command.
pub fn user_list(store: &Arc<FileStore>, filter: UserFilter) -> Result<Output> {
    let users = store.load(RESOURCE)?;
    Ok(Output::Records(users_to_values(filter.apply(&users))))
}

/// Handle UserGet command.
pub fn user_get(store: &Arc<FileStore>, id: String) -> Result<Output> {
    let users = store.load(RESOURCE)?;
    found(find_public_by_id(&users, &id), id)
}

/// Handle UserGetByUsername command.
pub fn user_get_by_username(store: &Arc<FileStore>, username: String) -> Result<Output> {
    let users = store.load(RESOURCE)?;
    found(find_by_username(&users, &username), username)
}

/// Handle UserGetByEmail command.
pub fn user_get_by_email(store: &Arc<FileStore>, email: String) -> Result<Output> {
    let users = store.load(RESOURCE)?;
    found(find_by_email(&users, &email), email)
}

/// Handle UserCreate command.
///
/// Id: collection length plus one.
pub fn user_create(store: &Arc<FileStore>, body: serde_json::Value) -> Result<Output> {
    let body = body_to_record(body)?;
    let now = created_at_now();
    let created = store.modify(RESOURCE, |users| insert_new(RESOURCE, users, body, &now))?;
    info!(target: "flatstore::executor", id = ?created.get("id"), "Created user");
    Ok(Output::Created(PublicUser::from_record(&created).into_value()))
}

/// Handle UserUpdate command.
pub fn user_update(store: &Arc<FileStore>, id: String, body: serde_json::Value) -> Result<Output> {
    let body = body_to_record(body)?;
    let updated = store.modify(RESOURCE, |users| update_by_id(RESOURCE, users, &id, body))?;
    info!(target: "flatstore::executor", id = %id, "Updated user");
    Ok(Output::Record(PublicUser::from_record(&updated).into_value()))
}

/// Handle UserDelete command.
pub fn user_delete(store: &Arc<FileStore>, id: String) -> Result<Output> {
    store.modify(RESOURCE, |users| remove_by_id(RESOURCE, users, &id))?;
    info!(target: "flatstore::executor", id = %id, "Deleted user");
    Ok(Output::Deleted)
}
