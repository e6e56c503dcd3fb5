//! Glue between command payloads and collection records.

use flatstore_core::{PublicUser, Record, Value};

use crate::{Error, Result};

/// Unwrap a request body into a record.
///
/// Create and update merge the body field by field, so it has to be an object.
pub(crate) fn body_to_record(body: Value) -> Result<Record> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidInput {
            reason: "Request body must be a JSON object".into(),
        }),
    }
}

pub(crate) fn records_to_values(records: Vec<Record>) -> Vec<Value> {
    records.into_iter().map(Value::Object).collect()
}

pub(crate) fn users_to_values(users: Vec<PublicUser>) -> Vec<Value> {
    users.into_iter().map(PublicUser::into_value).collect()
}
