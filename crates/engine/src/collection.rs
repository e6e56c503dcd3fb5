//! Generic operations over a loaded collection
//!
//! These are the building blocks every resource handler shares. Mutating
//! functions only change the in-memory `Vec`; persisting it is the caller's
//! job (normally inside `FileStore::modify`).

use chrono::{SecondsFormat, Utc};
use flatstore_core::{merge, record_matches_key, Error, Record, Resource, Result, Value};

/// Current UTC time as stored in `createdAt`, e.g. `2024-01-01T00:00:00.000Z`
pub fn created_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// First record whose `field` stringifies to `key`
pub fn find_by_field<'a>(records: &'a [Record], field: &str, key: &str) -> Option<&'a Record> {
    records.iter().find(|r| record_matches_key(r, field, key))
}

/// First record whose `id` stringifies to `id`
pub fn find_by_id<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    find_by_field(records, "id", id)
}

fn position_of(records: &[Record], id: &str) -> Option<usize> {
    records.iter().position(|r| record_matches_key(r, "id", id))
}

/// Append a new record built from `body` and return it.
///
/// The base record holds the id chosen by the resource's id policy and, for
/// resources that stamp one, `createdAt` set to `now`. `body` is merged over
/// the base, so a client that sends its own `id` keeps it.
///
/// # Errors
///
/// `Error::Validation` if `resource` is read-only.
pub fn insert_new(
    resource: Resource,
    records: &mut Vec<Record>,
    body: Record,
    now: &str,
) -> Result<Record> {
    let policy = resource.id_policy().ok_or_else(|| {
        Error::validation(format!("{} cannot be created", resource.id()))
    })?;

    let mut record = Record::new();
    record.insert("id".into(), policy.next_id(records));
    if resource.stamps_created_at() {
        record.insert("createdAt".into(), Value::String(now.to_string()));
    }
    merge(&mut record, body);

    records.push(record.clone());
    Ok(record)
}

/// Shallow-merge `body` over the record with `id`, keeping its original id.
///
/// # Errors
///
/// `Error::NotFound` if no record has that id.
pub fn update_by_id(
    resource: Resource,
    records: &mut [Record],
    id: &str,
    body: Record,
) -> Result<Record> {
    let index = position_of(records, id).ok_or_else(|| Error::not_found(resource, id))?;
    let existing = &mut records[index];
    let original_id = existing.get("id").cloned();

    merge(existing, body);
    if let Some(original_id) = original_id {
        existing.insert("id".into(), original_id);
    }
    Ok(existing.clone())
}

/// Remove the first record with `id` and return it.
///
/// # Errors
///
/// `Error::NotFound` if no record has that id.
pub fn remove_by_id(resource: Resource, records: &mut Vec<Record>, id: &str) -> Result<Record> {
    let index = position_of(records, id).ok_or_else(|| Error::not_found(resource, id))?;
    Ok(records.remove(index))
}
