//! User queries
//!
//! Every user that leaves this module has gone through [`PublicUser`], so
//! callers cannot return a stored password by accident.

use flatstore_core::{PublicUser, Record, Value};
use serde::{Deserialize, Serialize};

use crate::collection::find_by_field;

/// Credential lookup for the user list
///
/// Only applies when both `username` and `password` are non-empty; a request
/// carrying just one of them lists every user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Exact username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Exact plaintext password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserFilter {
    /// Filter on a username/password pair
    pub fn credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    fn pair(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some((u, p)),
            _ => None,
        }
    }

    /// Public view of the users passing the filter, in collection order
    pub fn apply(&self, records: &[Record]) -> Vec<PublicUser> {
        match self.pair() {
            Some((username, password)) => records
                .iter()
                .filter(|r| {
                    str_field(r, "username") == Some(username)
                        && str_field(r, "password") == Some(password)
                })
                .map(PublicUser::from_record)
                .collect(),
            None => public_users(records),
        }
    }
}

fn str_field<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// Public view of every user
pub fn public_users(records: &[Record]) -> Vec<PublicUser> {
    records.iter().map(PublicUser::from_record).collect()
}

/// Public view of the first user whose `username` is exactly `username`
pub fn find_by_username(records: &[Record], username: &str) -> Option<PublicUser> {
    records
        .iter()
        .find(|r| str_field(r, "username") == Some(username))
        .map(PublicUser::from_record)
}

/// Public view of the first user whose `email` is exactly `email`
pub fn find_by_email(records: &[Record], email: &str) -> Option<PublicUser> {
    records
        .iter()
        .find(|r| str_field(r, "email") == Some(email))
        .map(PublicUser::from_record)
}

/// Public view of the user with `id`
pub fn find_public_by_id(records: &[Record], id: &str) -> Option<PublicUser> {
    find_by_field(records, "id", id).map(PublicUser::from_record)
}
