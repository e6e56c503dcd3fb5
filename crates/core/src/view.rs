//! Public projections of stored records

use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The client-visible part of a user record.
///
/// Built from an allowlist: a field stored on a user only reaches a response
/// once it is added here. `password` never is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PublicUser {
    /// User id, as stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl PublicUser {
    /// Project a stored user record
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.get("id").cloned(),
            username: record.get("username").cloned(),
            email: record.get("email").cloned(),
        }
    }

    /// Render as a JSON object, omitting absent fields
    pub fn into_value(self) -> Value {
        let mut out = Record::new();
        if let Some(id) = self.id {
            out.insert("id".into(), id);
        }
        if let Some(username) = self.username {
            out.insert("username".into(), username);
        }
        if let Some(email) = self.email {
            out.insert("email".into(), email);
        }
        Value::Object(out)
    }
}

impl From<&Record> for PublicUser {
    fn from(record: &Record) -> Self {
        PublicUser::from_record(record)
    }
}
