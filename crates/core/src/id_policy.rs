//! Id generation for created records
//!
//! The two writable collections have always generated ids differently, and
//! clients can observe the difference, so both policies are kept side by side.
//!
//! - `MaxNumericIdPlusOne`: one above the largest integer id present. Ids that
//!   do not parse as integers are ignored. Emits a JSON string.
//! - `CountPlusOne`: collection length plus one. Emits a JSON number. After a
//!   deletion this can hand out an id that is still in use.

use crate::record::{record_key, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a collection picks the id of a newly created record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPolicy {
    /// `max(integer ids) + 1`, or `1` for a collection with none
    MaxNumericIdPlusOne,
    /// `len + 1`
    CountPlusOne,
}

impl IdPolicy {
    /// Id for a record about to be appended to `records`
    pub fn next_id(&self, records: &[Record]) -> Value {
        match self {
            IdPolicy::MaxNumericIdPlusOne => {
                let max = records
                    .iter()
                    .filter_map(|r| record_key(r, "id"))
                    .filter_map(|k| k.parse::<i64>().ok())
                    .max()
                    .unwrap_or(0);
                Value::String(max.saturating_add(1).to_string())
            }
            IdPolicy::CountPlusOne => Value::from(records.len() as u64 + 1),
        }
    }
}
