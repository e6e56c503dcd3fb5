//! Order queries

use flatstore_core::{record_matches_key, Record};
use serde::{Deserialize, Serialize};

/// Optional owner filter for the order list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    /// Exact `userId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl OrderFilter {
    /// Orders belonging to `user_id`
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Orders passing the filter, in collection order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        match self.user_id.as_deref().filter(|id| !id.is_empty()) {
            Some(user_id) => records
                .iter()
                .filter(|r| record_matches_key(r, "userId", user_id))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}
