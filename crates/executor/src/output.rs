//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on file contents).

use flatstore_core::Value;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use flatstore_executor::{Command, Output, Executor};
///
/// match executor.execute(Command::ProductGet { id: "1".into() })? {
///     Output::Record(product) => println!("Found: {}", product),
///     _ => unreachable!("ProductGet always returns Record"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Collection listing or query result, in collection order
    Records(Vec<Value>),

    /// A single existing record (get, update)
    Record(Value),

    /// A newly appended record
    Created(Value),

    /// Record removed, nothing to return
    Deleted,

    /// Record removed, with a confirmation message
    Message(String),
}

impl Output {
    /// JSON body for this output, `None` when there is nothing to send
    pub fn into_body(self) -> Option<Value> {
        match self {
            Output::Records(records) => Some(Value::Array(records)),
            Output::Record(record) | Output::Created(record) => Some(record),
            Output::Deleted => None,
            Output::Message(message) => {
                let mut body = serde_json::Map::new();
                body.insert("message".into(), Value::String(message));
                Some(Value::Object(body))
            }
        }
    }
}
