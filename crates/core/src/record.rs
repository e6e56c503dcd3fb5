//! Records and key stringification
//!
//! A record is whatever JSON object sits in a collection file. Nothing about
//! its shape is enforced; fields the server does not know about are carried
//! through reads and writes untouched.
//!
//! Lookups compare a field against a path or query parameter, which is
//! always a string. [`key_of`] turns a stored scalar into that string form:
//!
//! | Stored | Key |
//! |--------|-----|
//! | `"7"` | `7` |
//! | `7` | `7` |
//! | `7.0` | `7` |
//! | `7.5` | `7.5` |
//! | `true` | `true` |
//! | `null`, array, object | no key |

use serde_json::{Map, Number, Value};

/// A single record in a collection
pub type Record = Map<String, Value>;

/// Largest magnitude at which an integral float is rendered without a fraction
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Stringify a scalar JSON value for key comparison
pub fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_key(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

/// Stringified value of `field`, if present and scalar
pub fn record_key(record: &Record, field: &str) -> Option<String> {
    record.get(field).and_then(key_of)
}

/// True when `field` stringifies exactly to `key`
pub fn record_matches_key(record: &Record, field: &str, key: &str) -> bool {
    record_key(record, field).is_some_and(|k| k == key)
}

/// Shallow merge: every top-level field of `patch` replaces the one in `base`
pub fn merge(base: &mut Record, patch: Record) {
    for (field, value) in patch {
        base.insert(field, value);
    }
}
