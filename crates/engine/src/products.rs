//! Product queries
//!
//! Two independent query shapes run over the products collection:
//!
//! - [`ProductFilter`]: the list endpoint's composable filters. Every filter
//!   that is set must hold (AND); `search` itself matches name OR description.
//! - [`ProductSearch`]: the dedicated search endpoint. One term, a list of
//!   fields, exact or substring matching; a record matches if ANY field does.
//!
//! Text matching is case-insensitive throughout. Empty parameters are treated
//! as absent, the same as a parameter that was never sent.

use flatstore_core::{key_of, record_matches_key, Error, Record, Result, Value};
use serde::{Deserialize, Serialize};

/// Fields searched when a search request names none
pub const DEFAULT_SEARCH_FIELDS: &str = "name,description";

fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Lowercased string field, if the record has one
fn text_field(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.to_lowercase()),
        _ => None,
    }
}

fn contains_ci(record: &Record, field: &str, needle: &str) -> bool {
    text_field(record, field).is_some_and(|text| text.contains(needle))
}

fn price_of(record: &Record) -> Option<f64> {
    match record.get("price")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a price bound the lenient way: the longest numeric prefix wins
/// (`"10abc"` → 10), and a bound with no numeric prefix is NaN, which no
/// price satisfies. A leading `Infinity` (optionally signed) is infinite.
pub fn parse_price_bound(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    (1..=s.len())
        .rev()
        .filter(|&end| s.is_char_boundary(end))
        .find_map(|end| {
            let prefix = &s[..end];
            let numeric = prefix
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
            if numeric {
                prefix.parse::<f64>().ok()
            } else {
                None
            }
        })
        .unwrap_or(f64::NAN)
}

/// Composable filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Substring of `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Substring of `description`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Substring of `name` or `description`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact `categoryId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

impl ProductFilter {
    /// Create an empty filter (matches all)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `name` to contain `term`
    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    /// Require `description` to contain `term`
    pub fn description(mut self, term: impl Into<String>) -> Self {
        self.description = Some(term.into());
        self
    }

    /// Require `name` or `description` to contain `term`
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Require `categoryId` to equal `id`
    pub fn category_id(mut self, id: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    /// Require `price >= bound`
    pub fn min_price(mut self, bound: impl Into<String>) -> Self {
        self.min_price = Some(bound.into());
        self
    }

    /// Require `price <= bound`
    pub fn max_price(mut self, bound: impl Into<String>) -> Self {
        self.max_price = Some(bound.into());
        self
    }

    /// Check if no filter is set
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.search,
            &self.category_id,
            &self.min_price,
            &self.max_price,
        ]
        .into_iter()
        .all(|p| non_empty(p).is_none())
    }

    /// Check if a product passes every filter that is set
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(term) = non_empty(&self.name) {
            if !contains_ci(record, "name", &term.to_lowercase()) {
                return false;
            }
        }

        if let Some(term) = non_empty(&self.description) {
            if !contains_ci(record, "description", &term.to_lowercase()) {
                return false;
            }
        }

        if let Some(term) = non_empty(&self.search) {
            let term = term.to_lowercase();
            if !contains_ci(record, "name", &term) && !contains_ci(record, "description", &term) {
                return false;
            }
        }

        if let Some(id) = non_empty(&self.category_id) {
            if !record_matches_key(record, "categoryId", id) {
                return false;
            }
        }

        if let Some(bound) = non_empty(&self.min_price) {
            let bound = parse_price_bound(bound);
            if !price_of(record).is_some_and(|p| p >= bound) {
                return false;
            }
        }

        if let Some(bound) = non_empty(&self.max_price) {
            let bound = parse_price_bound(bound);
            if !price_of(record).is_some_and(|p| p <= bound) {
                return false;
            }
        }

        true
    }

    /// Products passing the filter, in collection order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        if self.is_empty() {
            return records.to_vec();
        }
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Products whose `categoryId` equals `category_id`
pub fn by_category(records: &[Record], category_id: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| record_matches_key(r, "categoryId", category_id))
        .cloned()
        .collect()
}

/// Parameters of the dedicated product search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearch {
    /// Search term (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Comma-separated field names; defaults to [`DEFAULT_SEARCH_FIELDS`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// `"true"` (any case) for whole-value matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<String>,
}

impl ProductSearch {
    /// Substring search for `query` over the default fields
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Search these comma-separated fields instead of the defaults
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Switch between exact and substring matching
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact.to_string());
        self
    }

    fn is_exact(&self) -> bool {
        self.exact
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("true"))
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_FIELDS)
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    }

    /// Check the search can run.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `query` is absent or empty.
    pub fn validate(&self) -> Result<&str> {
        non_empty(&self.query).ok_or_else(|| Error::validation("Search query is required"))
    }

    /// Products matching the search, in collection order.
    ///
    /// # Errors
    ///
    /// `Error::Validation` if `query` is absent or empty.
    pub fn apply(&self, records: &[Record]) -> Result<Vec<Record>> {
        let term = self.validate()?.to_lowercase();
        let fields = self.field_names();
        let exact = self.is_exact();

        Ok(records
            .iter()
            .filter(|record| {
                fields.iter().any(|field| {
                    searchable(record, field).is_some_and(|value| {
                        if exact {
                            value == term
                        } else {
                            value.contains(&term)
                        }
                    })
                })
            })
            .cloned()
            .collect())
    }
}

/// Lowercased text of a searchable field. Strings and numbers qualify;
/// empty strings do not.
fn searchable(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if s.is_empty() => None,
        v @ (Value::String(_) | Value::Number(_)) => key_of(v).map(|k| k.to_lowercase()),
        _ => None,
    }
}
