//! Cache keys for query-dependent resources
//!
//! Paged resources (issues, product feed, reports) are cached per query. The
//! key is the query rendered as compact JSON with object keys sorted at every
//! level, so the same parameters always land in the same slot no matter the
//! order they were set in.

use gla_client::Query;
use serde_json::{Map, Value};

/// Deterministic key of a query parameter mapping
pub fn query_key(query: &Query) -> String {
    // serde_json's Map is a BTreeMap without `preserve_order`, so keys come
    // out sorted at every level
    let map: Map<String, Value> = query
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(map).to_string()
}
