//! Request types and the `ApiFetch` transport trait
//!
//! An [`ApiRequest`] describes one call against the plugin namespace. The
//! [`ApiFetch`] trait executes it and hands back the decoded JSON body; typed
//! decoding of the payload is the caller's job.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method of an API request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a request (pagination, sorting, filters)
///
/// Keys are kept sorted, so two queries built in a different order compare
/// equal and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, Value>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Flatten into URL query pairs the way WordPress parses them
    ///
    /// Arrays expand to repeated `key[]` pairs, `null` values are dropped and
    /// nested objects are sent as JSON text.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let array_key = format!("{}[]", key);
                    for item in items {
                        pairs.push((array_key.clone(), scalar_to_string(item)));
                    }
                }
                other => pairs.push((key.clone(), scalar_to_string(other))),
            }
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A single call against the plugin REST namespace
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Namespace-relative path, e.g. `/mc/settings`
    pub path: String,
    pub query: Query,
    /// JSON body, if any
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::default(),
            data: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body
    pub fn with_data<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(data).map_err(|source| ApiError::Encode {
            path: self.path.clone(),
            source,
        })?;
        self.data = Some(value);
        Ok(self)
    }
}

/// Transport for plugin API requests
///
/// Implementations must be `Send + Sync` so a single client can be shared by
/// every action creator of a store.
///
/// # Example
///
/// ```rust,ignore
/// use gla_client::{ApiFetch, ApiRequest};
///
/// async fn settings(api: &dyn ApiFetch) -> Result<serde_json::Value, gla_client::ApiError> {
///     api.fetch(ApiRequest::get("/mc/settings")).await
/// }
/// ```
#[async_trait]
pub trait ApiFetch: Send + Sync {
    /// Execute the request and return the decoded JSON body
    ///
    /// A successful response without a body yields `Value::Null`. Non-2xx
    /// responses are reported as [`ApiError::Status`].
    async fn fetch(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_is_order_independent() {
        let a = Query::new().with("page", 1).with("per_page", 25);
        let b = Query::new().with("per_page", 25).with("page", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_to_pairs() {
        let query = Query::new()
            .with("page", 2)
            .with("orderby", "title")
            .with("ids", json!([3, 7]))
            .with("search", Value::Null);

        assert_eq!(
            query.to_pairs(),
            vec![
                ("ids[]".to_string(), "3".to_string()),
                ("ids[]".to_string(), "7".to_string()),
                ("orderby".to_string(), "title".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_with_data() {
        let request = ApiRequest::post("/mc/settings")
            .with_data(&json!({ "website_live": true }))
            .unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.data, Some(json!({ "website_live": true })));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::default(), Method::Get);
    }
}
