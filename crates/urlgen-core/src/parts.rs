//! Accumulated URL parts produced by walking the tree.

use serde::Serialize;

use crate::tree::{PartValue, QueryConfig};

/// Union of the URL parts visible along a resolved path. Each field holds the
/// last value assigned in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    #[serde(rename = "@scheme", skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(rename = "@host", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "@tld", skip_serializing_if = "Option::is_none")]
    pub tld: Option<String>,
    #[serde(rename = "@path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "@query", skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryConfig>,
    #[serde(rename = "@fragment", skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Overwrites the field named by `value`.
    pub fn apply(&mut self, value: &PartValue) {
        match value {
            PartValue::Scheme(s) => self.scheme = Some(s.clone()),
            PartValue::Host(s) => self.host = Some(s.clone()),
            PartValue::Tld(s) => self.tld = Some(s.clone()),
            PartValue::Path(s) => self.path = Some(s.clone()),
            PartValue::Query(q) => self.query = Some(q.clone()),
            PartValue::Fragment(s) => self.fragment = Some(s.clone()),
        }
    }

    /// Overwrites every field that is set in `other`. `@query` is replaced
    /// wholesale, never merged key by key.
    pub fn merge(&mut self, other: UrlParts) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        take(&mut self.scheme, other.scheme);
        take(&mut self.host, other.host);
        take(&mut self.tld, other.tld);
        take(&mut self.path, other.path);
        take(&mut self.query, other.query);
        take(&mut self.fragment, other.fragment);
    }

    pub fn is_empty(&self) -> bool {
        *self == UrlParts::default()
    }
}
