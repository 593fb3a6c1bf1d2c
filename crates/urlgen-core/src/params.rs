//! Runtime parameters supplied by the caller.
//!
//! Values are strings or numbers; every consumer (conditions, query strings,
//! placeholder substitution) works on the stringified form, so `10` and
//! `"10"` are interchangeable.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// String form used for comparison and substitution.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

/// Parameter mapping (name → value). Lookups are plain reads; nothing in
/// resolution or compilation mutates or consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    inner: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.inner.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a new mapping with `overrides` layered on top of `self`;
    /// on key collision the override wins.
    pub fn merged_with(&self, overrides: &Params) -> Params {
        let mut inner = self.inner.clone();
        inner.extend(
            overrides
                .inner
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Params { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stringify_like_strings() {
        assert_eq!(ParamValue::from(10).as_text(), "10");
        assert_eq!(ParamValue::from("10").as_text(), "10");
        assert_eq!(ParamValue::from(2.5).as_text(), "2.5");
        assert_eq!(ParamValue::from(10.0).as_text(), "10");
    }

    #[test]
    fn merge_prefers_overrides() {
        let defaults = Params::new().with("host", "example.com").with("port", "666");
        let call = Params::new().with("host", "cool.com");
        let merged = defaults.merged_with(&call);
        assert_eq!(merged.get("host"), Some(&ParamValue::from("cool.com")));
        assert_eq!(merged.get("port"), Some(&ParamValue::from("666")));
        // Inputs are untouched.
        assert_eq!(defaults.get("host"), Some(&ParamValue::from("example.com")));
        assert_eq!(call.len(), 1);
    }

    #[test]
    fn deserializes_scalars() {
        let params: Params = serde_json::from_str(r#"{"a": "x", "b": 3, "c": 1.5}"#).unwrap();
        assert_eq!(params.get("a"), Some(&ParamValue::Str("x".into())));
        assert_eq!(params.get("b"), Some(&ParamValue::Int(3)));
        assert_eq!(params.get("c"), Some(&ParamValue::Float(1.5)));
    }

    #[test]
    fn collects_from_pairs() {
        let params: Params = [("lang", "cz"), ("env", "dev")].into_iter().collect();
        assert!(params.contains("lang"));
        assert!(!params.contains("another"));
        assert_eq!(params.len(), 2);
    }
}
