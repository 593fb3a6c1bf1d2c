//! Builds a [`ConfigNode`] from an already-parsed JSON value.

use serde_json::{Map, Value};

use super::{Condition, ConfigNode, Entry, PartValue, QueryConfig, UrlPart, KEYWORD_SIGIL};
use crate::error::{Result, UrlGenError};

/// Nesting limit; resolution recurses once per level.
const MAX_DEPTH: usize = 64;

impl ConfigNode {
    /// Converts a JSON object into a configuration tree.
    ///
    /// Keys starting with `@` must be one of the six URL-part keywords, so a
    /// typo fails here instead of being treated as a path segment.
    pub fn from_value(value: &Value) -> Result<ConfigNode> {
        parse_node(value, "", 0)
    }
}

fn parse_node(value: &Value, location: &str, depth: usize) -> Result<ConfigNode> {
    if depth > MAX_DEPTH {
        return Err(UrlGenError::malformed(
            location,
            format!("nesting deeper than {} levels", MAX_DEPTH),
        ));
    }
    let map = expect_object(value, location)?;

    let mut entries = Vec::with_capacity(map.len());
    for (key, child) in map {
        let child_location = if location.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", location, key)
        };

        let entry = if let Some(part) = UrlPart::from_keyword(key) {
            Entry::Part(parse_part(part, child, &child_location)?)
        } else if key.starts_with(KEYWORD_SIGIL) {
            return Err(UrlGenError::malformed(
                &child_location,
                format!("unknown keyword '{}'", key),
            ));
        } else if let Some(condition) = Condition::parse(key) {
            Entry::Conditional(condition, parse_node(child, &child_location, depth + 1)?)
        } else {
            Entry::Segment(key.clone(), parse_node(child, &child_location, depth + 1)?)
        };
        entries.push(entry);
    }

    Ok(ConfigNode::new(entries))
}

fn parse_part(part: UrlPart, value: &Value, location: &str) -> Result<PartValue> {
    let text = || scalar_text(value, location);
    Ok(match part {
        UrlPart::Scheme => PartValue::Scheme(text()?),
        UrlPart::Host => PartValue::Host(text()?),
        UrlPart::Tld => PartValue::Tld(text()?),
        UrlPart::Path => PartValue::Path(text()?),
        UrlPart::Fragment => PartValue::Fragment(text()?),
        UrlPart::Query => PartValue::Query(parse_query(value, location)?),
    })
}

fn parse_query(value: &Value, location: &str) -> Result<QueryConfig> {
    // An empty JSON array is accepted as an empty query config.
    if matches!(value, Value::Array(items) if items.is_empty()) {
        return Ok(QueryConfig::default());
    }
    let map = expect_object(value, location)?;
    let mut pairs = Vec::with_capacity(map.len());
    for (param, alias) in map {
        let alias = scalar_text(alias, &format!("{}.{}", location, param))?;
        pairs.push((param.clone(), alias));
    }
    Ok(QueryConfig::new(pairs))
}

fn scalar_text(value: &Value, location: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(UrlGenError::malformed(
            location,
            format!("expected a string or number, found {}", describe(other)),
        )),
    }
}

fn expect_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        UrlGenError::malformed(
            location,
            format!("expected an object, found {}", describe(value)),
        )
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
