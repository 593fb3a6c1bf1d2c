//! Configuration tree: the declarative description of every URL.
//!
//! A node is an ordered list of entries. Each entry either assigns a URL part
//! (`@scheme`, `@host`, ...), descends on a literal path segment, or overlays
//! a subtree when a `{param}=value` condition holds. Declared order is kept
//! because later entries override earlier ones during resolution.

mod condition;
mod load;
mod parse;

pub use condition::Condition;

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Prefix marking URL-part keywords in the configuration source.
pub const KEYWORD_SIGIL: char = '@';

/// The six recognized URL-part keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlPart {
    Scheme,
    Host,
    Tld,
    Path,
    Query,
    Fragment,
}

impl UrlPart {
    pub const ALL: [UrlPart; 6] = [
        UrlPart::Scheme,
        UrlPart::Host,
        UrlPart::Tld,
        UrlPart::Path,
        UrlPart::Query,
        UrlPart::Fragment,
    ];

    /// Keyword as written in the configuration, sigil included.
    pub fn keyword(self) -> &'static str {
        match self {
            UrlPart::Scheme => "@scheme",
            UrlPart::Host => "@host",
            UrlPart::Tld => "@tld",
            UrlPart::Path => "@path",
            UrlPart::Query => "@query",
            UrlPart::Fragment => "@fragment",
        }
    }

    pub fn from_keyword(key: &str) -> Option<UrlPart> {
        UrlPart::ALL.into_iter().find(|p| p.keyword() == key)
    }
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `@query` value: ordered `(param_name, query_alias)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pairs: Vec<(String, String)>,
}

impl QueryConfig {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<P: Into<String>, A: Into<String>> FromIterator<(P, A)> for QueryConfig {
    fn from_iter<I: IntoIterator<Item = (P, A)>>(iter: I) -> Self {
        QueryConfig::new(iter.into_iter().map(|(p, a)| (p.into(), a.into())).collect())
    }
}

impl Serialize for QueryConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (param, alias) in &self.pairs {
            map.serialize_entry(param, alias)?;
        }
        map.end()
    }
}

/// Value bound to a URL-part keyword. The variant fixes the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Scheme(String),
    Host(String),
    Tld(String),
    Path(String),
    Query(QueryConfig),
    Fragment(String),
}

impl PartValue {
    pub fn part(&self) -> UrlPart {
        match self {
            PartValue::Scheme(_) => UrlPart::Scheme,
            PartValue::Host(_) => UrlPart::Host,
            PartValue::Tld(_) => UrlPart::Tld,
            PartValue::Path(_) => UrlPart::Path,
            PartValue::Query(_) => UrlPart::Query,
            PartValue::Fragment(_) => UrlPart::Fragment,
        }
    }
}

/// One entry of a node, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Part(PartValue),
    Segment(String, ConfigNode),
    Conditional(Condition, ConfigNode),
}

/// A node of the configuration tree. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    entries: Vec<Entry>,
}

impl ConfigNode {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
