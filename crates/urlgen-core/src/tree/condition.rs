//! Inline conditional keys of the form `{param}=value`.

use regex::Regex;
use std::sync::LazyLock;

use crate::params::Params;

static CONDITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{(.+)\}=(.+)$").expect("valid condition pattern"));

/// Gate on a runtime parameter. Holds when the parameter is present and its
/// string form equals `expected` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    name: String,
    expected: String,
}

impl Condition {
    pub fn new(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: expected.into(),
        }
    }

    /// Parses a tree key; `None` when the key is not a condition.
    pub fn parse(key: &str) -> Option<Condition> {
        let caps = CONDITION_RE.captures(key)?;
        Some(Condition::new(&caps[1], &caps[2]))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Absent parameters never satisfy a condition.
    pub fn is_satisfied(&self, params: &Params) -> bool {
        params
            .get(&self.name)
            .is_some_and(|v| v.as_text() == self.expected)
    }
}
