//! `{name}` placeholder substitution.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, UrlGenError};
use crate::params::Params;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.+?)\}").expect("valid placeholder pattern"));

/// Distinct placeholder names in order of first appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        if let Some(m) = caps.get(1) {
            if !names.contains(&m.as_str()) {
                names.push(m.as_str());
            }
        }
    }
    names
}

/// Replaces every `{name}` with the parameter's string form. Any placeholder
/// without a parameter is a `MissingParameter` error; unused parameters are
/// ignored. Values are inserted verbatim.
pub fn substitute(template: &str, params: &Params) -> Result<String> {
    let mut url = template.to_string();
    for name in placeholder_names(template) {
        let value = params
            .get(name)
            .ok_or_else(|| UrlGenError::MissingParameter(name.to_string()))?;
        url = url.replace(&format!("{{{}}}", name), &value.as_text());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_distinct_names() {
        assert_eq!(
            placeholder_names("http://{sub}.example.{tld}/{sub}"),
            vec!["sub", "tld"]
        );
        assert!(placeholder_names("http://www.example.com/{}").is_empty());
    }

    #[test]
    fn replaces_every_occurrence() {
        let params = Params::new().with("sub", "auto-moto").with("tld", "cz");
        assert_eq!(
            substitute("http://{sub}.example.{tld}/{sub}", &params).unwrap(),
            "http://auto-moto.example.cz/auto-moto"
        );
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let t = "http://www.example.com/alohamora/?sp=bla#top";
        assert_eq!(substitute(t, &Params::new().with("unused", 1)).unwrap(), t);
    }

    #[test]
    fn numeric_values_are_stringified() {
        let params = Params::new().with("page", 10);
        assert_eq!(
            substitute("http://h/list/{page}", &params).unwrap(),
            "http://h/list/10"
        );
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let params = Params::new().with("host", "h");
        match substitute("http://{host}/{path}", &params) {
            Err(UrlGenError::MissingParameter(name)) => assert_eq!(name, "path"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }
}
