//! Structural join of URL parts into a URL template.

use crate::error::{Result, UrlGenError};
use crate::parts::UrlParts;
use crate::tree::UrlPart;

/// Schemes a generated URL may use.
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Joins `parts` and an already-built query string into
/// `scheme://host[/path][?query][#fragment]`. Placeholders are left as-is.
pub fn join_url(parts: &UrlParts, query_string: &str) -> Result<String> {
    let scheme = parts
        .scheme
        .as_deref()
        .ok_or(UrlGenError::MissingRequiredPart(UrlPart::Scheme))?;
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(UrlGenError::UnsupportedScheme(scheme.to_string()));
    }

    let host = parts
        .host
        .as_deref()
        .ok_or(UrlGenError::MissingRequiredPart(UrlPart::Host))?;

    let mut url = format!("{}://{}", scheme, host.trim_end_matches('/'));

    if let Some(path) = parts.path.as_deref() {
        url.push('/');
        url.push_str(path.trim_start_matches('/'));
    }

    if !query_string.is_empty() {
        // A path that already carries a query gets the rest appended with `&`.
        let path_has_query = parts.path.as_deref().is_some_and(|p| p.contains('?'));
        url.push(if path_has_query { '&' } else { '?' });
        url.push_str(query_string);
    }

    if let Some(fragment) = parts.fragment.as_deref() {
        url.push('#');
        url.push_str(fragment.trim_start_matches('#'));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> UrlParts {
        UrlParts {
            scheme: Some("http".into()),
            host: Some("www.example.com".into()),
            ..UrlParts::default()
        }
    }

    #[test]
    fn host_only() {
        assert_eq!(join_url(&base(), "").unwrap(), "http://www.example.com");
    }

    #[test]
    fn trims_slashes() {
        let mut p = base();
        p.host = Some("www.example.com//".into());
        p.path = Some("//alohamora/".into());
        assert_eq!(
            join_url(&p, "sp=bla").unwrap(),
            "http://www.example.com/alohamora/?sp=bla"
        );
    }

    #[test]
    fn slash_only_path() {
        let mut p = base();
        p.path = Some("/".into());
        assert_eq!(join_url(&p, "").unwrap(), "http://www.example.com/");
    }

    #[test]
    fn query_without_path_uses_question_mark() {
        assert_eq!(
            join_url(&base(), "sp=bla").unwrap(),
            "http://www.example.com?sp=bla"
        );
    }

    #[test]
    fn path_with_query_appends_ampersand() {
        let mut p = base();
        p.path = Some("search?sort=asc".into());
        assert_eq!(
            join_url(&p, "q=x").unwrap(),
            "http://www.example.com/search?sort=asc&q=x"
        );
    }

    #[test]
    fn fragment_strips_hashes() {
        let mut p = base();
        p.path = Some("very".into());
        p.fragment = Some("##heredity".into());
        assert_eq!(
            join_url(&p, "").unwrap(),
            "http://www.example.com/very#heredity"
        );
    }

    #[test]
    fn required_parts_and_scheme_allow_list() {
        let mut p = base();
        p.scheme = None;
        assert!(matches!(
            join_url(&p, ""),
            Err(UrlGenError::MissingRequiredPart(UrlPart::Scheme))
        ));

        let mut p = base();
        p.host = None;
        assert!(matches!(
            join_url(&p, ""),
            Err(UrlGenError::MissingRequiredPart(UrlPart::Host))
        ));

        let mut p = base();
        p.scheme = Some("ftp".into());
        match join_url(&p, "") {
            Err(UrlGenError::UnsupportedScheme(s)) => assert_eq!(s, "ftp"),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }

        let mut p = base();
        p.scheme = Some("https".into());
        assert_eq!(join_url(&p, "").unwrap(), "https://www.example.com");
    }
}
