//! Turns resolved [`UrlParts`] plus parameters into a concrete URL.
//!
//! Three steps: assemble the query string from the `@query` config, join the
//! parts into a template that may still hold `{name}` placeholders, then
//! substitute the placeholders.

mod join;
mod query;
mod template;

pub use join::{join_url, ALLOWED_SCHEMES};
pub use query::build_query_string;
pub use template::{placeholder_names, substitute};

use crate::error::Result;
use crate::params::Params;
use crate::parts::UrlParts;

/// Compiles `parts` into the final URL.
pub fn compile(parts: &UrlParts, params: &Params) -> Result<String> {
    let query_string = parts
        .query
        .as_ref()
        .map(|q| build_query_string(q, params))
        .unwrap_or_default();
    let template = join_url(parts, &query_string)?;
    substitute(&template, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlGenError;
    use crate::tree::PartValue;

    fn parts(values: &[PartValue]) -> UrlParts {
        let mut p = UrlParts::default();
        for v in values {
            p.apply(v);
        }
        p
    }

    #[test]
    fn compile_parametric_site() {
        let p = parts(&[
            PartValue::Scheme("http".into()),
            PartValue::Host("{host}:{port}".into()),
            PartValue::Path("{path}".into()),
            PartValue::Query([("some_query_param", "q")].into_iter().collect()),
            PartValue::Fragment("{fragment}".into()),
        ]);
        let params = Params::new()
            .with("host", "yomama.com")
            .with("port", "666")
            .with("path", "so/fat")
            .with("some_query_param", 5)
            .with("fragment", "hot");
        assert_eq!(
            compile(&p, &params).unwrap(),
            "http://yomama.com:666/so/fat?q=5#hot"
        );
    }

    #[test]
    fn compile_reports_missing_placeholder() {
        let p = parts(&[
            PartValue::Scheme("http".into()),
            PartValue::Host("{host}".into()),
        ]);
        match compile(&p, &Params::new()) {
            Err(UrlGenError::MissingParameter(name)) => assert_eq!(name, "host"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn compile_checks_scheme_before_placeholders() {
        let p = parts(&[
            PartValue::Scheme("ftp".into()),
            PartValue::Host("{host}".into()),
        ]);
        assert!(matches!(
            compile(&p, &Params::new()),
            Err(UrlGenError::UnsupportedScheme(_))
        ));
    }
}
