//! Query-string assembly from a `@query` config.

use std::borrow::Cow;
use url::form_urlencoded;

use crate::params::Params;
use crate::tree::QueryConfig;

/// Emits `alias=value` for each configured parameter present in `params`,
/// in the config's declared order, form-urlencoded and joined with `&`.
/// Absent parameters are skipped. If two parameters share an alias, the later
/// value is kept at the earlier position.
pub fn build_query_string(query: &QueryConfig, params: &Params) -> String {
    let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::new();
    for (param, alias) in query.iter() {
        let Some(value) = params.get(param) else {
            continue;
        };
        let value = value.as_text();
        match pairs.iter_mut().find(|(a, _)| *a == alias) {
            Some(slot) => slot.1 = value,
            None => pairs.push((alias, value)),
        }
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (alias, value) in &pairs {
        serializer.append_pair(alias, value);
    }
    serializer.finish()
}
