//! Tree walk that turns a path and parameters into [`UrlParts`].
//!
//! Entries are visited in declared order and every contribution overwrites
//! what came before, so later entries win:
//!
//! - a keyword entry sets that URL part;
//! - a segment entry equal to the head of the remaining path is resolved
//!   with the head consumed;
//! - a satisfied conditional entry is resolved with the same remaining path.
//!
//! Unmatched segments contribute nothing. Missing required parts are
//! reported later by the compiler, not here.

use crate::params::Params;
use crate::parts::UrlParts;
use crate::tree::{ConfigNode, Entry};

/// Resolves `path` against `node`.
pub fn resolve(path: &[&str], params: &Params, node: &ConfigNode) -> UrlParts {
    let mut parts = UrlParts::default();

    for entry in node.entries() {
        match entry {
            Entry::Part(value) => parts.apply(value),
            Entry::Segment(name, child) => {
                if let Some((head, rest)) = path.split_first() {
                    if name == head {
                        tracing::trace!("descend into segment '{}'", name);
                        parts.merge(resolve(rest, params, child));
                    }
                }
            }
            Entry::Conditional(condition, child) => {
                if condition.is_satisfied(params) {
                    tracing::trace!(
                        "condition {{{}}}={} holds",
                        condition.name(),
                        condition.expected()
                    );
                    parts.merge(resolve(path, params, child));
                }
            }
        }
    }

    parts
}
