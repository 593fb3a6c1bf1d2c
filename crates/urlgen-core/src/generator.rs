//! Public entry point: dotted path + parameters → URL.

use std::path::Path;
use std::sync::Arc;

use crate::compile::compile;
use crate::error::{Result, UrlGenError};
use crate::params::Params;
use crate::parts::UrlParts;
use crate::resolve::resolve;
use crate::tree::ConfigNode;

/// Generates URLs from a shared, read-only configuration tree.
///
/// Cloning is cheap and clones share the tree, so a generator can be handed
/// to many threads. Each call works on its own merged parameter snapshot.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    root: Arc<ConfigNode>,
    defaults: Params,
}

impl UrlGenerator {
    /// Builds a generator over `root` with global default parameters.
    pub fn new(root: ConfigNode, defaults: Params) -> Result<Self> {
        if root.is_empty() {
            return Err(UrlGenError::EmptyConfig);
        }
        Ok(Self {
            root: Arc::new(root),
            defaults,
        })
    }

    /// Loads the tree from a JSON file.
    pub fn from_path(path: &Path, defaults: Params) -> Result<Self> {
        Self::new(ConfigNode::from_path(path)?, defaults)
    }

    pub fn defaults(&self) -> &Params {
        &self.defaults
    }

    pub fn tree(&self) -> &ConfigNode {
        &self.root
    }

    /// Returns the URL for `path_str` (e.g. `"shop.category.index"`).
    ///
    /// Call-site `params` win over the defaults on collision.
    pub fn get_url(&self, path_str: &str, params: &Params) -> Result<String> {
        let merged = self.defaults.merged_with(params);
        let path = parse_path(path_str);
        let parts = resolve(&path, &merged, &self.root);
        match compile(&parts, &merged) {
            Ok(url) => {
                tracing::debug!("resolved '{}' -> {}", path_str, url);
                Ok(url)
            }
            Err(e) => {
                tracing::debug!("failed to resolve '{}': {}", path_str, e);
                Err(e)
            }
        }
    }

    /// Resolved URL parts for `path_str` without compiling them.
    pub fn url_parts(&self, path_str: &str, params: &Params) -> UrlParts {
        let merged = self.defaults.merged_with(params);
        resolve(&parse_path(path_str), &merged, &self.root)
    }
}

/// Splits a dotted path key into segments. `""` yields one empty segment.
pub fn parse_path(path_str: &str) -> Vec<&str> {
    path_str.split('.').collect()
}
