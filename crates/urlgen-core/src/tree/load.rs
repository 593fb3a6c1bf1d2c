//! Reading a configuration tree from JSON text or a file.

use std::fs;
use std::path::Path;

use super::ConfigNode;
use crate::error::{Result, UrlGenError};

impl ConfigNode {
    pub fn from_json_str(data: &str) -> Result<ConfigNode> {
        let value: serde_json::Value = serde_json::from_str(data)?;
        ConfigNode::from_value(&value)
    }

    /// Loads a tree from a JSON file. A missing file is `ConfigNotFound`.
    pub fn from_path(path: &Path) -> Result<ConfigNode> {
        if !path.exists() {
            return Err(UrlGenError::ConfigNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path).map_err(|source| UrlGenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let node = ConfigNode::from_json_str(&data)?;
        tracing::debug!(
            "loaded configuration tree from {} ({} top-level entries)",
            path.display(),
            node.len()
        );
        Ok(node)
    }
}
