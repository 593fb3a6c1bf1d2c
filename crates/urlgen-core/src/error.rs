//! Error type shared by tree loading, resolution and compilation.

use std::path::PathBuf;

use crate::tree::UrlPart;

/// Every way URL generation can fail. Raised synchronously, never retried.
#[derive(Debug, thiserror::Error)]
pub enum UrlGenError {
    /// Backing configuration file does not exist.
    #[error("configuration file not found: '{}'", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration file exists but could not be read.
    #[error("read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration source is not valid JSON.
    #[error("parse configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// JSON is valid but does not describe a configuration tree.
    #[error("malformed configuration at '{location}': {reason}")]
    MalformedConfig { location: String, reason: String },

    /// Root node has no entries.
    #[error("configuration tree is empty")]
    EmptyConfig,

    /// `@scheme` or `@host` was not found along the resolved path.
    #[error("missing required property {0}")]
    MissingRequiredPart(UrlPart),

    /// `@scheme` is outside the allow-list.
    #[error("unsupported URL scheme: \"{0}\"")]
    UnsupportedScheme(String),

    /// A `{name}` placeholder has no matching parameter.
    #[error("missing mandatory parameter: \"{0}\"")]
    MissingParameter(String),
}

pub type Result<T> = std::result::Result<T, UrlGenError>;

impl UrlGenError {
    pub(crate) fn malformed(location: &str, reason: impl Into<String>) -> Self {
        let location = if location.is_empty() {
            "<root>".to_string()
        } else {
            location.to_string()
        };
        UrlGenError::MalformedConfig {
            location,
            reason: reason.into(),
        }
    }
}
