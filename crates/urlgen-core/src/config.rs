use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::params::{ParamValue, Params};

/// Settings loaded from `~/.config/urlgen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlgenConfig {
    /// Configuration tree (JSON) used when no `--routes` flag is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<PathBuf>,
    /// Global default parameters, merged under call-site parameters.
    #[serde(default)]
    pub defaults: BTreeMap<String, ParamValue>,
}

impl UrlgenConfig {
    pub fn default_params(&self) -> Params {
        self.defaults
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlgen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlgenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlgenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlgenConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlgenConfig::default();
        assert!(cfg.routes.is_none());
        assert!(cfg.defaults.is_empty());
        assert!(cfg.default_params().is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = UrlgenConfig::default();
        cfg.routes = Some(PathBuf::from("/etc/urlgen/routes.json"));
        cfg.defaults.insert("lang".into(), ParamValue::from("cz"));
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlgenConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.routes, cfg.routes);
        assert_eq!(parsed.defaults, cfg.defaults);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            routes = "routes.json"

            [defaults]
            env = "production"
            lang = "cz"
            page_size = 20
        "#;
        let cfg: UrlgenConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.routes.as_deref(), Some(std::path::Path::new("routes.json")));
        let params = cfg.default_params();
        assert_eq!(params.get("env"), Some(&ParamValue::from("production")));
        assert_eq!(params.get("page_size"), Some(&ParamValue::Int(20)));
    }

    #[test]
    fn config_toml_empty() {
        let cfg: UrlgenConfig = toml::from_str("").unwrap();
        assert!(cfg.routes.is_none());
        assert!(cfg.defaults.is_empty());
    }
}
