//! CLI for urlgen.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlgen_core::config::{self, UrlgenConfig};
use urlgen_core::{ParamValue, Params, UrlGenerator};

use commands::{run_check, run_get, run_parts};

/// Top-level CLI for urlgen.
#[derive(Debug, Parser)]
#[command(name = "urlgen")]
#[command(about = "urlgen: build URLs from a declarative configuration tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the configuration tree comes from.
#[derive(Debug, Clone, Args)]
pub struct RoutesArg {
    /// Configuration tree (JSON). Defaults to `routes` from config.toml.
    #[arg(long, value_name = "FILE")]
    pub routes: Option<PathBuf>,
}

/// Path key plus call-site parameters.
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Dotted path key, e.g. `shop.category.index`.
    pub path: String,

    /// Parameter as NAME=VALUE (repeatable).
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    #[command(flatten)]
    pub routes: RoutesArg,
}

impl LookupArgs {
    pub fn params(&self) -> Params {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), ParamValue::from(v.as_str())))
            .collect()
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL for a path key.
    Get(LookupArgs),

    /// Print the resolved URL parts for a path key as JSON.
    Parts(LookupArgs),

    /// Load and validate the configuration tree.
    Check(RoutesArg),
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// Builds a generator from the `--routes` flag or the settings file.
fn open_generator(cfg: &UrlgenConfig, routes: &RoutesArg) -> Result<UrlGenerator> {
    let path = routes
        .routes
        .clone()
        .or_else(|| cfg.routes.clone())
        .context("no configuration tree: pass --routes or set `routes` in config.toml")?;
    UrlGenerator::from_path(&path, cfg.default_params())
        .with_context(|| format!("load configuration tree {}", path.display()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get(args) => {
                let generator = open_generator(&cfg, &args.routes)?;
                run_get(&generator, &args.path, &args.params())?;
            }
            CliCommand::Parts(args) => {
                let generator = open_generator(&cfg, &args.routes)?;
                run_parts(&generator, &args.path, &args.params())?;
            }
            CliCommand::Check(routes) => {
                let generator = open_generator(&cfg, &routes)?;
                run_check(&generator)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
