//! `urlgen parts <path>` – show what the tree walk collected.

use anyhow::Result;
use urlgen_core::{Params, UrlGenerator};

pub fn run_parts(generator: &UrlGenerator, path: &str, params: &Params) -> Result<()> {
    let parts = generator.url_parts(path, params);
    if parts.is_empty() {
        eprintln!("no URL parts found for '{}'", path);
    }
    println!("{}", serde_json::to_string_pretty(&parts)?);
    Ok(())
}
