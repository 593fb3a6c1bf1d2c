//! `urlgen get <path>` – print the generated URL.

use anyhow::Result;
use urlgen_core::{Params, UrlGenerator};

pub fn run_get(generator: &UrlGenerator, path: &str, params: &Params) -> Result<()> {
    let url = generator.get_url(path, params)?;
    println!("{}", url);
    Ok(())
}
