//! `urlgen check` – load the tree and report its shape.

use anyhow::Result;
use urlgen_core::{Entry, UrlGenerator};

pub fn run_check(generator: &UrlGenerator) -> Result<()> {
    let tree = generator.tree();
    let keys = tree
        .entries()
        .iter()
        .filter(|e| matches!(e, Entry::Segment(..)))
        .count();
    println!(
        "configuration OK: {} top-level entries, {} path keys",
        tree.len(),
        keys
    );
    Ok(())
}
