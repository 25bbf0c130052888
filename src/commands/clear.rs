use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::store::{BookStore, FileBookStore};

pub async fn run(store_path: &Path, quiet: bool) -> Result<()> {
    let store = FileBookStore::new(store_path);
    store
        .clear()
        .await
        .with_context(|| format!("Failed to clear {}", store_path.display()))?;

    if !quiet {
        println!("{} Cleared stored book", "✓".green());
    }
    Ok(())
}
