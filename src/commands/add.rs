use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::intake::{add_book, BookDraft};
use crate::store::FileBookStore;

pub async fn run(store_path: &Path, draft: BookDraft, quiet: bool) -> Result<()> {
    let store = FileBookStore::new(store_path);
    let book = add_book(&store, draft).await?;

    if quiet {
        println!("{}", book.id);
        return Ok(());
    }

    println!(
        "{} Added \"{}\" ({})",
        "✓".green(),
        book.title,
        book.id.dimmed()
    );
    println!("The player will open it the next time the shell starts.");
    Ok(())
}
