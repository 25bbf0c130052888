use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::book::CurrentBook;
use crate::continuity::{ContinuityController, RestoreState};
use crate::store::FileBookStore;

#[derive(Serialize)]
struct CurrentReport<'a> {
    state: &'static str,
    book: Option<&'a CurrentBook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run restoration alone and report the terminal state
pub async fn run(store_path: &Path, json: bool, quiet: bool) -> Result<()> {
    let controller = ContinuityController::new(Arc::new(FileBookStore::new(store_path)));
    if let Some(restoration) = controller.begin_restore() {
        restoration.await;
    }
    let state = controller.state();

    if json {
        let (error_kind, error) = match &state {
            RestoreState::Failed(err) => (Some(err.kind()), Some(err.to_string())),
            _ => (None, None),
        };
        let report = CurrentReport {
            state: state.label(),
            book: state.initial_book(),
            error_kind,
            error,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &state {
        RestoreState::Resolved(Some(book)) => {
            if !quiet {
                println!("{}", "Current book".bold());
                println!("{}", "─".repeat(40));
            }
            print_book(book);
        }
        RestoreState::Resolved(None) => println!("{}", "No book added yet".dimmed()),
        RestoreState::Failed(err) => {
            println!("{}", "No book available".dimmed());
            if !quiet {
                eprintln!("{}: {}", "Warning".yellow(), err);
            }
        }
        RestoreState::Uninitialized | RestoreState::Loading => {
            println!("{}", "No book available".dimmed())
        }
    }
    Ok(())
}

pub fn print_book(book: &CurrentBook) {
    print_field("Title", Some(book.title.as_str()));
    print_field("Id", Some(book.id.as_str()));
    print_field("Author", book.author.as_deref());
    print_field("Duration", book.duration_display().as_deref());
    print_field("File", book.file_uri.as_deref());
    print_field("Cover", book.cover_uri.as_deref());
}

fn print_field(name: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{:>10}: {}", name.cyan(), v);
    }
}
