use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use super::current::print_book;
use crate::continuity::ContinuityController;
use crate::shell::chrome::rgb;
use crate::shell::{Chrome, Frame, NavigationShell, Route, Screen};
use crate::store::FileBookStore;

pub struct StartOptions {
    /// Tab the shell mounts on
    pub initial_tab: Route,
    /// Tab to switch to before rendering, if different
    pub tab: Option<Route>,
    pub no_wait: bool,
    pub json: bool,
    pub quiet: bool,
}

pub async fn run(store_path: &Path, chrome: Chrome, options: StartOptions) -> Result<()> {
    let controller = Arc::new(ContinuityController::new(Arc::new(FileBookStore::new(
        store_path,
    ))));
    let mut shell = NavigationShell::mount(controller, chrome, options.initial_tab);
    if let Some(tab) = options.tab {
        shell.navigate(tab);
    }

    if !options.no_wait {
        shell.settle().await;
    }

    let frame = shell.render();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        let restore_failed = shell.controller().state().is_failed();
        print_frame(&frame, shell.chrome(), restore_failed, options.quiet);
    }

    // let a still-running restoration finish before the process exits
    shell.settle().await;
    Ok(())
}

fn paint(text: &str, hex: &str) -> colored::ColoredString {
    match rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn print_frame(frame: &Frame, chrome: &Chrome, restore_failed: bool, quiet: bool) {
    let theme = &chrome.theme;

    if !quiet {
        println!(
            "[{}]  {}  [{} {}]",
            frame.header.left_icon,
            paint(frame.header.title, theme.text).bold(),
            frame.header.right_action.icon,
            frame.header.right_action.url.dimmed()
        );
        println!("{}", paint(&"─".repeat(40), theme.border));
    }

    match &frame.body {
        Screen::Player(params) => match &params.initial_book {
            Some(book) => print_book(book),
            None => println!("{}", "No book selected".dimmed()),
        },
        Screen::AddBook => println!("Add a book with: {}", "sonora add --title <TITLE>".cyan()),
    }

    if !quiet {
        println!("{}", paint(&"─".repeat(40), theme.border));
        let tabs: Vec<String> = frame
            .tabs
            .iter()
            .map(|tab| {
                let text = format!("({}) {}", tab.icon, tab.label);
                let painted = paint(&text, tab.tint);
                if tab.focused {
                    painted.bold().to_string()
                } else {
                    painted.to_string()
                }
            })
            .collect();
        println!("{}", tabs.join("   "));
        let restore = format!("restore: {}", frame.restore_state);
        if restore_failed {
            println!("{}", restore.yellow());
        } else {
            println!("{}", restore.dimmed());
        }
    }
}
