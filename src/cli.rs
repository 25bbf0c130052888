use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::shell::Route;

#[derive(Parser)]
#[command(name = "sonora")]
#[command(about = "Audiobook player shell that remembers the last added book")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Record file to use instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sonora/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book and make it the one the player opens next start
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Book id (derived from title, file and time if omitted)
        #[arg(long)]
        id: Option<String>,

        /// Author name
        #[arg(long)]
        author: Option<String>,

        /// Duration in seconds
        #[arg(long)]
        duration: Option<u64>,

        /// Audio file reference
        #[arg(long)]
        file: Option<String>,

        /// Cover image reference
        #[arg(long)]
        cover: Option<String>,
    },

    /// Mount the navigation shell and render a tab
    Start {
        /// Tab to render (uses config default if not specified)
        #[arg(long, value_enum)]
        tab: Option<Route>,

        /// Render immediately instead of waiting for the stored book
        #[arg(long)]
        no_wait: bool,

        /// Output the rendered frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what the player would be seeded with
    Current {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the stored book
    Clear,

    /// Open the project repository
    Repo {
        /// Print the URL instead of opening it
        #[arg(long)]
        print: bool,
    },

    /// Create a config file interactively
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
