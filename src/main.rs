mod book;
mod cli;
mod commands;
mod config;
mod continuity;
mod intake;
mod shell;
mod store;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use intake::BookDraft;
use shell::Chrome;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "sonora=debug" } else { "sonora=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    let load_config = || Config::load_from(&config_path);

    match cli.command {
        Commands::Init { force } => {
            commands::init::run(&config_path, force)?;
        }
        Commands::Add {
            title,
            id,
            author,
            duration,
            file,
            cover,
        } => {
            let config = load_config()?;
            let store_path = config.store_path(cli.store.as_deref())?;
            let draft = BookDraft {
                id,
                title,
                author,
                duration_seconds: duration,
                file_uri: file,
                cover_uri: cover,
            };
            commands::add::run(&store_path, draft, cli.quiet).await?;
        }
        Commands::Start { tab, no_wait, json } => {
            let config = load_config()?;
            let chrome = Chrome::new(config.shell.repository_url.clone());
            let store_path = config.store_path(cli.store.as_deref())?;
            let options = commands::start::StartOptions {
                initial_tab: config.initial_tab(None),
                tab,
                no_wait,
                json,
                quiet: cli.quiet,
            };
            commands::start::run(&store_path, chrome, options).await?;
        }
        Commands::Current { json } => {
            let config = load_config()?;
            let store_path = config.store_path(cli.store.as_deref())?;
            commands::current::run(&store_path, json, cli.quiet).await?;
        }
        Commands::Clear => {
            let config = load_config()?;
            let store_path = config.store_path(cli.store.as_deref())?;
            commands::clear::run(&store_path, cli.quiet).await?;
        }
        Commands::Repo { print } => {
            let config = load_config()?;
            commands::repo::run(&Chrome::new(config.shell.repository_url), print)?;
        }
    }

    Ok(())
}
