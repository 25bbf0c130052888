use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::shell::{Route, DEFAULT_REPOSITORY_URL};

/// Run the init command - interactively create a config file
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    println!("{}", "sonora configuration".bold());
    println!();
    println!(
        "This will create a config file at: {}",
        config_path.display().to_string().cyan()
    );
    println!();

    let store_path = prompt_store_path()?;
    let initial_tab = prompt_initial_tab()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let config_content = render_config(&store_path, initial_tab);

    std::fs::write(config_path, &config_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!();
    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("You can now use:");
    println!("  {} - add a book", "sonora add --title <TITLE>".cyan());
    println!("  {} - open the player", "sonora start".cyan());

    Ok(())
}

fn render_config(store_path: &Path, initial_tab: Route) -> String {
    let tab = initial_tab
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| "player".to_string());

    format!(
        r#"# sonora configuration

[store]
path = "{}"

[shell]
initial_tab = "{}"
repository_url = "{}"
"#,
        store_path.display().to_string().replace('\\', "\\\\"),
        tab,
        DEFAULT_REPOSITORY_URL
    )
}

fn read_line() -> Result<String> {
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_store_path() -> Result<PathBuf> {
    println!("{}", "Step 1: Choose where the last added book is kept".bold());
    println!();

    let default = Config::default_store_path()?;
    print!(
        "Enter record file [{}]: ",
        default.display().to_string().green()
    );
    let input = read_line()?;

    let path = if input.is_empty() {
        default
    } else if let Some(stripped) = input.strip_prefix("~/") {
        // Expand ~ to home directory
        match dirs::home_dir() {
            Some(home) => home.join(stripped),
            None => PathBuf::from(&input),
        }
    } else {
        PathBuf::from(&input)
    };

    println!();
    Ok(path)
}

fn prompt_initial_tab() -> Result<Route> {
    println!("{}", "Step 2: Choose the tab shown at start".bold());
    println!();
    for route in Route::ALL {
        if let Some(value) = route.to_possible_value() {
            println!("  {} - {}", value.get_name().cyan(), route.label());
        }
    }
    println!();

    print!("Enter tab [{}]: ", "player".green());
    let input = read_line()?;

    if input.is_empty() {
        return Ok(Route::Player);
    }
    match Route::from_str(&input, true) {
        Ok(route) => Ok(route),
        Err(_) => bail!("Unknown tab: {}. Valid tabs: player, add-book", input),
    }
}
