use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use standup_core::Config;

mod commands;
mod helper;
mod logging;
mod terminal;

use terminal::TerminalConsole;

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Standup - a stand-up comedy game and a poem generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/standup/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the stage and tell jokes until you 'leave'
    Game,
    /// Write a short poem from four words
    Poem,
}

/// Loads the config before logging exists; the caller reports `found` once
/// the subscriber is installed.
fn load_config(path: &Path) -> Result<(Config, bool)> {
    let found = path.exists();
    let config = Config::load_from(path).context("Failed to load config")?;
    Ok((config, found))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path().context("Failed to resolve config path")?,
    };
    let (config, found) = load_config(&config_path)?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    logging::init_logging(filter);

    if found {
        tracing::debug!("[Config] Loaded {:?}", config_path);
    } else {
        tracing::debug!("[Config] {:?} not found, using defaults", config_path);
    }

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let mut console =
        TerminalConsole::new(config.history).context("Failed to open the terminal")?;

    match cli.command {
        Commands::Game => commands::game::run(&mut console)?,
        Commands::Poem => commands::poem::run(&mut console)?,
    }

    Ok(())
}
