//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use lunch_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "lunch")]
#[command(version)]
#[command(about = "What's for lunch? Spin the wheel and find out")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Spin the wheel once and print the pick
    Spin {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured restaurants in wheel order
    List {
        /// Print the restaurants as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to the interactive wheel
    let Some(command) = cli.command else {
        let (config, _logging) = load_session()?;
        return commands::wheel::run(&config);
    };

    match command {
        Commands::Spin { json } => {
            let (config, _logging) = load_session()?;
            commands::spin::run(&config, json)
        }
        Commands::List { json } => {
            let (config, _logging) = load_session()?;
            commands::list::run(&config, json)
        }

        // Config commands must keep working when the current file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

/// Loads the config and starts file logging at its level.
fn load_session() -> Result<(config::Config, logging::LoggingGuard)> {
    let config = config::Config::load().context("load config")?;
    let guard = logging::init_logging(&config::paths::logs_dir(), &config.log_level);
    tracing::debug!(restaurants = config.restaurants.len(), "config loaded");
    Ok((config, guard))
}
