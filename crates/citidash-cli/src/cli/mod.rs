//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use citidash_core::config::Config;
use citidash_core::{interrupt, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "citidash")]
#[command(version)]
#[command(about = "Citibike NY 2022 strategy dashboard for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dashboard root holding the data and visualisation directories
    #[arg(long, global = true, default_value = ".", env = "CITIDASH_ROOT")]
    root: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the dashboard (default)
    Dashboard,
    /// List the dashboard pages in order
    Pages,
    /// Load every input and print a summary without opening the dashboard
    Check,
    /// Extract the CSV files from a directory of zip archives
    Extract {
        /// Directory holding the *.zip archives
        #[arg(long, value_name = "DIR")]
        source: PathBuf,

        /// Output directory (default: <source>/extracted_data)
        #[arg(long, value_name = "DIR")]
        target: Option<PathBuf>,
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
    /// Print a fresh config generated from the built-in defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Cli {
        command,
        root,
        verbose,
    } = cli;

    // Config commands must work even when the existing file is broken.
    let command = match command {
        Some(Commands::Config { command }) => return run_config(command),
        other => other.unwrap_or(Commands::Dashboard),
    };

    let config = Config::load().context("load config")?;
    let _log_guard = logging::init(&config, verbose)?;
    interrupt::init()?;

    match command {
        Commands::Dashboard => commands::dashboard::run(&root, &config),
        Commands::Pages => {
            commands::pages::list();
            Ok(())
        }
        Commands::Check => commands::check::run(&root, &config),
        Commands::Extract { source, target } => {
            commands::extract::run(&source, target.as_deref())
        }
        Commands::Config { command } => run_config(command),
    }
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
        ConfigCommands::Generate => commands::config::generate(),
    }
}
