use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use drstone::app::AppState;
use drstone::config::Config;
use drstone::Category;

mod cli;

#[derive(Parser)]
#[command(name = "drstone")]
#[command(about = "DrStone - level up your medical knowledge")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.drstone/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Study content file (.yaml/.yml/.toml) replacing the built-in catalog
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the DrStone window (default)
    Gui,

    /// Show level, XP, stones, streak and trophies
    Dashboard,

    /// List study modules
    Modules {
        /// Show only this module
        id: Option<String>,

        /// Show only modules of this category (e.g. anatomy)
        #[arg(long, conflicts_with = "id")]
        category: Option<Category>,
    },

    /// List the available challenges
    Quizzes,

    /// Take a challenge in the terminal
    Quiz {
        /// Challenge id (see `drstone quizzes`)
        id: String,
    },

    /// Ask Dr. Stone to explain a medical concept
    Ask {
        /// The concept, e.g. "warfarin mechanism"
        #[arg(required = true, num_args = 1..)]
        concept: Vec<String>,
    },

    /// Write a default ~/.drstone/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.as_deref();
    let content = cli.content.as_deref();
    let load_state = |config: &Config| AppState::from_config(config, content);

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        Some(Commands::Dashboard) => {
            let state = load_state(&Config::load(config_path)?)?;
            cli::dashboard::dashboard_command(state.stats())?;
        }
        Some(Commands::Modules { id, category }) => {
            let state = load_state(&Config::load(config_path)?)?;
            cli::catalog::modules_command(state.catalog(), id.as_deref(), category)?;
        }
        Some(Commands::Quizzes) => {
            let state = load_state(&Config::load(config_path)?)?;
            cli::catalog::quizzes_command(state.catalog())?;
        }
        Some(Commands::Quiz { id }) => {
            let mut state = load_state(&Config::load(config_path)?)?;
            cli::quiz::quiz_command(&mut state, &id)?;
        }
        Some(Commands::Ask { concept }) => {
            cli::ask::ask_command(&Config::load(config_path)?, concept).await?;
        }
        Some(Commands::Gui) | None => {
            drstone::gui::run_gui(&Config::load(config_path)?, content)?;
        }
    }

    Ok(())
}
