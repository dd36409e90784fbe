//! colab-helper: CLI for opening and tracking Google Colab notebooks
//!
//! Opens local notebook files in Colab through the system browser, keeps a
//! short list of recently opened notebooks, and stores a few preferences in
//! ~/.colab-cli/. No Colab API calls are made; downloads are advisory only.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use crate::colab::error::ColabError;

mod colab;
mod commands;
mod config;

#[derive(Parser)]
#[command(name = "colab-helper")]
#[command(about = "CLI helper for Google Colab notebooks", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Notebook operations
    #[command(subcommand)]
    Notebook(NotebookCommands),

    /// Configuration operations
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum NotebookCommands {
    /// Open a notebook in Colab
    Open {
        /// Path to the notebook file
        path: String,

        /// Open in a new window instead of a new tab
        #[arg(long)]
        new_window: bool,
    },

    /// List recent notebooks
    List {
        /// Number of notebooks to list
        #[arg(short = 'n', long, default_value_t = 10)]
        count: i64,
    },

    /// Show how to download a notebook from Colab
    Download {
        /// Colab URL or notebook ID
        url_or_id: String,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get configuration value(s)
    Get {
        /// Configuration key (prints all keys if omitted)
        key: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red(), err);
        let code = err
            .downcast_ref::<ColabError>()
            .map_or(1, ColabError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Notebook(NotebookCommands::Open { path, new_window }) => {
            commands::open::execute(&path, new_window)?;
        }

        Commands::Notebook(NotebookCommands::List { count }) => {
            let output = commands::list::execute(count)?;
            println!("{}", output);
        }

        Commands::Notebook(NotebookCommands::Download { url_or_id, output }) => {
            commands::download::execute(&url_or_id, output.as_deref())?;
        }

        Commands::Config(ConfigCommands::Set { key, value }) => {
            commands::config::set(&key, &value)?;
        }

        Commands::Config(ConfigCommands::Get { key }) => {
            let output = commands::config::get(key.as_deref())?;
            println!("{}", output);
        }
    }

    Ok(())
}
