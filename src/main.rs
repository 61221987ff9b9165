use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quotebook::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for quotebook::AppCommand {
    fn from(cmd: Commands) -> quotebook::AppCommand {
        match cmd {
            Commands::Random => quotebook::AppCommand::Random,
            Commands::Last => quotebook::AppCommand::Last,
            Commands::List { category } => quotebook::AppCommand::List { category },
            Commands::Categories => quotebook::AppCommand::Categories,
            Commands::Add { text, category } => quotebook::AppCommand::Add { text, category },
            Commands::Import { file } => quotebook::AppCommand::Import { path: file },
            Commands::Export { output } => quotebook::AppCommand::Export { path: output },
            Commands::Sync => quotebook::AppCommand::Sync,
            Commands::Watch => quotebook::AppCommand::Watch,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show a random quote
    Random,
    /// Show the quote displayed last in this session
    Last,
    /// List quotes, optionally filtered by category ("all" for every quote)
    List {
        /// Category to show; defaults to the last selected one
        category: Option<String>,
    },
    /// List known categories
    Categories,
    /// Add a new quote
    Add {
        /// Quote text
        text: String,
        /// Quote category
        category: String,
    },
    /// Append quotes from a JSON file
    Import {
        /// JSON file holding a list of quotes
        file: PathBuf,
    },
    /// Write all quotes to a JSON file
    Export {
        /// Destination file
        #[arg(short, long, default_value = quotebook::core::transfer::EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Sync quotes with the remote server once
    Sync,
    /// Interactive session with periodic background sync
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => quotebook::cli::setup::setup_at_path(path),
            None => quotebook::cli::setup::setup(),
        },
        Some(cmd) => quotebook::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
