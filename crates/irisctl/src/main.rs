//! Iris Control - CLI entry point
//!
//! Classifies each utterance and routes it to weather, clock, calculator,
//! or LLM chat, degrading to canned replies when a credential is absent.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use iris_common::config::SessionConfig;
use irisctl::{repl, status};

#[derive(Parser)]
#[command(name = "irisctl")]
#[command(about = "Iris Assistant - API-integrated chat client", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat session (default)
    Chat,

    /// Show which services the current environment enables
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the chat surface quiet unless asked; warnings still show.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    let config = SessionConfig::from_env();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => repl::run(&config),
        Commands::Status => {
            println!("{}", status::render(&config));
            Ok(())
        }
    }
}
