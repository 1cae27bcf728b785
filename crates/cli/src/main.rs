//! Hartna CLI - Catalog maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the default catalog into HARTNA_DATA_DIR (existing documents are kept)
//! hartna seed
//!
//! # Overwrite every document with the defaults
//! hartna seed --force
//!
//! # Hash the admin password for ADMIN_PASSWORD_HASH
//! printf '%s' 'my password' | hartna hash-password
//!
//! # Print stored contact messages (add --json for machine output)
//! hartna messages list
//!
//! # Restore default site settings
//! hartna settings reset
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hartna")]
#[command(author, version, about = "Hartna catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default catalog to the data directory
    Seed {
        /// Overwrite documents that already exist
        #[arg(long)]
        force: bool,
    },
    /// Read a password from stdin and print its argon2 hash
    HashPassword,
    /// Contact messages
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
    /// Site settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum MessagesAction {
    /// Print stored messages, oldest first
    List {
        /// Print the messages as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Restore the default site settings
    Reset,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hartna=info,hartna_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::HashPassword => commands::password::hash_from_stdin()?,
        Commands::Messages { action } => match action {
            MessagesAction::List { json } => commands::messages::list(json).await?,
        },
        Commands::Settings { action } => match action {
            SettingsAction::Reset => commands::settings::reset().await?,
        },
    }
    Ok(())
}
